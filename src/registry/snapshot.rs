//! Registry backed by a caller-supplied snapshot.

use crate::distance::LinkTable;
use crate::models::{Node, NodeKey, Transporter};
use crate::registry::RegistrySource;
use std::collections::HashMap;

/// A registry built from a pre-fetched catalog snapshot.
///
/// This is the "live" variant: the hosting service fetches the current
/// catalogs from wherever they are kept (chain, database, API), builds a
/// snapshot, and hands it to the engine. Re-fetching a stale snapshot is
/// the caller's responsibility.
///
/// # Examples
///
/// ```
/// use flora_route::models::{Node, Role, Transporter};
/// use flora_route::registry::{RegistrySource, SnapshotRegistry};
///
/// let registry = SnapshotRegistry::new(
///     vec![Node::new(1, Role::Harvester, "Green Valley Farms")],
///     vec![Transporter::new(1, "ColdChain Express", "Refrigerated Truck", 2000)],
/// );
/// assert!(registry.node((Role::Harvester, 1)).is_some());
/// assert_eq!(registry.transporters().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotRegistry {
    nodes: HashMap<NodeKey, Node>,
    transporters: Vec<Transporter>,
    links: Option<LinkTable>,
}

impl SnapshotRegistry {
    /// Creates a registry from node and transporter catalogs.
    ///
    /// A node registered twice under the same key keeps the later entry.
    pub fn new(nodes: Vec<Node>, transporters: Vec<Transporter>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|n| (n.key(), n)).collect(),
            transporters,
            links: None,
        }
    }

    /// Attaches a fixed inter-node distance table.
    pub fn with_links(mut self, links: LinkTable) -> Self {
        self.links = Some(links);
        self
    }

    /// Number of registered nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}

impl RegistrySource for SnapshotRegistry {
    fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(&key)
    }

    fn transporters(&self) -> &[Transporter] {
        &self.transporters
    }

    fn links(&self) -> Option<&LinkTable> {
        self.links.as_ref()
    }
}
