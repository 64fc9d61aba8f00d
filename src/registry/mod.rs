//! Read-only registry snapshots of nodes and transporters.
//!
//! The engine never fetches: callers hand it a [`RegistrySource`] snapshot
//! and the registry variant is selected by configuration, not by catching
//! connection failures at runtime. [`SnapshotRegistry`] wraps a pre-fetched
//! live catalog; [`FixtureRegistry`] carries a static demo catalog.

mod fixture;
mod snapshot;

pub use fixture::FixtureRegistry;
pub use snapshot::SnapshotRegistry;

use crate::distance::LinkTable;
use crate::models::{Node, NodeKey, Transporter};

/// A read-only snapshot of the node and transporter catalogs.
///
/// Implementations are immutable for the duration of an optimization call;
/// the engine never writes back.
pub trait RegistrySource {
    /// Looks up a node by role and identifier.
    fn node(&self, key: NodeKey) -> Option<&Node>;

    /// Returns the transporter catalog.
    fn transporters(&self) -> &[Transporter];

    /// Returns the fixed inter-node distance table, if the registry
    /// provides one.
    fn links(&self) -> Option<&LinkTable> {
        None
    }
}
