//! Fixed inter-node distance table.

use crate::models::NodeKey;
use std::collections::HashMap;

/// A registry-provided table of fixed distances between node pairs.
///
/// Lookups are symmetric: the distance from A to B equals the distance
/// from B to A. Used as a fallback when a node has no coordinates.
///
/// # Examples
///
/// ```
/// use flora_route::distance::LinkTable;
/// use flora_route::models::Role;
///
/// let mut links = LinkTable::new();
/// links.insert((Role::Harvester, 1), (Role::Retailer, 2), 140.0);
/// assert_eq!(links.get((Role::Retailer, 2), (Role::Harvester, 1)), Some(140.0));
/// assert_eq!(links.get((Role::Harvester, 1), (Role::Retailer, 9)), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
    distances: HashMap<(NodeKey, NodeKey), f64>,
}

impl LinkTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the distance between two nodes, in kilometers.
    ///
    /// Negative distances are clamped to zero.
    pub fn insert(&mut self, a: NodeKey, b: NodeKey, distance_km: f64) {
        self.distances
            .insert(Self::ordered(a, b), distance_km.max(0.0));
    }

    /// Returns the recorded distance between two nodes, if any.
    ///
    /// A node paired with itself always resolves to zero.
    pub fn get(&self, a: NodeKey, b: NodeKey) -> Option<f64> {
        if a == b {
            return Some(0.0);
        }
        self.distances.get(&Self::ordered(a, b)).copied()
    }

    /// Number of recorded links.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` if no links are recorded.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    fn ordered(a: NodeKey, b: NodeKey) -> (NodeKey, NodeKey) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
