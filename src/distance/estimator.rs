//! Distance estimation between supply chain nodes.

use crate::distance::LinkTable;
use crate::error::EngineError;
use crate::models::Node;

/// Resolves the distance between two nodes.
///
/// Prefers great-circle distance from registered coordinates; falls back
/// to a fixed link table when either node has no coordinates. Transit time
/// is not computed here: each candidate transporter converts the distance
/// with its own rated speed.
///
/// # Examples
///
/// ```
/// use flora_route::distance::DistanceEstimator;
/// use flora_route::models::{GeoPoint, Node, Role};
///
/// let src = Node::new(1, Role::Harvester, "Green Valley Farms")
///     .with_coord(GeoPoint::new(18.5204, 73.8567));
/// let dst = Node::new(1, Role::Distributor, "Metro Flower Hub")
///     .with_coord(GeoPoint::new(19.0760, 72.8777));
///
/// let est = DistanceEstimator::new();
/// let km = est.estimate(&src, &dst).unwrap();
/// assert!(km > 100.0 && km < 150.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceEstimator<'a> {
    links: Option<&'a LinkTable>,
}

impl<'a> DistanceEstimator<'a> {
    /// Creates an estimator with no link-table fallback.
    pub fn new() -> Self {
        Self { links: None }
    }

    /// Creates an estimator that falls back to the given link table.
    pub fn with_links(links: &'a LinkTable) -> Self {
        Self { links: Some(links) }
    }

    /// Resolves the distance in kilometers between two nodes.
    ///
    /// The same node as both endpoints legally yields zero. Returns
    /// [`EngineError::LocationUnresolved`] when a node has no coordinates
    /// and no link-table entry covers the pair.
    pub fn estimate(&self, source: &Node, destination: &Node) -> Result<f64, EngineError> {
        if source.key() == destination.key() {
            return Ok(0.0);
        }

        if let (Some(a), Some(b)) = (source.coord(), destination.coord()) {
            return Ok(a.haversine_km(b));
        }

        if let Some(links) = self.links {
            if let Some(km) = links.get(source.key(), destination.key()) {
                return Ok(km);
            }
        }

        // Name the endpoint that could not be geolocated.
        let missing = if source.coord().is_none() {
            source
        } else {
            destination
        };
        Err(EngineError::LocationUnresolved {
            role: missing.role(),
            id: missing.id(),
        })
    }
}
