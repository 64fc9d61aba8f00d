//! Static fixture registry for demos and tests.

use crate::distance::LinkTable;
use crate::models::{GeoPoint, Node, NodeKey, Role, Transporter};
use crate::registry::{RegistrySource, SnapshotRegistry};

/// A registry carrying a small static catalog of Indian flower-market
/// entities.
///
/// This is the configured fallback for environments without a live
/// catalog (demos, integration tests, offline development). It is chosen
/// explicitly, never silently substituted when a live fetch fails.
///
/// # Examples
///
/// ```
/// use flora_route::registry::{FixtureRegistry, RegistrySource};
/// use flora_route::models::Role;
///
/// let registry = FixtureRegistry::new();
/// assert_eq!(registry.transporters().len(), 3);
/// assert!(registry.node((Role::Harvester, 1)).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct FixtureRegistry {
    inner: SnapshotRegistry,
}

impl FixtureRegistry {
    /// Builds the fixture catalog.
    pub fn new() -> Self {
        let nodes = vec![
            Node::new(1, Role::Harvester, "Green Valley Farms")
                .with_location("Pune")
                .with_coord(GeoPoint::new(18.5204, 73.8567)),
            Node::new(2, Role::Harvester, "Sunrise Flowers")
                .with_location("Nashik")
                .with_coord(GeoPoint::new(19.9975, 73.7898)),
            Node::new(3, Role::Harvester, "Blossom Gardens")
                .with_location("Bangalore")
                .with_coord(GeoPoint::new(12.9716, 77.5946)),
            Node::new(1, Role::Distributor, "Metro Flower Hub")
                .with_location("Mumbai")
                .with_coord(GeoPoint::new(19.0760, 72.8777)),
            Node::new(2, Role::Distributor, "Central Florals Dist")
                .with_location("Delhi")
                .with_coord(GeoPoint::new(28.7041, 77.1025)),
            Node::new(1, Role::Wholesaler, "Dadar Flower Market")
                .with_location("Mumbai")
                .with_coord(GeoPoint::new(19.0178, 72.8478)),
            Node::new(2, Role::Wholesaler, "Ghazipur Mandi")
                .with_location("Delhi")
                .with_coord(GeoPoint::new(28.6253, 77.3212)),
            Node::new(1, Role::Retailer, "Rose Garden Florist")
                .with_location("Bandra, Mumbai")
                .with_coord(GeoPoint::new(19.0596, 72.8295)),
            Node::new(2, Role::Retailer, "Bloom & Petals")
                .with_location("Connaught Place, Delhi")
                .with_coord(GeoPoint::new(28.6315, 77.2167)),
            Node::new(3, Role::Retailer, "Fresh Flowers Hub")
                .with_location("Koramangala, Bangalore")
                .with_coord(GeoPoint::new(12.9352, 77.6245)),
        ];

        let transporters = vec![
            Transporter::new(1, "ColdChain Express", "Refrigerated Truck", 2000)
                .with_cold_chain(true)
                .with_rates(0.0, 15.0)
                .with_speed(50.0)
                .with_rating(4.75),
            Transporter::new(2, "FastFlora Logistics", "Van", 1000)
                .with_cold_chain(false)
                .with_rates(0.0, 8.0)
                .with_speed(60.0)
                .with_rating(4.0),
            Transporter::new(3, "Premium Florals Transport", "Climate-Controlled Van", 1500)
                .with_cold_chain(true)
                .with_rates(0.0, 12.0)
                .with_speed(55.0)
                .with_rating(4.6),
        ];

        Self {
            inner: SnapshotRegistry::new(nodes, transporters),
        }
    }
}

impl Default for FixtureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrySource for FixtureRegistry {
    fn node(&self, key: NodeKey) -> Option<&Node> {
        self.inner.node(key)
    }

    fn transporters(&self) -> &[Transporter] {
        self.inner.transporters()
    }

    fn links(&self) -> Option<&LinkTable> {
        self.inner.links()
    }
}
