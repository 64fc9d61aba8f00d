//! Supply chain node and role types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role category of a supply chain node.
///
/// Batches always move from a source role to a destination role; the role
/// pair also keys node lookups in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Grows and cuts the flowers.
    Harvester,
    /// Regional hub with cold storage.
    Distributor,
    /// Bulk market seller.
    Wholesaler,
    /// End-customer shop.
    Retailer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Harvester => "harvester",
            Role::Distributor => "distributor",
            Role::Wholesaler => "wholesaler",
            Role::Retailer => "retailer",
        };
        f.write_str(s)
    }
}

/// Identifies a node in a registry: role category plus identifier.
pub type NodeKey = (Role, u32);

/// A geographic point in decimal degrees.
///
/// # Examples
///
/// ```
/// use flora_route::models::GeoPoint;
///
/// let pune = GeoPoint::new(18.5204, 73.8567);
/// let mumbai = GeoPoint::new(19.0760, 72.8777);
/// let d = pune.haversine_km(&mumbai);
/// assert!(d > 100.0 && d < 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

impl GeoPoint {
    /// Creates a point from latitude and longitude in decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn haversine_km(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

/// A node in the supply chain: a named entity at a fixed location.
///
/// Nodes are immutable once registered; the registry owns them and the
/// engine only reads snapshots.
///
/// # Examples
///
/// ```
/// use flora_route::models::{GeoPoint, Node, Role};
///
/// let n = Node::new(1, Role::Harvester, "Green Valley Farms")
///     .with_location("Pune")
///     .with_coord(GeoPoint::new(18.5204, 73.8567));
/// assert_eq!(n.id(), 1);
/// assert_eq!(n.role(), Role::Harvester);
/// assert!(n.coord().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: u32,
    role: Role,
    name: String,
    location: Option<String>,
    coord: Option<GeoPoint>,
}

impl Node {
    /// Creates a node with the given identifier, role, and display name.
    ///
    /// Default: no location label and no coordinates.
    pub fn new(id: u32, role: Role, name: impl Into<String>) -> Self {
        Self {
            id,
            role,
            name: name.into(),
            location: None,
            coord: None,
        }
    }

    /// Sets a human-readable location label (city or market name).
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets geographic coordinates.
    pub fn with_coord(mut self, coord: GeoPoint) -> Self {
        self.coord = Some(coord);
        self
    }

    /// Node identifier, unique within its role.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Role category.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Registry key for this node.
    pub fn key(&self) -> NodeKey {
        (self.role, self.id)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location label, if any.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Geographic coordinates, if registered.
    pub fn coord(&self) -> Option<&GeoPoint> {
        self.coord.as_ref()
    }
}
