//! Domain model types for the route decision engine.
//!
//! Provides the core abstractions: supply chain nodes with roles and
//! coordinates, transporters with capacity and cost parameters, shipment
//! requests with priority profiles, and the candidate/result types the
//! optimizer produces.

mod candidate;
mod node;
mod request;
mod result;
mod transporter;

pub use candidate::RouteCandidate;
pub use node::{GeoPoint, Node, NodeKey, Role};
pub use request::{Priority, ShipmentRequest, Weights};
pub use result::{
    Comparison, ComparisonRow, CostBreakdown, OptimizationResult, QualityMetrics, RouteEndpoint,
    RouteSummary, SelectedTransporter, TimeBreakdown, STATUS_LOCATION_UNRESOLVED,
    STATUS_NO_FEASIBLE_TRANSPORTER, STATUS_OPTIMAL,
};
pub use transporter::Transporter;
