//! Optimization result and its breakdown sections.

use crate::models::{NodeKey, Role};
use serde::{Deserialize, Serialize};

/// Status string for a successful selection.
pub const STATUS_OPTIMAL: &str = "OPTIMAL";
/// Status string when no transporter satisfies the hard constraints.
pub const STATUS_NO_FEASIBLE_TRANSPORTER: &str = "NO_FEASIBLE_TRANSPORTER";
/// Status string when a route endpoint cannot be geolocated.
pub const STATUS_LOCATION_UNRESOLVED: &str = "LOCATION_UNRESOLVED";

/// One endpoint of the evaluated route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteEndpoint {
    /// Role category of the node.
    #[serde(rename = "type")]
    pub role: Role,
    /// Node identifier within that role.
    pub id: u32,
}

impl From<NodeKey> for RouteEndpoint {
    fn from((role, id): NodeKey) -> Self {
        Self { role, id }
    }
}

/// The chosen route: endpoints plus resolved distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Source endpoint.
    pub source: RouteEndpoint,
    /// Destination endpoint.
    pub destination: RouteEndpoint,
    /// Resolved distance in kilometers.
    pub distance_km: f64,
}

/// Identity of the winning transporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedTransporter {
    /// Transporter identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Vehicle class label.
    pub vehicle: String,
    /// Cold-chain capability.
    pub cold_chain: bool,
    /// Rated capacity in units.
    pub capacity: u32,
}

/// Monetary breakdown for the winning candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Total transport cost.
    pub transport_cost: f64,
    /// Per-km rate applied.
    pub cost_per_km: f64,
    /// Currency code.
    pub currency: String,
}

/// Timing breakdown for the winning candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    /// Estimated transit time in hours.
    pub transit_time_hours: f64,
    /// Speed assumed for the estimate, in km/h.
    pub estimated_speed_kmph: f64,
}

/// Quality projection for the winning candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// Transporter quality rating in [0, 5].
    pub transporter_quality: f64,
    /// Projected freshness on arrival, in [0, 100].
    pub expected_freshness_on_arrival: f64,
    /// Derived risk score in [0, 100]; banding is a presentation concern.
    pub risk_level: f64,
}

/// One row of the candidate comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Transporter identifier.
    pub transporter_id: u32,
    /// Transporter display name.
    pub name: String,
    /// Monetary cost for this candidate.
    pub cost: f64,
    /// Transit time in hours.
    pub time_hours: f64,
    /// Projected arrival freshness in [0, 100].
    pub freshness: f64,
    /// Derived risk score in [0, 100].
    pub risk: f64,
    /// Whether this candidate won.
    pub selected: bool,
}

/// The full comparison table, ordered by combined score ascending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Comparison {
    /// All evaluated candidates, best first.
    pub all_options: Vec<ComparisonRow>,
}

/// The immutable outcome of one optimization call.
///
/// Exactly one comparison row is marked `selected` when `success` is true;
/// when `success` is false no row is selected and `status` names the
/// rejection path. Infeasibility is a normal result value, never an error.
///
/// # Examples
///
/// ```
/// use flora_route::models::{OptimizationResult, STATUS_NO_FEASIBLE_TRANSPORTER};
///
/// let r = OptimizationResult::infeasible(STATUS_NO_FEASIBLE_TRANSPORTER);
/// assert!(!r.success);
/// assert!(r.comparison.all_options.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Whether a transporter was selected.
    pub success: bool,
    /// Status string explaining the outcome.
    pub status: String,
    /// Route summary; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteSummary>,
    /// Winning transporter; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_transporter: Option<SelectedTransporter>,
    /// Cost breakdown; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_breakdown: Option<CostBreakdown>,
    /// Time breakdown; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_breakdown: Option<TimeBreakdown>,
    /// Quality projection; absent on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_metrics: Option<QualityMetrics>,
    /// Ranked comparison of every evaluated candidate.
    pub comparison: Comparison,
}

impl OptimizationResult {
    /// Creates a failed result with the given status and no candidates.
    pub fn infeasible(status: impl Into<String>) -> Self {
        Self {
            success: false,
            status: status.into(),
            route: None,
            selected_transporter: None,
            cost_breakdown: None,
            time_breakdown: None,
            quality_metrics: None,
            comparison: Comparison::default(),
        }
    }

    /// Number of comparison rows marked as selected.
    pub fn num_selected(&self) -> usize {
        self.comparison
            .all_options
            .iter()
            .filter(|row| row.selected)
            .count()
    }
}
