//! Route candidate: one transporter evaluated against one request.

use crate::models::Transporter;

/// A (transporter, request) pairing enriched with computed metrics.
///
/// Candidates are transient: the optimizer creates them, scores them, and
/// discards them within a single optimization call. Pool-relative fields
/// (risk, combined score) are filled in after all candidates exist.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteCandidate {
    transporter: Transporter,
    distance_km: f64,
    transit_hours: f64,
    transport_cost: f64,
    arrival_freshness: f64,
    risk: f64,
    combined_score: f64,
}

impl RouteCandidate {
    /// Creates a candidate with its per-transporter metrics.
    ///
    /// Risk and combined score start at zero and are set once the full
    /// pool has been evaluated.
    pub fn new(
        transporter: Transporter,
        distance_km: f64,
        transit_hours: f64,
        transport_cost: f64,
        arrival_freshness: f64,
    ) -> Self {
        Self {
            transporter,
            distance_km,
            transit_hours,
            transport_cost,
            arrival_freshness,
            risk: 0.0,
            combined_score: 0.0,
        }
    }

    /// The evaluated transporter.
    pub fn transporter(&self) -> &Transporter {
        &self.transporter
    }

    /// Route distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Transit time in hours at this transporter's rated speed.
    pub fn transit_hours(&self) -> f64 {
        self.transit_hours
    }

    /// Monetary cost (base rate + per-km rate x distance).
    pub fn transport_cost(&self) -> f64 {
        self.transport_cost
    }

    /// Projected freshness on arrival, in [0, 100].
    pub fn arrival_freshness(&self) -> f64 {
        self.arrival_freshness
    }

    /// Derived risk score, in [0, 100].
    pub fn risk(&self) -> f64 {
        self.risk
    }

    /// Weighted objective score; lower is better.
    pub fn combined_score(&self) -> f64 {
        self.combined_score
    }

    /// Sets the pool-relative risk score.
    pub fn set_risk(&mut self, risk: f64) {
        self.risk = risk;
    }

    /// Sets the weighted objective score.
    pub fn set_combined_score(&mut self, score: f64) {
        self.combined_score = score;
    }
}
