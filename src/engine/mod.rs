//! The route decision pipeline.
//!
//! Wires the candidate filter, distance estimator, freshness model, and
//! multi-criteria optimizer into a single synchronous computation:
//! request in, immutable [`OptimizationResult`] out. The pipeline holds no
//! mutable state between calls and performs no I/O, so concurrent calls
//! never interfere and identical inputs always produce identical results.

mod assembler;
mod filter;
mod optimizer;

pub use assembler::{assemble, CURRENCY};
pub use filter::filter_candidates;
pub use optimizer::{
    compare_candidates, evaluate_candidates, score_candidates, RISK_PER_RATING_POINT,
};

use crate::distance::DistanceEstimator;
use crate::error::EngineError;
use crate::models::{
    OptimizationResult, ShipmentRequest, STATUS_LOCATION_UNRESOLVED,
    STATUS_NO_FEASIBLE_TRANSPORTER,
};
use crate::registry::RegistrySource;
use tracing::debug;

/// The decision engine: selects the best transporter for a shipment
/// request against a registry snapshot.
///
/// Structural input errors (zero quantity, non-positive shelf life, bad
/// catalog data) are returned as `Err`. Business outcomes that a planner
/// can react to programmatically (no feasible transporter, unresolved
/// location) come back as failed results with `success == false`.
///
/// # Examples
///
/// ```
/// use flora_route::engine::RouteOptimizer;
/// use flora_route::models::{Priority, Role, ShipmentRequest};
/// use flora_route::registry::FixtureRegistry;
///
/// let registry = FixtureRegistry::new();
/// let request = ShipmentRequest::new(
///     (Role::Harvester, 1),
///     (Role::Retailer, 1),
///     500,
///     72.0,
///     Priority::Balanced,
/// )
/// .with_cold_chain_required(true);
///
/// let result = RouteOptimizer::new(&registry).optimize(&request).unwrap();
/// assert!(result.success);
/// assert_eq!(result.num_selected(), 1);
/// ```
pub struct RouteOptimizer<'a, R: RegistrySource> {
    registry: &'a R,
}

impl<'a, R: RegistrySource> RouteOptimizer<'a, R> {
    /// Creates an optimizer over the given registry snapshot.
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Runs the full decision pipeline for one request.
    pub fn optimize(&self, request: &ShipmentRequest) -> Result<OptimizationResult, EngineError> {
        request.validate()?;

        let source = match self.registry.node(request.source()) {
            Some(n) => n,
            None => return Ok(OptimizationResult::infeasible(STATUS_LOCATION_UNRESOLVED)),
        };
        let destination = match self.registry.node(request.destination()) {
            Some(n) => n,
            None => return Ok(OptimizationResult::infeasible(STATUS_LOCATION_UNRESOLVED)),
        };

        let estimator = match self.registry.links() {
            Some(links) => DistanceEstimator::with_links(links),
            None => DistanceEstimator::new(),
        };
        let distance_km = match estimator.estimate(source, destination) {
            Ok(km) => km,
            Err(EngineError::LocationUnresolved { role, id }) => {
                debug!(%role, id, "route endpoint could not be geolocated");
                return Ok(OptimizationResult::infeasible(STATUS_LOCATION_UNRESOLVED));
            }
            Err(e) => return Err(e),
        };

        let pool = filter_candidates(self.registry.transporters(), request);
        debug!(
            pool = pool.len(),
            catalog = self.registry.transporters().len(),
            distance_km,
            "filtered transporter pool"
        );
        if pool.is_empty() {
            return Ok(OptimizationResult::infeasible(
                STATUS_NO_FEASIBLE_TRANSPORTER,
            ));
        }

        let mut candidates = evaluate_candidates(&pool, request, distance_km)?;

        // A single survivor wins outright; the weighted comparison only
        // matters between alternatives.
        if candidates.len() > 1 {
            score_candidates(&mut candidates, request.priority().weights());
        }

        let selected = candidates
            .iter()
            .min_by(|a, b| compare_candidates(a, b))
            .cloned()
            .ok_or_else(|| EngineError::Configuration("empty candidate pool".to_string()))?;
        debug!(
            winner = selected.transporter().id(),
            score = selected.combined_score(),
            "selected transporter"
        );

        Ok(assemble(&selected, &candidates, request, distance_km))
    }
}
