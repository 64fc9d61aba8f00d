//! Policy comparison simulation.
//!
//! Replays a batch of randomly drawn orders through the decision engine
//! and through a naive always-first-transporter policy, then aggregates
//! cost, time, and freshness for both. The order stream comes from a
//! seeded generator, so a fixed seed reproduces the exact comparison.

use crate::distance::DistanceEstimator;
use crate::engine::RouteOptimizer;
use crate::error::EngineError;
use crate::freshness::freshness_score;
use crate::models::{Priority, Role, ShipmentRequest};
use crate::registry::RegistrySource;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Aggregated outcomes for one routing policy over a simulated batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyTotals {
    /// Sum of transport costs across completed orders.
    pub total_cost: f64,
    /// Sum of transit hours across completed orders.
    pub total_time_hours: f64,
    /// Mean projected arrival freshness across completed orders.
    pub mean_freshness: f64,
}

/// Side-by-side aggregates for the optimizer versus the naive policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparison {
    /// Orders that completed under both policies.
    pub orders_run: usize,
    /// Orders skipped (infeasible or unresolved under the optimizer).
    pub orders_skipped: usize,
    /// Aggregates for the multi-criteria optimizer.
    pub optimized: PolicyTotals,
    /// Aggregates for the always-first-transporter policy.
    pub naive: PolicyTotals,
    /// Relative cost saving of the optimizer, in percent.
    pub cost_savings_pct: f64,
    /// Relative time saving of the optimizer, in percent.
    pub time_savings_pct: f64,
    /// Mean freshness gain of the optimizer, in points.
    pub freshness_gain_points: f64,
}

/// Draws `num_orders` random harvester-to-retailer orders and compares the
/// optimizer against always picking the catalog's first transporter.
///
/// Quantities range over 100..=2000 units and shelf lives over 48..=96
/// hours, matching typical cut-flower batches. Orders the optimizer
/// cannot complete (no feasible transporter, unresolved endpoint) are
/// skipped for both policies so the aggregates stay comparable.
/// Deterministic for a fixed seed.
///
/// Returns [`EngineError::Configuration`] if the registry has no
/// transporters or no harvester/retailer nodes to draw from.
pub fn compare_policies<R: RegistrySource>(
    registry: &R,
    num_orders: usize,
    seed: u64,
) -> Result<PolicyComparison, EngineError> {
    let first = registry
        .transporters()
        .first()
        .ok_or_else(|| EngineError::Configuration("empty transporter catalog".to_string()))?
        .clone();

    let harvesters = role_ids(registry, Role::Harvester);
    let retailers = role_ids(registry, Role::Retailer);
    if harvesters.is_empty() || retailers.is_empty() {
        return Err(EngineError::Configuration(
            "registry needs at least one harvester and one retailer".to_string(),
        ));
    }

    let optimizer = RouteOptimizer::new(registry);
    let estimator = match registry.links() {
        Some(links) => DistanceEstimator::with_links(links),
        None => DistanceEstimator::new(),
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut optimized = PolicyTotals::default();
    let mut naive = PolicyTotals::default();
    let mut completed = 0usize;
    let mut skipped = 0usize;
    let mut optimized_freshness_sum = 0.0;
    let mut naive_freshness_sum = 0.0;

    for _ in 0..num_orders {
        let source = harvesters[rng.random_range(0..harvesters.len() as u64) as usize];
        let destination = retailers[rng.random_range(0..retailers.len() as u64) as usize];
        let quantity = rng.random_range(100..=2000u64) as u32;
        let shelf_life = rng.random_range(48..=96u64) as f64;

        let request = ShipmentRequest::new(
            (Role::Harvester, source),
            (Role::Retailer, destination),
            quantity,
            shelf_life,
            Priority::Balanced,
        );

        let result = optimizer.optimize(&request)?;
        if !result.success {
            skipped += 1;
            continue;
        }

        let cost = result
            .cost_breakdown
            .as_ref()
            .map(|c| c.transport_cost)
            .unwrap_or_default();
        let time = result
            .time_breakdown
            .as_ref()
            .map(|t| t.transit_time_hours)
            .unwrap_or_default();
        let freshness = result
            .quality_metrics
            .as_ref()
            .map(|q| q.expected_freshness_on_arrival)
            .unwrap_or_default();

        // Naive policy: first transporter in the catalog, constraints
        // ignored, same route.
        let src = registry
            .node((Role::Harvester, source))
            .ok_or_else(|| EngineError::Configuration("harvester vanished".to_string()))?;
        let dst = registry
            .node((Role::Retailer, destination))
            .ok_or_else(|| EngineError::Configuration("retailer vanished".to_string()))?;
        let distance_km = estimator.estimate(src, dst)?;
        let naive_time = distance_km / first.speed_kmph();
        let naive_cost = first.base_rate() + first.rate_per_km() * distance_km;
        let naive_freshness = freshness_score(naive_time, shelf_life, 0.0)?;

        optimized.total_cost += cost;
        optimized.total_time_hours += time;
        optimized_freshness_sum += freshness;
        naive.total_cost += naive_cost;
        naive.total_time_hours += naive_time;
        naive_freshness_sum += naive_freshness;
        completed += 1;
    }

    if completed > 0 {
        optimized.mean_freshness = optimized_freshness_sum / completed as f64;
        naive.mean_freshness = naive_freshness_sum / completed as f64;
    }
    debug!(completed, skipped, "policy comparison finished");

    Ok(PolicyComparison {
        orders_run: completed,
        orders_skipped: skipped,
        cost_savings_pct: savings_pct(optimized.total_cost, naive.total_cost),
        time_savings_pct: savings_pct(optimized.total_time_hours, naive.total_time_hours),
        freshness_gain_points: optimized.mean_freshness - naive.mean_freshness,
        optimized,
        naive,
    })
}

fn role_ids<R: RegistrySource>(registry: &R, role: Role) -> Vec<u32> {
    // Registry lookups are keyed, not enumerable; probe a small ID range.
    (1..=64u32)
        .filter(|&id| registry.node((role, id)).is_some())
        .collect()
}

fn savings_pct(optimized: f64, baseline: f64) -> f64 {
    if baseline <= 0.0 {
        0.0
    } else {
        (1.0 - optimized / baseline) * 100.0
    }
}
