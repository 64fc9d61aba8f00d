//! Multi-criteria candidate evaluation and scoring.
//!
//! For each feasible transporter the optimizer computes monetary cost,
//! transit time, and projected arrival freshness, derives a risk score,
//! normalizes the three criteria over the pool, and combines them with the
//! request's priority weights. The candidate with the lowest combined
//! score wins; ties break on highest freshness, then lowest transporter
//! identifier, so replaying identical inputs always yields the same
//! decision.

use crate::error::EngineError;
use crate::freshness::freshness_score;
use crate::models::{RouteCandidate, ShipmentRequest, Transporter, Weights};
use std::cmp::Ordering;
use tracing::trace;

/// Risk points added per rating point below the pool's best-rated
/// candidate.
pub const RISK_PER_RATING_POINT: f64 = 10.0;

/// Evaluates every candidate in the filtered pool against the request.
///
/// Each candidate gets its cost (`base_rate + rate_per_km * distance`),
/// transit time at its own rated speed, projected arrival freshness with
/// zero planned breach-hours (a forecast, not a measurement), and a risk
/// score derived from freshness and the rating gap to the pool maximum.
///
/// Returns [`EngineError::Configuration`] if a transporter in the pool has
/// a non-positive rated speed; catalog data is expected to be sane.
pub fn evaluate_candidates(
    pool: &[&Transporter],
    request: &ShipmentRequest,
    distance_km: f64,
) -> Result<Vec<RouteCandidate>, EngineError> {
    let mut candidates = Vec::with_capacity(pool.len());
    for &t in pool {
        if t.speed_kmph() <= 0.0 {
            return Err(EngineError::Configuration(format!(
                "transporter #{} has non-positive speed {}",
                t.id(),
                t.speed_kmph()
            )));
        }

        let transport_cost = t.base_rate() + t.rate_per_km() * distance_km;
        let transit_hours = distance_km / t.speed_kmph();
        let arrival_freshness =
            freshness_score(transit_hours, request.shelf_life_hours(), 0.0)?;

        trace!(
            transporter = t.id(),
            cost = transport_cost,
            hours = transit_hours,
            freshness = arrival_freshness,
            "evaluated candidate"
        );
        candidates.push(RouteCandidate::new(
            t.clone(),
            distance_km,
            transit_hours,
            transport_cost,
            arrival_freshness,
        ));
    }

    apply_risk(&mut candidates);
    Ok(candidates)
}

/// Derives each candidate's risk from its projected freshness and how far
/// its rating sits below the pool maximum. Risk is clamped to [0, 100].
fn apply_risk(candidates: &mut [RouteCandidate]) {
    let max_rating = candidates
        .iter()
        .map(|c| c.transporter().rating())
        .fold(0.0_f64, f64::max);

    for c in candidates.iter_mut() {
        let gap = max_rating - c.transporter().rating();
        let risk = (100.0 - c.arrival_freshness() - RISK_PER_RATING_POINT * gap).clamp(0.0, 100.0);
        c.set_risk(risk);
    }
}

/// Normalizes cost, time, and freshness loss to [0, 1] over the pool and
/// combines them into each candidate's weighted score.
///
/// Min-max scaling; when every candidate ties on a criterion, that
/// criterion contributes 0 for all of them.
pub fn score_candidates(candidates: &mut [RouteCandidate], weights: Weights) {
    let costs: Vec<f64> = candidates.iter().map(|c| c.transport_cost()).collect();
    let times: Vec<f64> = candidates.iter().map(|c| c.transit_hours()).collect();
    let losses: Vec<f64> = candidates
        .iter()
        .map(|c| 100.0 - c.arrival_freshness())
        .collect();

    for (i, c) in candidates.iter_mut().enumerate() {
        let score = weights.cost * min_max(&costs, costs[i])
            + weights.time * min_max(&times, times[i])
            + weights.quality * min_max(&losses, losses[i]);
        c.set_combined_score(score);
    }
}

/// Min-max scales one value over the pool's spread; 0 when all values tie.
fn min_max(values: &[f64], value: f64) -> f64 {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;
    if spread <= f64::EPSILON * max.abs().max(1.0) {
        0.0
    } else {
        (value - min) / spread
    }
}

/// Total ordering for scored candidates: combined score ascending, then
/// arrival freshness descending, then transporter identifier ascending.
pub fn compare_candidates(a: &RouteCandidate, b: &RouteCandidate) -> Ordering {
    a.combined_score()
        .partial_cmp(&b.combined_score())
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.arrival_freshness()
                .partial_cmp(&a.arrival_freshness())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.transporter().id().cmp(&b.transporter().id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Role};

    fn request() -> ShipmentRequest {
        ShipmentRequest::new(
            (Role::Harvester, 1),
            (Role::Retailer, 1),
            500,
            72.0,
            Priority::Cost,
        )
    }

    fn two_transporters() -> (Transporter, Transporter) {
        let a = Transporter::new(1, "A", "Truck", 600)
            .with_cold_chain(true)
            .with_rates(0.0, 2.0)
            .with_speed(40.0)
            .with_rating(4.5);
        let b = Transporter::new(2, "B", "Truck", 600)
            .with_cold_chain(true)
            .with_rates(0.0, 1.0)
            .with_speed(30.0)
            .with_rating(4.5);
        (a, b)
    }

    #[test]
    fn test_metrics_computed() {
        let (a, b) = two_transporters();
        let candidates = evaluate_candidates(&[&a, &b], &request(), 120.0).unwrap();

        assert!((candidates[0].transport_cost() - 240.0).abs() < 1e-10);
        assert!((candidates[0].transit_hours() - 3.0).abs() < 1e-10);
        assert!((candidates[1].transport_cost() - 120.0).abs() < 1e-10);
        assert!((candidates[1].transit_hours() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_base_rate_included() {
        let t = Transporter::new(1, "A", "Truck", 600)
            .with_rates(50.0, 2.0)
            .with_speed(40.0);
        let candidates = evaluate_candidates(&[&t], &request(), 100.0).unwrap();
        assert!((candidates[0].transport_cost() - 250.0).abs() < 1e-10);
    }

    #[test]
    fn test_freshness_forecast_zero_breach() {
        let (a, _) = two_transporters();
        let candidates = evaluate_candidates(&[&a], &request(), 120.0).unwrap();
        // 3h of a 72h shelf life: 100 * (1 - 3/72)
        let expected = 100.0 * (1.0 - 3.0 / 72.0);
        assert!((candidates[0].arrival_freshness() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_risk_top_rated_is_freshness_complement() {
        let (a, b) = two_transporters();
        let candidates = evaluate_candidates(&[&a, &b], &request(), 120.0).unwrap();
        // Equal ratings: both have zero gap.
        for c in &candidates {
            assert!((c.risk() - (100.0 - c.arrival_freshness())).abs() < 1e-10);
        }
    }

    #[test]
    fn test_risk_in_range() {
        let low = Transporter::new(1, "Low", "Van", 600)
            .with_rates(0.0, 1.0)
            .with_speed(30.0)
            .with_rating(0.0);
        let high = Transporter::new(2, "High", "Truck", 600)
            .with_rates(0.0, 2.0)
            .with_speed(40.0)
            .with_rating(5.0);
        let candidates = evaluate_candidates(&[&low, &high], &request(), 120.0).unwrap();
        for c in &candidates {
            assert!((0.0..=100.0).contains(&c.risk()), "risk {}", c.risk());
        }
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        let t = Transporter::new(1, "Broken", "Truck", 600).with_speed(0.0);
        let err = evaluate_candidates(&[&t], &request(), 120.0).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_score_normalization() {
        let (a, b) = two_transporters();
        let mut candidates = evaluate_candidates(&[&a, &b], &request(), 120.0).unwrap();
        score_candidates(&mut candidates, Priority::Cost.weights());

        // A: worst cost (norm 1), best time (norm 0), best freshness (norm 0).
        // B: best cost (norm 0), worst time (norm 1), worst freshness (norm 1).
        assert!((candidates[0].combined_score() - 0.7).abs() < 1e-10);
        assert!((candidates[1].combined_score() - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_all_tie_criterion_contributes_zero() {
        let a = Transporter::new(1, "A", "Truck", 600)
            .with_rates(0.0, 2.0)
            .with_speed(40.0);
        let b = Transporter::new(2, "B", "Truck", 600)
            .with_rates(0.0, 2.0)
            .with_speed(40.0);
        let mut candidates = evaluate_candidates(&[&a, &b], &request(), 120.0).unwrap();
        score_candidates(&mut candidates, Priority::Balanced.weights());
        assert_eq!(candidates[0].combined_score(), 0.0);
        assert_eq!(candidates[1].combined_score(), 0.0);
    }

    #[test]
    fn test_compare_score_then_freshness_then_id() {
        let (a, b) = two_transporters();
        let mut c1 = evaluate_candidates(&[&a], &request(), 120.0).unwrap().remove(0);
        let mut c2 = evaluate_candidates(&[&b], &request(), 120.0).unwrap().remove(0);

        c1.set_combined_score(0.5);
        c2.set_combined_score(0.4);
        assert_eq!(compare_candidates(&c1, &c2), Ordering::Greater);

        // Equal score: higher freshness first (A transits faster).
        c2.set_combined_score(0.5);
        assert_eq!(compare_candidates(&c1, &c2), Ordering::Less);
    }

    #[test]
    fn test_compare_id_breaks_full_tie() {
        let a = Transporter::new(1, "A", "Truck", 600)
            .with_rates(0.0, 2.0)
            .with_speed(40.0);
        let b = Transporter::new(2, "B", "Truck", 600)
            .with_rates(0.0, 2.0)
            .with_speed(40.0);
        let candidates = evaluate_candidates(&[&b, &a], &request(), 120.0).unwrap();
        assert_eq!(compare_candidates(&candidates[0], &candidates[1]), Ordering::Greater);
    }
}
