//! Packages scored candidates into an immutable result.

use crate::engine::optimizer::compare_candidates;
use crate::models::{
    Comparison, ComparisonRow, CostBreakdown, OptimizationResult, QualityMetrics, RouteCandidate,
    RouteSummary, SelectedTransporter, ShipmentRequest, TimeBreakdown, STATUS_OPTIMAL,
};

/// Currency code reported in cost breakdowns.
pub const CURRENCY: &str = "INR";

/// Assembles the final result from the scored candidate pool.
///
/// The comparison table lists every candidate sorted by combined score
/// ascending (ties resolved as in the optimizer) with exactly the winner
/// marked selected; the breakdown sections are filled from the winner.
pub fn assemble(
    selected: &RouteCandidate,
    candidates: &[RouteCandidate],
    request: &ShipmentRequest,
    distance_km: f64,
) -> OptimizationResult {
    let mut ranked: Vec<&RouteCandidate> = candidates.iter().collect();
    ranked.sort_by(|a, b| compare_candidates(a, b));

    let all_options = ranked
        .iter()
        .map(|c| ComparisonRow {
            transporter_id: c.transporter().id(),
            name: c.transporter().name().to_string(),
            cost: c.transport_cost(),
            time_hours: c.transit_hours(),
            freshness: c.arrival_freshness(),
            risk: c.risk(),
            selected: c.transporter().id() == selected.transporter().id(),
        })
        .collect();

    let t = selected.transporter();
    OptimizationResult {
        success: true,
        status: STATUS_OPTIMAL.to_string(),
        route: Some(RouteSummary {
            source: request.source().into(),
            destination: request.destination().into(),
            distance_km,
        }),
        selected_transporter: Some(SelectedTransporter {
            id: t.id(),
            name: t.name().to_string(),
            vehicle: t.vehicle().to_string(),
            cold_chain: t.cold_chain(),
            capacity: t.capacity(),
        }),
        cost_breakdown: Some(CostBreakdown {
            transport_cost: selected.transport_cost(),
            cost_per_km: t.rate_per_km(),
            currency: CURRENCY.to_string(),
        }),
        time_breakdown: Some(TimeBreakdown {
            transit_time_hours: selected.transit_hours(),
            estimated_speed_kmph: t.speed_kmph(),
        }),
        quality_metrics: Some(QualityMetrics {
            transporter_quality: t.rating(),
            expected_freshness_on_arrival: selected.arrival_freshness(),
            risk_level: selected.risk(),
        }),
        comparison: Comparison { all_options },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Role, Transporter};

    fn candidate(id: u32, cost: f64, score: f64) -> RouteCandidate {
        let t = Transporter::new(id, format!("T{id}"), "Truck", 600)
            .with_rates(0.0, cost / 120.0)
            .with_speed(40.0)
            .with_rating(4.0);
        let mut c = RouteCandidate::new(t, 120.0, 3.0, cost, 95.0);
        c.set_combined_score(score);
        c.set_risk(5.0);
        c
    }

    fn request() -> ShipmentRequest {
        ShipmentRequest::new(
            (Role::Harvester, 1),
            (Role::Retailer, 2),
            500,
            72.0,
            Priority::Balanced,
        )
    }

    #[test]
    fn test_assemble_marks_exactly_one_selected() {
        let candidates = vec![
            candidate(1, 240.0, 0.7),
            candidate(2, 120.0, 0.3),
            candidate(3, 180.0, 0.5),
        ];
        let result = assemble(&candidates[1], &candidates, &request(), 120.0);
        assert!(result.success);
        assert_eq!(result.status, STATUS_OPTIMAL);
        assert_eq!(result.num_selected(), 1);
        assert!(result.comparison.all_options[0].selected);
    }

    #[test]
    fn test_comparison_sorted_by_score() {
        let candidates = vec![
            candidate(1, 240.0, 0.7),
            candidate(2, 120.0, 0.3),
            candidate(3, 180.0, 0.5),
        ];
        let result = assemble(&candidates[1], &candidates, &request(), 120.0);
        let ids: Vec<u32> = result
            .comparison
            .all_options
            .iter()
            .map(|r| r.transporter_id)
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_breakdowns_from_winner() {
        let candidates = vec![candidate(1, 240.0, 0.0)];
        let result = assemble(&candidates[0], &candidates, &request(), 120.0);

        let route = result.route.expect("route");
        assert_eq!(route.source.role, Role::Harvester);
        assert_eq!(route.destination.id, 2);
        assert_eq!(route.distance_km, 120.0);

        let cost = result.cost_breakdown.expect("cost");
        assert_eq!(cost.transport_cost, 240.0);
        assert_eq!(cost.currency, CURRENCY);

        let time = result.time_breakdown.expect("time");
        assert_eq!(time.transit_time_hours, 3.0);
        assert_eq!(time.estimated_speed_kmph, 40.0);

        let quality = result.quality_metrics.expect("quality");
        assert_eq!(quality.expected_freshness_on_arrival, 95.0);
        assert_eq!(quality.risk_level, 5.0);
        assert_eq!(quality.transporter_quality, 4.0);
    }
}
