//! Hard-constraint candidate filter.

use crate::models::{ShipmentRequest, Transporter};

/// Narrows the transporter catalog to those satisfying the request's hard
/// constraints: sufficient rated capacity and, when required, cold-chain
/// capability.
///
/// Preserves catalog order. An empty result is a normal outcome that the
/// pipeline reports as `NO_FEASIBLE_TRANSPORTER`, never an error.
///
/// # Examples
///
/// ```
/// use flora_route::engine::filter_candidates;
/// use flora_route::models::{Priority, Role, ShipmentRequest, Transporter};
///
/// let fleet = vec![
///     Transporter::new(1, "Big Reefer", "Truck", 2000).with_cold_chain(true),
///     Transporter::new(2, "Small Van", "Van", 300),
/// ];
/// let req = ShipmentRequest::new(
///     (Role::Harvester, 1),
///     (Role::Retailer, 1),
///     500,
///     72.0,
///     Priority::Balanced,
/// );
/// let pool = filter_candidates(&fleet, &req);
/// assert_eq!(pool.len(), 1);
/// assert_eq!(pool[0].id(), 1);
/// ```
pub fn filter_candidates<'a>(
    transporters: &'a [Transporter],
    request: &ShipmentRequest,
) -> Vec<&'a Transporter> {
    transporters
        .iter()
        .filter(|t| t.capacity() >= request.quantity())
        .filter(|t| !request.require_cold_chain() || t.cold_chain())
        .collect()
}
