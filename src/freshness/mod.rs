//! Freshness decay model.
//!
//! A pure function mapping elapsed time, declared shelf life, and a
//! temperature-breach history to a freshness score in [0, 100]. Baseline
//! decay is linear over the shelf life; each breach-hour subtracts a fixed
//! additional penalty. Deterministic by construction so audits can replay
//! any decision.

use crate::error::EngineError;

/// Freshness points lost per hour spent outside the accepted
/// temperature band, on top of baseline decay.
pub const BREACH_PENALTY_PER_HOUR: f64 = 5.0;

/// Computes the freshness score in [0, 100] for a batch.
///
/// Baseline decay runs linearly from 100 at `elapsed_hours = 0` to 0 at
/// `elapsed_hours = shelf_life_hours` and clamps at 0 beyond the shelf
/// life. Breach-hours subtract [`BREACH_PENALTY_PER_HOUR`] each, with the
/// total clamped so the score never goes negative. Negative elapsed time
/// and negative breach history are treated as zero.
///
/// Returns [`EngineError::Configuration`] if `shelf_life_hours` is not a
/// positive finite number.
///
/// # Examples
///
/// ```
/// use flora_route::freshness::freshness_score;
///
/// assert_eq!(freshness_score(0.0, 72.0, 0.0).unwrap(), 100.0);
/// assert_eq!(freshness_score(36.0, 72.0, 0.0).unwrap(), 50.0);
/// assert_eq!(freshness_score(80.0, 72.0, 0.0).unwrap(), 0.0);
/// assert!(freshness_score(10.0, 0.0, 0.0).is_err());
/// ```
pub fn freshness_score(
    elapsed_hours: f64,
    shelf_life_hours: f64,
    breach_hours: f64,
) -> Result<f64, EngineError> {
    if !shelf_life_hours.is_finite() || shelf_life_hours <= 0.0 {
        return Err(EngineError::Configuration(format!(
            "shelf life must be positive, got {shelf_life_hours}"
        )));
    }

    let elapsed = elapsed_hours.max(0.0);
    let baseline = if elapsed >= shelf_life_hours {
        0.0
    } else {
        100.0 * (1.0 - elapsed / shelf_life_hours)
    };

    let penalty = BREACH_PENALTY_PER_HOUR * breach_hours.max(0.0);
    Ok((baseline - penalty).clamp(0.0, 100.0))
}
