//! Error taxonomy for the route decision engine.
//!
//! Structural input errors are returned as `Err` and are the caller's
//! responsibility to present. Business infeasibility (no transporter
//! satisfies the hard constraints) is NOT an error: it is returned as a
//! failed [`OptimizationResult`](crate::models::OptimizationResult) so
//! automated planners can react programmatically.

use crate::models::Role;
use thiserror::Error;

/// Errors raised by the route decision engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Invalid request parameter (non-positive quantity or shelf life).
    ///
    /// Rejected before any candidate is evaluated.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Unrecognized priority profile name.
    #[error("invalid priority: {0:?} (expected one of balanced, cost, time, quality)")]
    InvalidPriority(String),

    /// A node cannot be geolocated: it has no coordinates and no
    /// link-table entry covers it.
    #[error("location unresolved for {role} #{id}")]
    LocationUnresolved {
        /// Role category of the unresolved node.
        role: Role,
        /// Node identifier within that role.
        id: u32,
    },
}
