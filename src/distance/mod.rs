//! Distance resolution between supply chain nodes.
//!
//! Provides great-circle estimation from node coordinates with a fixed
//! link-table fallback for nodes registered without coordinates.

mod estimator;
mod link_table;

pub use estimator::DistanceEstimator;
pub use link_table::LinkTable;
