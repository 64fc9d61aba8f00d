//! # flora-route
//!
//! Decision engine for routing perishable batches (cut flowers) from a
//! source node to a destination node: picks among candidate transporters
//! to jointly minimize monetary cost and transit time while maximizing
//! expected arrival freshness, subject to hard cold-chain and capacity
//! constraints.
//!
//! The engine is a pure synchronous computation over registry snapshots:
//! no I/O, no shared mutable state, fully deterministic. Identity,
//! escrow, persistence, and presentation are collaborator concerns.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Node, Transporter, ShipmentRequest, Priority, OptimizationResult)
//! - [`freshness`] — Linear freshness decay model with breach penalties
//! - [`distance`] — Great-circle estimation with link-table fallback
//! - [`registry`] — Read-only catalog snapshots (live or fixture)
//! - [`engine`] — Candidate filter, multi-criteria optimizer, result assembler
//! - [`simulation`] — Seeded optimizer-vs-naive policy comparison
//!
//! ## Example
//!
//! ```
//! use flora_route::engine::RouteOptimizer;
//! use flora_route::models::{Priority, Role, ShipmentRequest};
//! use flora_route::registry::FixtureRegistry;
//!
//! let registry = FixtureRegistry::new();
//! let request = ShipmentRequest::new(
//!     (Role::Harvester, 1),
//!     (Role::Retailer, 1),
//!     500,
//!     72.0,
//!     Priority::Cost,
//! );
//! let result = RouteOptimizer::new(&registry).optimize(&request).unwrap();
//! assert!(result.success);
//! ```

pub mod distance;
pub mod engine;
pub mod error;
pub mod freshness;
pub mod models;
pub mod registry;
pub mod simulation;

pub use error::EngineError;
