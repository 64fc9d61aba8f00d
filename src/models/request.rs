//! Shipment request and priority profile types.

use crate::error::EngineError;
use crate::models::NodeKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Objective weights applied by the optimizer, one per criterion.
///
/// Weights always sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Weight on normalized monetary cost.
    pub cost: f64,
    /// Weight on normalized transit time.
    pub time: f64,
    /// Weight on normalized freshness loss.
    pub quality: f64,
}

/// A named weighting scheme controlling the optimizer's trade-off.
///
/// # Examples
///
/// ```
/// use flora_route::models::Priority;
///
/// let p: Priority = "cost".parse().unwrap();
/// assert_eq!(p, Priority::Cost);
/// assert!((p.weights().cost - 0.7).abs() < 1e-10);
/// assert!("express".parse::<Priority>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Equal weight on cost, time, and quality.
    Balanced,
    /// Minimize monetary cost first.
    Cost,
    /// Minimize transit time first.
    Time,
    /// Maximize arrival freshness first.
    Quality,
}

impl Priority {
    /// Objective weights for this profile, as (cost, time, quality).
    pub fn weights(&self) -> Weights {
        match self {
            Priority::Balanced => Weights {
                cost: 1.0 / 3.0,
                time: 1.0 / 3.0,
                quality: 1.0 / 3.0,
            },
            Priority::Cost => Weights {
                cost: 0.7,
                time: 0.15,
                quality: 0.15,
            },
            Priority::Time => Weights {
                cost: 0.15,
                time: 0.7,
                quality: 0.15,
            },
            Priority::Quality => Weights {
                cost: 0.15,
                time: 0.15,
                quality: 0.7,
            },
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Balanced => "balanced",
            Priority::Cost => "cost",
            Priority::Time => "time",
            Priority::Quality => "quality",
        };
        f.write_str(s)
    }
}

impl FromStr for Priority {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balanced" => Ok(Priority::Balanced),
            "cost" => Ok(Priority::Cost),
            "time" => Ok(Priority::Time),
            "quality" => Ok(Priority::Quality),
            other => Err(EngineError::InvalidPriority(other.to_string())),
        }
    }
}

/// A request to route one batch from a source node to a destination node.
///
/// Created fresh per optimization call and never mutated. Numeric fields
/// are validated with [`validate`](ShipmentRequest::validate) before any
/// candidate is evaluated.
///
/// # Examples
///
/// ```
/// use flora_route::models::{Priority, Role, ShipmentRequest};
///
/// let req = ShipmentRequest::new(
///     (Role::Harvester, 1),
///     (Role::Retailer, 1),
///     500,
///     72.0,
///     Priority::Balanced,
/// );
/// assert!(req.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireRequest", into = "WireRequest")]
pub struct ShipmentRequest {
    source: NodeKey,
    destination: NodeKey,
    quantity: u32,
    shelf_life_hours: f64,
    priority: Priority,
    require_cold_chain: bool,
}

/// Flat wire representation used by UI/CLI collaborators.
#[derive(Serialize, Deserialize)]
struct WireRequest {
    source_type: crate::models::Role,
    source_id: u32,
    destination_type: crate::models::Role,
    destination_id: u32,
    quantity: u32,
    freshness_life_hours: f64,
    priority: Priority,
    #[serde(default)]
    require_cold_chain: bool,
}

impl From<WireRequest> for ShipmentRequest {
    fn from(w: WireRequest) -> Self {
        Self {
            source: (w.source_type, w.source_id),
            destination: (w.destination_type, w.destination_id),
            quantity: w.quantity,
            shelf_life_hours: w.freshness_life_hours,
            priority: w.priority,
            require_cold_chain: w.require_cold_chain,
        }
    }
}

impl From<ShipmentRequest> for WireRequest {
    fn from(r: ShipmentRequest) -> Self {
        Self {
            source_type: r.source.0,
            source_id: r.source.1,
            destination_type: r.destination.0,
            destination_id: r.destination.1,
            quantity: r.quantity,
            freshness_life_hours: r.shelf_life_hours,
            priority: r.priority,
            require_cold_chain: r.require_cold_chain,
        }
    }
}

impl ShipmentRequest {
    /// Creates a request with the given route endpoints, quantity in units,
    /// declared shelf life in hours, and priority profile.
    ///
    /// Default: cold chain not required.
    pub fn new(
        source: NodeKey,
        destination: NodeKey,
        quantity: u32,
        shelf_life_hours: f64,
        priority: Priority,
    ) -> Self {
        Self {
            source,
            destination,
            quantity,
            shelf_life_hours,
            priority,
            require_cold_chain: false,
        }
    }

    /// Requires the selected transporter to provide a cold chain.
    pub fn with_cold_chain_required(mut self, required: bool) -> Self {
        self.require_cold_chain = required;
        self
    }

    /// Source node key.
    pub fn source(&self) -> NodeKey {
        self.source
    }

    /// Destination node key.
    pub fn destination(&self) -> NodeKey {
        self.destination
    }

    /// Batch size in units.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Declared shelf life in hours.
    pub fn shelf_life_hours(&self) -> f64 {
        self.shelf_life_hours
    }

    /// Selected priority profile.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Whether a cold chain is required.
    pub fn require_cold_chain(&self) -> bool {
        self.require_cold_chain
    }

    /// Rejects requests the engine must not evaluate: zero quantity or a
    /// non-positive (or non-finite) shelf life.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.quantity == 0 {
            return Err(EngineError::Configuration(
                "quantity must be positive".to_string(),
            ));
        }
        if !self.shelf_life_hours.is_finite() || self.shelf_life_hours <= 0.0 {
            return Err(EngineError::Configuration(format!(
                "shelf life must be positive, got {}",
                self.shelf_life_hours
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_priority_parse() {
        assert_eq!("balanced".parse::<Priority>().unwrap(), Priority::Balanced);
        assert_eq!("cost".parse::<Priority>().unwrap(), Priority::Cost);
        assert_eq!("time".parse::<Priority>().unwrap(), Priority::Time);
        assert_eq!("quality".parse::<Priority>().unwrap(), Priority::Quality);
    }

    #[test]
    fn test_priority_parse_unknown() {
        let err = "freshness".parse::<Priority>().unwrap_err();
        assert_eq!(err, EngineError::InvalidPriority("freshness".to_string()));
    }

    #[test]
    fn test_weights_sum_to_one() {
        for p in [
            Priority::Balanced,
            Priority::Cost,
            Priority::Time,
            Priority::Quality,
        ] {
            let w = p.weights();
            assert!((w.cost + w.time + w.quality - 1.0).abs() < 1e-10, "{p}");
        }
    }

    #[test]
    fn test_dominant_weight_matches_profile() {
        assert!((Priority::Cost.weights().cost - 0.7).abs() < 1e-10);
        assert!((Priority::Time.weights().time - 0.7).abs() < 1e-10);
        assert!((Priority::Quality.weights().quality - 0.7).abs() < 1e-10);
    }

    fn sample_request() -> ShipmentRequest {
        ShipmentRequest::new(
            (Role::Harvester, 1),
            (Role::Retailer, 1),
            500,
            72.0,
            Priority::Balanced,
        )
    }

    #[test]
    fn test_request_valid() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_request_zero_quantity() {
        let req = ShipmentRequest::new(
            (Role::Harvester, 1),
            (Role::Retailer, 1),
            0,
            72.0,
            Priority::Balanced,
        );
        assert!(matches!(
            req.validate(),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn test_request_bad_shelf_life() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let req = ShipmentRequest::new(
                (Role::Harvester, 1),
                (Role::Retailer, 1),
                100,
                bad,
                Priority::Balanced,
            );
            assert!(req.validate().is_err(), "shelf life {bad} should fail");
        }
    }

    #[test]
    fn test_wire_deserialization() {
        let json = r#"{
            "source_type": "harvester",
            "source_id": 1,
            "destination_type": "retailer",
            "destination_id": 1,
            "quantity": 500,
            "freshness_life_hours": 72,
            "priority": "balanced",
            "require_cold_chain": true
        }"#;
        let req: ShipmentRequest = serde_json::from_str(json).expect("parses");
        assert_eq!(req.source(), (Role::Harvester, 1));
        assert_eq!(req.destination(), (Role::Retailer, 1));
        assert_eq!(req.quantity(), 500);
        assert_eq!(req.shelf_life_hours(), 72.0);
        assert_eq!(req.priority(), Priority::Balanced);
        assert!(req.require_cold_chain());
    }

    #[test]
    fn test_wire_round_trip() {
        let req = sample_request().with_cold_chain_required(true);
        let json = serde_json::to_string(&req).expect("serializes");
        assert!(json.contains("\"source_type\":\"harvester\""));
        assert!(json.contains("\"freshness_life_hours\":72.0"));
        let back: ShipmentRequest = serde_json::from_str(&json).expect("parses");
        assert_eq!(back, req);
    }

    #[test]
    fn test_wire_rejects_unknown_priority() {
        let json = r#"{
            "source_type": "harvester",
            "source_id": 1,
            "destination_type": "retailer",
            "destination_id": 1,
            "quantity": 500,
            "freshness_life_hours": 72,
            "priority": "express"
        }"#;
        assert!(serde_json::from_str::<ShipmentRequest>(json).is_err());
    }

    #[test]
    fn test_cold_chain_flag() {
        let req = sample_request().with_cold_chain_required(true);
        assert!(req.require_cold_chain());
        assert!(!sample_request().require_cold_chain());
    }
}
