//! Transporter type with capacity, cost, and quality parameters.

use serde::{Deserialize, Serialize};

/// A transporter that can carry a batch between two nodes.
///
/// Transporters are immutable within an optimization call; only the
/// external registry mutates them between calls.
///
/// # Examples
///
/// ```
/// use flora_route::models::Transporter;
///
/// let t = Transporter::new(1, "ColdChain Express", "Refrigerated Truck", 2000)
///     .with_cold_chain(true)
///     .with_rates(0.0, 15.0)
///     .with_speed(50.0)
///     .with_rating(4.75);
/// assert_eq!(t.id(), 1);
/// assert_eq!(t.capacity(), 2000);
/// assert!(t.cold_chain());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transporter {
    id: u32,
    name: String,
    vehicle: String,
    capacity: u32,
    cold_chain: bool,
    base_rate: f64,
    rate_per_km: f64,
    speed_kmph: f64,
    rating: f64,
}

impl Transporter {
    /// Creates a transporter with the given identity, vehicle class, and
    /// rated capacity in units.
    ///
    /// Default: no cold chain, zero base rate, 1.0 per km, 50 km/h,
    /// rating 3.0.
    pub fn new(id: u32, name: impl Into<String>, vehicle: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            vehicle: vehicle.into(),
            capacity,
            cold_chain: false,
            base_rate: 0.0,
            rate_per_km: 1.0,
            speed_kmph: 50.0,
            rating: 3.0,
        }
    }

    /// Sets cold-chain (continuous refrigeration) capability.
    pub fn with_cold_chain(mut self, cold_chain: bool) -> Self {
        self.cold_chain = cold_chain;
        self
    }

    /// Sets the service cost parameters: flat base rate plus per-km rate.
    pub fn with_rates(mut self, base_rate: f64, rate_per_km: f64) -> Self {
        self.base_rate = base_rate;
        self.rate_per_km = rate_per_km;
        self
    }

    /// Sets the nominal average speed in km/h.
    pub fn with_speed(mut self, speed_kmph: f64) -> Self {
        self.speed_kmph = speed_kmph;
        self
    }

    /// Sets the quality rating, clamped to [0, 5].
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self
    }

    /// Transporter identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vehicle class label ("Refrigerated Truck", "Van", ...).
    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    /// Rated capacity in units.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Whether this transporter provides a cold chain.
    pub fn cold_chain(&self) -> bool {
        self.cold_chain
    }

    /// Flat cost charged regardless of distance.
    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    /// Cost per kilometer traveled.
    pub fn rate_per_km(&self) -> f64 {
        self.rate_per_km
    }

    /// Nominal average speed in km/h.
    pub fn speed_kmph(&self) -> f64 {
        self.speed_kmph
    }

    /// Quality rating in [0, 5].
    pub fn rating(&self) -> f64 {
        self.rating
    }
}
