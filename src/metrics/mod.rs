//! Derived statistics over loaded logs. Read-only: nothing here touches a file.

pub mod cost;
pub mod economy;
pub mod trips;

pub use cost::{cost_mismatches, monthly_cost, total_cost, total_volume};
pub use economy::{average_economy, best_economy};
pub use trips::{cost_per_distance, real_world_economy, trip_distances, valid_distance};

use crate::models::{ConsumptionRow, RefillRow};
use serde::Serialize;

/// Every figure shown by `stats`, computed in one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FuelReport {
    pub readings: usize,
    pub refills: usize,
    pub average_economy: Option<f64>,
    pub best_economy: Option<(f64, String)>,
    pub real_world_economy: Option<f64>,
    pub trip_distances: Vec<f64>,
    pub negative_trips: usize,
    pub total_cost: f64,
    pub total_volume: f64,
    pub cost_per_distance: Option<f64>,
    pub monthly_cost: Vec<(String, f64)>,
    pub cost_mismatches: Vec<(usize, f64)>,
}

impl FuelReport {
    pub fn build(consumption: &[ConsumptionRow], refills: &[RefillRow]) -> Self {
        let trips = trip_distances(refills);
        Self {
            readings: consumption.len(),
            refills: refills.len(),
            average_economy: average_economy(consumption),
            best_economy: best_economy(consumption),
            real_world_economy: real_world_economy(refills),
            negative_trips: trips.iter().filter(|d| **d < 0.0).count(),
            trip_distances: trips,
            total_cost: total_cost(refills),
            total_volume: total_volume(refills),
            cost_per_distance: cost_per_distance(refills),
            monthly_cost: monthly_cost(refills),
            cost_mismatches: cost_mismatches(refills),
        }
    }
}
