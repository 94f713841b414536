//! Edge-cost strategies used by the route engine.
//!
//! Each [`RoutePriority`] variant turns a single flight into a scalar edge
//! weight and a set of accumulated totals into a path weight. The search in
//! [`crate::path`] only ever talks to these two functions.

use serde::Serialize;

use crate::model::{CustomWeights, Flight, OptimizationPriority};

/// Scale constants bringing cost, minutes and kilometres into a comparable
/// range for the custom blend. Values above them simply weigh more.
pub const COST_SCALE: f64 = 1000.0;
pub const TIME_SCALE: f64 = 500.0;
pub const DISTANCE_SCALE: f64 = 5000.0;

/// Quantities accumulated along a partial path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PathTotals {
    pub cost: u64,
    pub duration: u64,
    pub distance: f64,
}

impl PathTotals {
    /// Totals after taking one more flight. Cost and duration saturate at
    /// `u64::MAX`.
    pub fn extend(&self, flight: &Flight) -> Self {
        Self {
            cost: self.cost.saturating_add(flight.cost),
            duration: self.duration.saturating_add(flight.duration),
            distance: self.distance + flight.distance_km(),
        }
    }
}

/// Active cost model for a route query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RoutePriority {
    #[default]
    Cost,
    Time,
    Distance,
    Custom(CustomWeights),
}

impl RoutePriority {
    /// Combine a priority selector with optional weights.
    ///
    /// Weights are only meaningful for [`OptimizationPriority::Custom`]; a
    /// custom priority without weights uses [`CustomWeights::default`].
    pub fn from_parts(priority: OptimizationPriority, weights: Option<CustomWeights>) -> Self {
        match priority {
            OptimizationPriority::Cost => RoutePriority::Cost,
            OptimizationPriority::Time => RoutePriority::Time,
            OptimizationPriority::Distance => RoutePriority::Distance,
            OptimizationPriority::Custom => RoutePriority::Custom(weights.unwrap_or_default()),
        }
    }

    /// Weight of a single flight under this priority.
    pub fn edge_weight(&self, flight: &Flight) -> f64 {
        self.weigh(flight.cost, flight.duration, flight.distance_km())
    }

    /// Weight of a partial path under this priority, computed from its
    /// accumulated totals.
    pub fn path_weight(&self, totals: &PathTotals) -> f64 {
        self.weigh(totals.cost, totals.duration, totals.distance)
    }

    fn weigh(&self, cost: u64, duration: u64, distance: f64) -> f64 {
        match self {
            RoutePriority::Cost => cost as f64,
            RoutePriority::Time => duration as f64,
            RoutePriority::Distance => distance,
            RoutePriority::Custom(weights) => {
                cost as f64 / COST_SCALE * (weights.cost / 100.0)
                    + duration as f64 / TIME_SCALE * (weights.time / 100.0)
                    + distance / DISTANCE_SCALE * (weights.distance / 100.0)
            }
        }
    }
}

impl From<OptimizationPriority> for RoutePriority {
    fn from(priority: OptimizationPriority) -> Self {
        RoutePriority::from_parts(priority, None)
    }
}
