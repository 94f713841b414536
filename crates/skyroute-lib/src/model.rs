//! Plain data records shared by the importer, graph builder and route engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Distance assumed per minute of flight time when a flight carries no
/// explicit distance.
pub const DEFAULT_KM_PER_MINUTE: f64 = 10.0;

/// Named node in the route graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
}

impl City {
    /// City whose identifier doubles as its name, as produced by the importer.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
        }
    }
}

/// Directed (or two-way) scheduled flight between two cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub src: String,
    pub dest: String,
    pub cost: u64,
    /// Flight time in minutes.
    pub duration: u64,
    /// Distance in kilometres; see [`Flight::distance_km`] for the fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub dep_time: String,
    pub arr_time: String,
    pub is_two_way: bool,
}

impl Flight {
    /// Distance in kilometres, defaulting to `duration * 10` when absent.
    pub fn distance_km(&self) -> f64 {
        self.distance
            .unwrap_or(self.duration as f64 * DEFAULT_KM_PER_MINUTE)
    }

    /// Return leg of a two-way flight: endpoints and schedule times swapped,
    /// everything else shared with the outbound record.
    pub fn reversed(&self) -> Self {
        Self {
            src: self.dest.clone(),
            dest: self.src.clone(),
            dep_time: self.arr_time.clone(),
            arr_time: self.dep_time.clone(),
            ..self.clone()
        }
    }
}

/// Metric the route engine minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationPriority {
    #[default]
    Cost,
    Time,
    Distance,
    Custom,
}

impl fmt::Display for OptimizationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OptimizationPriority::Cost => "cost",
            OptimizationPriority::Time => "time",
            OptimizationPriority::Distance => "distance",
            OptimizationPriority::Custom => "custom",
        };
        f.write_str(value)
    }
}

impl FromStr for OptimizationPriority {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cost" => Ok(OptimizationPriority::Cost),
            "time" | "duration" => Ok(OptimizationPriority::Time),
            "distance" => Ok(OptimizationPriority::Distance),
            "custom" => Ok(OptimizationPriority::Custom),
            other => Err(format!("unknown optimization priority '{other}'")),
        }
    }
}

/// Percentages blending normalised cost, time and distance.
///
/// Callers are expected to keep the three values summing to 100; the route
/// engine uses them as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomWeights {
    pub cost: f64,
    pub time: f64,
    pub distance: f64,
}

impl CustomWeights {
    pub fn new(cost: f64, time: f64, distance: f64) -> Self {
        Self {
            cost,
            time,
            distance,
        }
    }

    pub fn sum(&self) -> f64 {
        self.cost + self.time + self.distance
    }

    /// Check the weights add up to 100 percent.
    pub fn validate(&self) -> Result<()> {
        let sum = self.sum();
        if (sum - 100.0).abs() > 1e-6 {
            return Err(Error::InvalidWeights { sum });
        }
        Ok(())
    }
}

impl Default for CustomWeights {
    fn default() -> Self {
        Self::new(34.0, 33.0, 33.0)
    }
}

/// Outcome of a successful route query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub total_cost: u64,
    /// Sum of flight durations in minutes.
    pub total_duration: u64,
    pub path: Vec<Flight>,
}

impl RouteResult {
    /// Number of flights taken.
    pub fn hop_count(&self) -> usize {
        self.path.len()
    }

    /// Sum of [`Flight::distance_km`] along the path.
    pub fn total_distance_km(&self) -> f64 {
        self.path.iter().map(Flight::distance_km).sum()
    }
}
