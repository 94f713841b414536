//! Route planning for flight networks.
//!
//! This module provides:
//! - [`RoutePriority`] - Edge-cost strategies (cost, time, distance, custom blend)
//! - [`RouteRequest`] - High-level route planning request
//! - [`plan_route`] - Entry point that reports unknown cities and missing routes as errors
//!
//! The lower-level [`crate::path::find_optimal_route`] collapses both failure
//! cases into `None`; use [`plan_route`] when the caller needs to tell them
//! apart.
//!
//! # Example
//!
//! ```
//! use skyroute_lib::{parse_flight_data, plan_route, FlightNetwork, RouteRequest};
//!
//! let parsed = parse_flight_data(
//!     "2\nDelhi\nMumbai\n1\nAirIndia AI101 Delhi Mumbai 5000 120 08:00 10:00 Y\n",
//! );
//! let network = FlightNetwork::from_parsed(parsed);
//! let result = plan_route(&network, &RouteRequest::new("Mumbai", "Delhi")).unwrap();
//! assert_eq!(result.total_cost, 5000);
//! ```

mod priority;

pub use priority::{PathTotals, RoutePriority, COST_SCALE, DISTANCE_SCALE, TIME_SCALE};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::build_graph;
use crate::model::{CustomWeights, OptimizationPriority, RouteResult};
use crate::network::FlightNetwork;
use crate::path::find_route_in_graph;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub priority: OptimizationPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<CustomWeights>,
}

impl RouteRequest {
    /// Cheapest-route request between two cities.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            priority: OptimizationPriority::Cost,
            weights: None,
        }
    }

    pub fn with_priority(mut self, priority: OptimizationPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Switch to the custom blend with the given weights.
    pub fn with_weights(mut self, weights: CustomWeights) -> Self {
        self.priority = OptimizationPriority::Custom;
        self.weights = Some(weights);
        self
    }

    /// Cost model used by the search.
    pub fn route_priority(&self) -> RoutePriority {
        RoutePriority::from_parts(self.priority, self.weights)
    }
}

/// Resolve a city name, returning an error with suggestions when unknown.
fn resolve_city(network: &FlightNetwork, name: &str) -> Result<()> {
    if network.contains_city(name) {
        return Ok(());
    }
    Err(network.unknown_city(name))
}

/// Compute the best route for `request` over the network's current snapshot.
///
/// Weights are used as given; callers wanting the 100 percent check should
/// call [`CustomWeights::validate`] first.
pub fn plan_route(network: &FlightNetwork, request: &RouteRequest) -> Result<RouteResult> {
    resolve_city(network, &request.source)?;
    resolve_city(network, &request.destination)?;

    let graph = build_graph(&network.city_names(), network.flights());
    find_route_in_graph(
        &graph,
        &request.source,
        &request.destination,
        request.route_priority(),
    )
    .ok_or_else(|| Error::RouteNotFound {
        start: request.source.clone(),
        goal: request.destination.clone(),
    })
}
