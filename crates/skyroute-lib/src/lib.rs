//! skyroute library entry points.
//!
//! This crate parses city/flight networks from the line-oriented import
//! format, builds graph representations, and finds the best connecting route
//! between two cities by cost, time, distance or a weighted blend. Higher-level
//! consumers (the CLI, UI front ends) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod import;
pub mod model;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{build_graph, Edge, EdgeKind, Graph};
pub use import::{load_flight_data, parse_flight_data, try_parse_flight_data, ParsedData};
pub use model::{City, CustomWeights, Flight, OptimizationPriority, RouteResult};
pub use network::{FlightNetwork, NewFlight};
pub use output::{format_duration, RouteLeg, RouteRenderMode, RouteSummary};
pub use path::{find_optimal_route, find_route_in_graph};
pub use routing::{plan_route, PathTotals, RoutePriority, RouteRequest};
