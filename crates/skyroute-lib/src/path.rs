use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::graph::{build_graph, CityIndex, EdgeId, Graph};
use crate::model::{Flight, RouteResult};
use crate::routing::{PathTotals, RoutePriority};

/// Build a graph from the snapshot and find the best route between two
/// cities under `priority`.
///
/// Returns `None` when either endpoint is not in `city_names` or when no
/// sequence of flights connects them.
pub fn find_optimal_route<S: AsRef<str>>(
    city_names: &[S],
    flights: &[Flight],
    source: &str,
    destination: &str,
    priority: RoutePriority,
) -> Option<RouteResult> {
    let graph = build_graph(city_names, flights);
    find_route_in_graph(&graph, source, destination, priority)
}

/// Run Dijkstra's algorithm over an already built graph.
///
/// Partial paths are ordered by the path weight of their accumulated totals;
/// equal weights fall back to the city name and then to insertion order.
/// The returned totals are the true summed cost and duration of the chosen
/// flights regardless of the active priority.
pub fn find_route_in_graph(
    graph: &Graph,
    source: &str,
    destination: &str,
    priority: RoutePriority,
) -> Option<RouteResult> {
    let start = graph.index_of(source)?;
    let goal = graph.index_of(destination)?;

    let city_count = graph.city_count();
    let mut best = vec![f64::INFINITY; city_count];
    let mut finalized = vec![false; city_count];
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;

    best[start] = 0.0;
    frontier.push(QueueEntry {
        weight: FloatOrd(0.0),
        name: source,
        sequence,
        path: PartialPath {
            city: start,
            totals: PathTotals::default(),
            edges: Vec::new(),
        },
    });

    while let Some(QueueEntry { path, .. }) = frontier.pop() {
        if finalized[path.city] {
            continue;
        }
        finalized[path.city] = true;

        if path.city == goal {
            debug!(
                "route {} -> {} found after finalizing {} cities",
                source,
                destination,
                finalized.iter().filter(|done| **done).count()
            );
            return Some(path.into_result(graph));
        }

        let current = best[path.city];
        for &edge_id in graph.neighbour_ids(path.city) {
            let Some(edge) = graph.edge(edge_id) else {
                continue;
            };
            let next = edge.target;
            if finalized[next] {
                continue;
            }

            let candidate = current + priority.edge_weight(&edge.flight);
            if candidate < best[next] {
                best[next] = candidate;
                sequence += 1;

                let extended = path.extend(next, edge_id, &edge.flight);
                frontier.push(QueueEntry {
                    weight: FloatOrd(priority.path_weight(&extended.totals)),
                    name: graph.name_of(next).unwrap_or_default(),
                    sequence,
                    path: extended,
                });
            }
        }
    }

    debug!("no route {} -> {}", source, destination);
    None
}

/// Route prefix explored by the search.
#[derive(Debug, Clone)]
struct PartialPath {
    city: CityIndex,
    totals: PathTotals,
    edges: Vec<EdgeId>,
}

impl PartialPath {
    fn extend(&self, city: CityIndex, edge: EdgeId, flight: &Flight) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges);
        edges.push(edge);
        Self {
            city,
            totals: self.totals.extend(flight),
            edges,
        }
    }

    fn into_result(self, graph: &Graph) -> RouteResult {
        let path = self
            .edges
            .iter()
            .filter_map(|&id| graph.edge(id))
            .map(|edge| edge.flight.clone())
            .collect();
        RouteResult {
            total_cost: self.totals.cost,
            total_duration: self.totals.duration,
            path,
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug)]
struct QueueEntry<'g> {
    weight: FloatOrd,
    name: &'g str,
    sequence: u64,
    path: PartialPath,
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry<'_> {}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by weight.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.name.cmp(self.name))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
