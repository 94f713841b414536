use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::model::Flight;

/// Dense index assigned to a city name while building a [`Graph`].
pub type CityIndex = usize;

/// Position of an [`Edge`] inside the graph's edge list.
pub type EdgeId = usize;

/// Direction an edge was materialised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeKind {
    /// Edge taken straight from a flight record.
    Outbound,
    /// Return leg synthesised for a two-way flight.
    Return,
}

/// Directed edge within the routing graph.
#[derive(Debug, Clone)]
pub struct Edge {
    pub source: CityIndex,
    pub target: CityIndex,
    pub kind: EdgeKind,
    pub flight: Flight,
}

#[derive(Debug, Default)]
struct GraphData {
    names: Vec<String>,
    index: HashMap<String, CityIndex>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
}

/// Adjacency index over a city/flight snapshot.
///
/// Cheap to clone; the underlying data is shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    data: Arc<GraphData>,
}

impl Graph {
    /// Number of distinct cities in the graph.
    pub fn city_count(&self) -> usize {
        self.data.names.len()
    }

    /// Number of directed edges, return legs included.
    pub fn edge_count(&self) -> usize {
        self.data.edges.len()
    }

    /// Resolve a case-sensitive city name to its index.
    pub fn index_of(&self, name: &str) -> Option<CityIndex> {
        self.data.index.get(name).copied()
    }

    /// Name of the city at `index`.
    pub fn name_of(&self, index: CityIndex) -> Option<&str> {
        self.data.names.get(index).map(String::as_str)
    }

    /// Edge by identifier.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.data.edges.get(id)
    }

    /// Outbound edge identifiers for a city.
    pub fn neighbour_ids(&self, city: CityIndex) -> &[EdgeId] {
        self.data
            .adjacency
            .get(city)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Outbound edges for a city.
    pub fn neighbours(&self, city: CityIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.neighbour_ids(city)
            .iter()
            .map(move |&id| &self.data.edges[id])
    }

    /// Outbound flights for a city name; empty for unknown names.
    pub fn neighbours_by_name(&self, name: &str) -> Vec<&Flight> {
        match self.index_of(name) {
            Some(city) => self.neighbours(city).map(|edge| &edge.flight).collect(),
            None => Vec::new(),
        }
    }
}

/// Build the routing graph for a city-name universe and a flight list.
///
/// Cities are indexed by first occurrence, so a repeated name maps to its
/// earliest position. Flights touching a name outside `city_names` are
/// dropped. Every two-way flight also yields a [`EdgeKind::Return`] edge.
pub fn build_graph<S: AsRef<str>>(city_names: &[S], flights: &[Flight]) -> Graph {
    let mut names = Vec::with_capacity(city_names.len());
    let mut index = HashMap::with_capacity(city_names.len());
    for name in city_names {
        let name = name.as_ref();
        if index.contains_key(name) {
            continue;
        }
        index.insert(name.to_string(), names.len());
        names.push(name.to_string());
    }

    let mut edges = Vec::with_capacity(flights.len());
    let mut adjacency: Vec<Vec<EdgeId>> = vec![Vec::new(); names.len()];
    let mut dropped = 0usize;

    for flight in flights {
        let (Some(&source), Some(&target)) = (index.get(&flight.src), index.get(&flight.dest))
        else {
            dropped += 1;
            continue;
        };

        adjacency[source].push(edges.len());
        edges.push(Edge {
            source,
            target,
            kind: EdgeKind::Outbound,
            flight: flight.clone(),
        });

        if flight.is_two_way {
            adjacency[target].push(edges.len());
            edges.push(Edge {
                source: target,
                target: source,
                kind: EdgeKind::Return,
                flight: flight.reversed(),
            });
        }
    }

    debug!(
        "built graph with {} cities and {} edges ({} flights dropped)",
        names.len(),
        edges.len(),
        dropped
    );

    Graph {
        data: Arc::new(GraphData {
            names,
            index,
            edges,
            adjacency,
        }),
    }
}
