//! Owned city/flight collections with boundary validation.
//!
//! The route engine trusts its inputs: city names are unique, flights never
//! loop back to their origin and both endpoints exist. [`FlightNetwork`] is
//! where those rules are enforced before a snapshot reaches the engine.

use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::import::ParsedData;
use crate::model::{City, Flight, RouteResult};
use crate::path::find_optimal_route;
use crate::routing::RoutePriority;

/// Minimum Jaro-Winkler similarity for a name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Number of "did you mean" suggestions attached to unknown city errors.
pub(crate) const SUGGESTION_LIMIT: usize = 3;

/// Field values for a flight that has not been added to a network yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewFlight {
    pub airline: String,
    pub flight_number: String,
    pub src: String,
    pub dest: String,
    pub cost: u64,
    pub duration: u64,
    pub distance: Option<f64>,
    pub dep_time: String,
    pub arr_time: String,
    pub is_two_way: bool,
}

impl NewFlight {
    fn validate(&self) -> Result<()> {
        let required = [
            ("airline", &self.airline),
            ("flight_number", &self.flight_number),
            ("src", &self.src),
            ("dest", &self.dest),
            ("dep_time", &self.dep_time),
            ("arr_time", &self.arr_time),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(Error::MissingField { field });
        }
        if self.src == self.dest {
            return Err(Error::SameEndpoints {
                city: self.src.clone(),
            });
        }
        Ok(())
    }
}

/// Cities and flights a user has assembled, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    cities: Vec<City>,
    flights: Vec<Flight>,
}

impl FlightNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt imported data, keeping the first of any repeated city name and
    /// dropping self-loop flights.
    pub fn from_parsed(parsed: ParsedData) -> Self {
        let mut seen = HashSet::new();
        let mut cities = Vec::with_capacity(parsed.cities.len());
        for city in parsed.cities {
            if seen.insert(city.name.clone()) {
                cities.push(city);
            } else {
                warn!("ignoring repeated city '{}'", city.name);
            }
        }

        let flights = parsed
            .flights
            .into_iter()
            .filter(|flight| {
                let keep = flight.src != flight.dest;
                if !keep {
                    warn!(
                        "ignoring flight {} that departs and arrives at {}",
                        flight.flight_number, flight.src
                    );
                }
                keep
            })
            .collect();

        Self { cities, flights }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// City names in insertion order, the universe handed to the engine.
    pub fn city_names(&self) -> Vec<String> {
        self.cities.iter().map(|city| city.name.clone()).collect()
    }

    /// Case-sensitive membership check.
    pub fn contains_city(&self, name: &str) -> bool {
        self.cities.iter().any(|city| city.name == name)
    }

    /// Add a city; names are trimmed and must be unique ignoring case.
    pub fn add_city(&mut self, name: &str) -> Result<&City> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyCityName);
        }
        if let Some(existing) = self
            .cities
            .iter()
            .find(|city| city.name.to_lowercase() == name.to_lowercase())
        {
            return Err(Error::DuplicateCity {
                name: existing.name.clone(),
            });
        }

        self.cities.push(City {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        });
        debug!("added city '{}'", name);
        Ok(&self.cities[self.cities.len() - 1])
    }

    /// Remove a city together with every flight that departs from or arrives
    /// at it.
    pub fn remove_city(&mut self, name: &str) -> Result<City> {
        let Some(position) = self.cities.iter().position(|city| city.name == name) else {
            return Err(self.unknown_city(name));
        };
        let city = self.cities.remove(position);

        let before = self.flights.len();
        self.flights
            .retain(|flight| flight.src != city.name && flight.dest != city.name);
        debug!(
            "removed city '{}' and {} attached flights",
            city.name,
            before - self.flights.len()
        );
        Ok(city)
    }

    /// Validate and add a flight between two existing cities.
    pub fn add_flight(&mut self, flight: NewFlight) -> Result<&Flight> {
        flight.validate()?;
        for endpoint in [&flight.src, &flight.dest] {
            if !self.contains_city(endpoint) {
                return Err(self.unknown_city(endpoint));
            }
        }

        self.flights.push(Flight {
            id: Uuid::new_v4().to_string(),
            airline: flight.airline,
            flight_number: flight.flight_number,
            src: flight.src,
            dest: flight.dest,
            cost: flight.cost,
            duration: flight.duration,
            distance: flight.distance,
            dep_time: flight.dep_time,
            arr_time: flight.arr_time,
            is_two_way: flight.is_two_way,
        });
        Ok(&self.flights[self.flights.len() - 1])
    }

    /// City names similar to `name`, best match first.
    pub fn fuzzy_city_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .cities
            .iter()
            .map(|city| {
                let score = strsim::jaro_winkler(&needle, &city.name.to_lowercase());
                (score, city.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Best route over the current snapshot, `None` for unknown cities or
    /// unconnected pairs.
    pub fn find_route(
        &self,
        source: &str,
        destination: &str,
        priority: RoutePriority,
    ) -> Option<RouteResult> {
        find_optimal_route(
            &self.city_names(),
            &self.flights,
            source,
            destination,
            priority,
        )
    }

    pub(crate) fn unknown_city(&self, name: &str) -> Error {
        Error::UnknownCity {
            name: name.to_string(),
            suggestions: self.fuzzy_city_matches(name, SUGGESTION_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_named() {
        let flight = NewFlight {
            airline: "AirIndia".to_string(),
            src: "A".to_string(),
            dest: "B".to_string(),
            ..NewFlight::default()
        };
        let err = flight.validate().expect_err("flight number missing");
        assert!(matches!(
            err,
            Error::MissingField {
                field: "flight_number"
            }
        ));
    }

    #[test]
    fn fuzzy_matches_rank_closest_first() {
        let mut network = FlightNetwork::new();
        for name in ["Mumbai", "Chennai", "Munich"] {
            network.add_city(name).unwrap();
        }
        let matches = network.fuzzy_city_matches("Mumbay", 2);
        assert_eq!(matches.first().map(String::as_str), Some("Mumbai"));
        assert!(matches.len() <= 2);
        assert!(network.fuzzy_city_matches("Zzzz", 3).is_empty());
    }
}
