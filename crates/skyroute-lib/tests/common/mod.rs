//! Common test utilities and fixture helpers.
//!
//! Fixtures are plain import texts under `docs/fixtures/` shared with the CLI
//! tests and the benchmark.

use std::path::PathBuf;

use skyroute_lib::{load_flight_data, Flight, FlightNetwork, ParsedData};

/// Path to the fixtures directory.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Parse a fixture, panicking with the file name on failure.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> ParsedData {
    load_flight_data(&fixture_path(name)).unwrap_or_else(|err| panic!("load {name}: {err}"))
}

#[allow(dead_code)]
pub fn load_network(name: &str) -> FlightNetwork {
    FlightNetwork::from_parsed(load_fixture(name))
}

/// Hand-built flight with fixed schedule times.
#[allow(dead_code)]
pub fn flight(number: &str, src: &str, dest: &str, cost: u64, duration: u64) -> Flight {
    Flight {
        id: format!("{number}-{src}-{dest}"),
        airline: "TestAir".to_string(),
        flight_number: number.to_string(),
        src: src.to_string(),
        dest: dest.to_string(),
        cost,
        duration,
        distance: None,
        dep_time: "06:00".to_string(),
        arr_time: "07:30".to_string(),
        is_two_way: false,
    }
}

#[allow(dead_code)]
pub fn two_way(number: &str, src: &str, dest: &str, cost: u64, duration: u64) -> Flight {
    Flight {
        is_two_way: true,
        ..flight(number, src, dest, cost, duration)
    }
}

/// Flight numbers along a route, in travel order.
#[allow(dead_code)]
pub fn flight_numbers(path: &[Flight]) -> Vec<&str> {
    path.iter().map(|f| f.flight_number.as_str()).collect()
}
