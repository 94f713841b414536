//! Line-oriented text import for city/flight networks.
//!
//! The accepted layout is:
//!
//! ```text
//! <N>
//! <city name>            (N lines)
//! <M>
//! <airline> <flightNo> <src> <dest> <cost> <duration> <depTime> <arrTime> <Y|N>   (M lines)
//! ```
//!
//! Blank lines are ignored everywhere. Lines inside or after the flight block
//! that do not split into exactly nine whitespace-separated tokens are not
//! flights; they are kept as [`ParsedData::trailing`] lines. Producers often
//! append the query's source and destination city there.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{City, Flight};

const FLIGHT_TOKEN_COUNT: usize = 9;

/// Cities and flights read from an import text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedData {
    pub cities: Vec<City>,
    pub flights: Vec<Flight>,
    /// Non-flight lines found after the flight count, in input order.
    pub trailing: Vec<String>,
}

impl ParsedData {
    /// `true` when the import produced neither cities nor flights, which
    /// callers treat as a failed parse.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty() && self.flights.is_empty()
    }

    /// City names in declaration order.
    pub fn city_names(&self) -> Vec<String> {
        self.cities.iter().map(|city| city.name.clone()).collect()
    }

    /// Source and destination taken from the last two trailing lines.
    pub fn trailing_query(&self) -> Option<(&str, &str)> {
        match self.trailing.as_slice() {
            [.., source, destination] => Some((source.as_str(), destination.as_str())),
            _ => None,
        }
    }
}

/// Parse an import text, returning empty data when the layout is invalid.
///
/// Individual malformed flight lines never fail the import; they are logged
/// and skipped.
pub fn parse_flight_data(raw: &str) -> ParsedData {
    match try_parse_flight_data(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("discarding import: {}", err);
            ParsedData::default()
        }
    }
}

/// Read and parse an import file.
pub fn load_flight_data(path: &Path) -> Result<ParsedData> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ImportRead {
        path: path.to_path_buf(),
        source,
    })?;
    try_parse_flight_data(&raw)
}

/// Parse an import text, surfacing the layout error instead of discarding it.
pub fn try_parse_flight_data(raw: &str) -> Result<ParsedData> {
    // (1-based source line number, trimmed text)
    let lines: Vec<(usize, &str)> = raw
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();
    let last_line = raw.lines().count().max(1);
    let mut cursor = lines.iter().copied();

    let (count_line, count_text) = cursor.next().ok_or_else(|| Error::ImportFormat {
        line: 1,
        message: "missing number of cities".to_string(),
    })?;
    let city_count = parse_count(count_line, count_text, "cities")?;

    let mut cities = Vec::with_capacity(city_count);
    for idx in 0..city_count {
        let (_, name) = cursor.next().ok_or_else(|| Error::ImportFormat {
            line: last_line,
            message: format!("expected {city_count} city names, found {idx}"),
        })?;
        cities.push(City::named(name));
    }

    let (flight_count_line, flight_count_text) =
        cursor.next().ok_or_else(|| Error::ImportFormat {
            line: last_line,
            message: "missing number of flights".to_string(),
        })?;
    let flight_count = parse_count(flight_count_line, flight_count_text, "flights")?;

    let known: HashSet<&str> = cities.iter().map(|city| city.name.as_str()).collect();
    let mut flights = Vec::with_capacity(flight_count);
    let mut trailing = Vec::new();
    let mut slots = 0usize;

    while slots < flight_count {
        let Some((line, text)) = cursor.next() else {
            break;
        };
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != FLIGHT_TOKEN_COUNT {
            debug!("line {} is not a flight record: {}", line, text);
            trailing.push(text.to_string());
            continue;
        }

        slots += 1;
        match parse_flight(&tokens, &known) {
            Ok(flight) => flights.push(flight),
            Err(reason) => warn!("skipping invalid flight on line {}: {}", line, reason),
        }
    }
    trailing.extend(cursor.map(|(_, text)| text.to_string()));

    debug!(
        "imported {} cities and {} of {} declared flights",
        cities.len(),
        flights.len(),
        flight_count
    );

    Ok(ParsedData {
        cities,
        flights,
        trailing,
    })
}

fn parse_count(line: usize, text: &str, what: &str) -> Result<usize> {
    text.parse::<usize>().map_err(|err| Error::ImportFormat {
        line,
        message: format!("could not parse number of {what} from '{text}': {err}"),
    })
}

fn parse_flight(
    tokens: &[&str],
    known: &HashSet<&str>,
) -> std::result::Result<Flight, String> {
    let [airline, flight_number, src, dest, cost, duration, dep_time, arr_time, two_way] =
        tokens
    else {
        return Err(format!(
            "expected {FLIGHT_TOKEN_COUNT} fields, found {}",
            tokens.len()
        ));
    };

    let cost = cost
        .parse::<u64>()
        .map_err(|err| format!("invalid cost '{cost}': {err}"))?;
    let duration = duration
        .parse::<u64>()
        .map_err(|err| format!("invalid duration '{duration}': {err}"))?;
    if !known.contains(src) {
        return Err(format!("unknown source city '{src}'"));
    }
    if !known.contains(dest) {
        return Err(format!("unknown destination city '{dest}'"));
    }

    Ok(Flight {
        id: Uuid::new_v4().to_string(),
        airline: airline.to_string(),
        flight_number: flight_number.to_string(),
        src: src.to_string(),
        dest: dest.to_string(),
        cost,
        duration,
        distance: None,
        dep_time: dep_time.to_string(),
        arr_time: arr_time.to_string(),
        is_two_way: two_way.eq_ignore_ascii_case("y"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_lines_must_be_integers() {
        let err = try_parse_flight_data("three\nA\nB\nC\n0\n").expect_err("bad count");
        assert!(matches!(err, Error::ImportFormat { line: 1, .. }));
    }

    #[test]
    fn missing_city_lines_fail_the_import() {
        let err = try_parse_flight_data("3\nA\nB\n").expect_err("too few cities");
        assert!(format!("{err}").contains("expected 3 city names, found 2"));
        assert!(parse_flight_data("3\nA\nB\n").is_empty());
    }

    #[test]
    fn missing_flight_count_fails_the_import() {
        assert!(try_parse_flight_data("2\nA\nB\n").is_err());
        assert!(try_parse_flight_data("2\nA\nB\nmany\n").is_err());
    }

    #[test]
    fn blank_and_whitespace_lines_are_ignored() {
        let raw = "\n2\n   \nA\n\nB\n\t\n1\nX X1 A B 10 20 08:00 08:20 n\n";
        let parsed = parse_flight_data(raw);
        assert_eq!(parsed.city_names(), vec!["A", "B"]);
        assert_eq!(parsed.flights.len(), 1);
        assert!(!parsed.flights[0].is_two_way);
    }

    #[test]
    fn flight_ids_are_unique() {
        let raw = "2\nA\nB\n2\nX X1 A B 1 1 00:00 00:01 N\nX X1 A B 1 1 00:00 00:01 N\n";
        let parsed = parse_flight_data(raw);
        assert_eq!(parsed.flights.len(), 2);
        assert_ne!(parsed.flights[0].id, parsed.flights[1].id);
    }

    #[test]
    fn negative_cost_is_rejected_per_line() {
        let raw = "2\nA\nB\n2\nX X1 A B -5 1 00:00 00:01 N\nX X2 A B 5 1 00:00 00:01 N\n";
        let parsed = parse_flight_data(raw);
        assert_eq!(parsed.flights.len(), 1);
        assert_eq!(parsed.flights[0].flight_number, "X2");
    }

    #[test]
    fn trailing_query_uses_last_two_lines() {
        let raw = "2\nA\nB\n1\nX X1 A B 1 1 00:00 00:01 N\nA\nB\n";
        let parsed = parse_flight_data(raw);
        assert_eq!(parsed.trailing_query(), Some(("A", "B")));

        let no_query = parse_flight_data("2\nA\nB\n0\n");
        assert_eq!(no_query.trailing_query(), None);
    }
}
