use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the skyroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the import text does not follow the expected layout.
    #[error("import format error on line {line}: {message}")]
    ImportFormat { line: usize, message: String },

    /// Raised when an import file could not be read.
    #[error("failed to read import file {path}: {source}")]
    ImportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when adding a city with a blank name.
    #[error("city name must not be empty")]
    EmptyCityName,

    /// Raised when adding a city whose name is already taken (case-insensitive).
    #[error("city already exists: {name}")]
    DuplicateCity { name: String },

    /// Raised when a city name could not be found in the network.
    #[error("unknown city name: {name}{}", format_suggestions(.suggestions))]
    UnknownCity {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a flight would depart from and arrive at the same city.
    #[error("flight source and destination must be different (both {city})")]
    SameEndpoints { city: String },

    /// Raised when a required flight field is blank.
    #[error("flight field {field} must not be empty")]
    MissingField { field: &'static str },

    /// Raised when custom weights do not add up to one hundred percent.
    #[error("custom weights must sum to 100 (got {sum})")]
    InvalidWeights { sum: f64 },

    /// Raised when no route could be found between two cities.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
