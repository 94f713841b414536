//! Route command handler for finding the best connection between two cities.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use skyroute_lib::{
    plan_route, CustomWeights, Error as RouteError, FlightNetwork, OptimizationPriority,
    ParsedData, RouteRequest, RouteSummary,
};

use crate::commands::load_input;
use crate::output::OutputFormat;

/// Metric to minimise, as accepted by `--priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RoutePriorityArg {
    /// Lowest total ticket cost.
    #[default]
    Cost,
    /// Shortest total flight time.
    Time,
    /// Shortest total distance.
    Distance,
    /// Weighted blend set with `--weights`.
    Custom,
}

impl From<RoutePriorityArg> for OptimizationPriority {
    fn from(value: RoutePriorityArg) -> Self {
        match value {
            RoutePriorityArg::Cost => OptimizationPriority::Cost,
            RoutePriorityArg::Time => OptimizationPriority::Time,
            RoutePriorityArg::Distance => OptimizationPriority::Distance,
            RoutePriorityArg::Custom => OptimizationPriority::Custom,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone, Default)]
pub struct RouteCommandArgs {
    /// Departure city; falls back to the input's trailing query.
    pub from: Option<String>,
    /// Arrival city; falls back to the input's trailing query.
    pub to: Option<String>,
    pub priority: Option<RoutePriorityArg>,
    /// Cost, time and distance percentages.
    pub weights: Option<CustomWeights>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library request, resolving missing endpoints
    /// from the import's trailing lines.
    pub fn to_request(&self, parsed: &ParsedData) -> Result<RouteRequest> {
        let query = parsed.trailing_query();
        let from = self
            .from
            .clone()
            .or_else(|| query.map(|(source, _)| source.to_string()));
        let to = self
            .to
            .clone()
            .or_else(|| query.map(|(_, destination)| destination.to_string()));
        let (Some(from), Some(to)) = (from, to) else {
            anyhow::bail!(
                "no route endpoints given; pass --from and --to or append the two city names to the input"
            );
        };

        let request = RouteRequest::new(from, to);
        let Some(weights) = self.weights else {
            let priority = self.priority.unwrap_or_default();
            return Ok(request.with_priority(priority.into()));
        };

        if !matches!(self.priority, None | Some(RoutePriorityArg::Custom)) {
            anyhow::bail!("--weights can only be used with --priority custom");
        }
        weights
            .validate()
            .context("invalid --weights for the custom priority")?;
        Ok(request.with_weights(weights))
    }
}

/// Parse `--weights` given as `COST,TIME,DISTANCE` percentages.
pub fn parse_weights(value: &str) -> std::result::Result<CustomWeights, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [cost, time, distance] = parts.as_slice() else {
        return Err(format!(
            "expected three comma-separated percentages, got '{value}'"
        ));
    };
    let parse = |label: &str, text: &str| {
        text.parse::<f64>()
            .map_err(|_| format!("invalid {label} weight '{text}'"))
            .and_then(|weight| {
                if weight.is_finite() && weight >= 0.0 {
                    Ok(weight)
                } else {
                    Err(format!("{label} weight must be a non-negative number"))
                }
            })
    };
    Ok(CustomWeights::new(
        parse("cost", cost)?,
        parse("time", time)?,
        parse("distance", distance)?,
    ))
}

/// Handle the route subcommand.
pub fn handle_route_command(
    input: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let parsed = load_input(input)?;
    let request = args.to_request(&parsed)?;
    let network = FlightNetwork::from_parsed(parsed);

    let result = match plan_route(&network, &request) {
        Ok(result) => result,
        Err(err) => return Err(handle_route_failure(err)),
    };

    let summary = RouteSummary::from_result(
        &request.source,
        &request.destination,
        request.priority,
        &result,
    );
    format
        .render_route(&summary)
        .context("failed to write route output")
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownCity { name, suggestions } => {
            anyhow::anyhow!(format_unknown_city_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_city_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown city '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_route_not_found_message(start: &str, goal: &str) -> String {
    format!(
        "No route found between {} and {}. Check that connecting flights exist and that one-way flights run in the right direction.",
        start, goal
    )
}
