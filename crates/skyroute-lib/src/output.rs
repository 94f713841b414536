use std::fmt::Write;

use serde::Serialize;

use crate::model::{OptimizationPriority, RouteResult};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
    /// One line per flight in the `src -> dest | airline number | ...` layout.
    Itinerary,
}

/// Single flight within a summarised route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteLeg {
    pub index: usize,
    pub airline: String,
    pub flight_number: String,
    pub src: String,
    pub dest: String,
    pub dep_time: String,
    pub arr_time: String,
    pub cost: u64,
    pub duration: u64,
    pub distance_km: f64,
}

/// Structured representation of a route result that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub source: String,
    pub destination: String,
    pub priority: OptimizationPriority,
    pub hops: usize,
    pub total_cost: u64,
    pub total_duration: u64,
    pub total_distance_km: f64,
    pub legs: Vec<RouteLeg>,
}

impl RouteSummary {
    /// Summarise a [`RouteResult`] for display.
    pub fn from_result(
        source: &str,
        destination: &str,
        priority: OptimizationPriority,
        result: &RouteResult,
    ) -> Self {
        let legs = result
            .path
            .iter()
            .enumerate()
            .map(|(index, flight)| RouteLeg {
                index: index + 1,
                airline: flight.airline.clone(),
                flight_number: flight.flight_number.clone(),
                src: flight.src.clone(),
                dest: flight.dest.clone(),
                dep_time: flight.dep_time.clone(),
                arr_time: flight.arr_time.clone(),
                cost: flight.cost,
                duration: flight.duration,
                distance_km: flight.distance_km(),
            })
            .collect();

        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            priority,
            hops: result.hop_count(),
            total_cost: result.total_cost,
            total_duration: result.total_duration,
            total_distance_km: result.total_distance_km(),
            legs,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Itinerary => self.render_itinerary(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} flights, priority: {})",
            self.source, self.destination, self.hops, self.priority
        );
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "{:>3}: {} {} {} {} -> {} {} ({}, {})",
                leg.index,
                leg.airline,
                leg.flight_number,
                leg.src,
                leg.dep_time,
                leg.dest,
                leg.arr_time,
                leg.cost,
                format_duration(leg.duration)
            );
        }
        let _ = writeln!(buffer, "Total cost: {}", self.total_cost);
        let _ = writeln!(
            buffer,
            "Total duration: {}",
            format_duration(self.total_duration)
        );
        let _ = writeln!(buffer, "Total distance: {:.0}km", self.total_distance_km);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** — _{} → {}_ ({} flights, priority: `{}`)",
            self.source, self.destination, self.hops, self.priority
        );
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{} {}** {} `{}` → {} `{}` ({}, {})",
                leg.index,
                leg.airline,
                leg.flight_number,
                leg.src,
                leg.dep_time,
                leg.dest,
                leg.arr_time,
                leg.cost,
                format_duration(leg.duration)
            );
        }
        let _ = writeln!(
            buffer,
            "\n**Total:** {} cost, {}",
            self.total_cost,
            format_duration(self.total_duration)
        );
        buffer
    }

    fn render_itinerary(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Minimum {} from {} to {}: {}",
            self.priority,
            self.source,
            self.destination,
            self.headline_total()
        );
        let _ = writeln!(buffer, "Total duration: {} minutes", self.total_duration);
        let _ = writeln!(buffer, "Flight path:");
        for leg in &self.legs {
            let _ = writeln!(
                buffer,
                "  {} -> {} | {} {} | Cost: {} | Duration: {} min | Dep: {} Arr: {}",
                leg.src,
                leg.dest,
                leg.airline,
                leg.flight_number,
                leg.cost,
                leg.duration,
                leg.dep_time,
                leg.arr_time
            );
        }
        buffer
    }

    fn headline_total(&self) -> String {
        match self.priority {
            OptimizationPriority::Time => format!("{} minutes", self.total_duration),
            OptimizationPriority::Distance => format!("{:.0} km", self.total_distance_km),
            OptimizationPriority::Cost | OptimizationPriority::Custom => {
                self.total_cost.to_string()
            }
        }
    }
}

/// Format a minute count as `"{hours}h {minutes}m"`.
pub fn format_duration(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
