//! Output formatting for route and import results.
//!
//! Text output is styled through [`ColorPalette`]; the rich and itinerary
//! formats reuse the library's renderers and JSON is written straight from
//! the serialisable summaries.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use skyroute_lib::{format_duration, ParsedData, RouteRenderMode, RouteSummary};

use crate::terminal::{format_with_separators, supports_unicode, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable text.
    #[default]
    Text,
    /// Markdown.
    Rich,
    /// One pipe-separated line per flight.
    Itinerary,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Whether the banner and footer may decorate this format.
    pub fn supports_banner(self) -> bool {
        !matches!(self, OutputFormat::Json)
    }

    pub fn render_route(self, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                print!("{}", render_text(summary, &ColorPalette::detect()));
                Ok(())
            }
            OutputFormat::Rich => {
                print!("{}", summary.render(RouteRenderMode::RichText));
                Ok(())
            }
            OutputFormat::Itinerary => {
                print!("{}", summary.render(RouteRenderMode::Itinerary));
                Ok(())
            }
            OutputFormat::Json => render_json(summary),
        }
    }

    pub fn render_import(self, report: &ImportReport) -> io::Result<()> {
        match self {
            OutputFormat::Json => render_json(report),
            _ => {
                print!("{}", report.render(&ColorPalette::detect()));
                Ok(())
            }
        }
    }
}

/// Print the CLI banner, in ASCII unless the locale advertises UTF-8.
pub fn print_logo() {
    let palette = ColorPalette::detect();
    let (orange, gray, reset) = (palette.orange, palette.gray, palette.reset);

    if supports_unicode() {
        println!(
            "{gray}╭──────────────────────────────╮{reset}
{gray}│{orange}  ✈  S K Y R O U T E          {gray}│{reset}
{gray}╰──────────────────────────────╯{reset}"
        );
    } else {
        println!(
            "{orange}+------------------------------+
|  SKYROUTE  >> route finder   |
+------------------------------+{reset}"
        );
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: std::time::Duration) {
    let palette = ColorPalette::detect();
    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };
    println!("\n{}Completed in {}{}", palette.gray, time_str, palette.reset);
}

/// Human-readable route view.
pub fn render_text(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let p = palette;
    let mut out = format!(
        "Route from {}{}{} to {}{}{} ({} flights; priority: {}):\n",
        p.white_bold,
        summary.source,
        p.reset,
        p.white_bold,
        summary.destination,
        p.reset,
        summary.hops,
        summary.priority
    );
    for leg in &summary.legs {
        out.push_str(&format!(
            "{:>3}. {}{} {}{} {} {}{}{} -> {} {}{}{}  {}cost {}{}  {}\n",
            leg.index,
            p.orange,
            leg.airline,
            leg.flight_number,
            p.reset,
            leg.src,
            p.cyan,
            leg.dep_time,
            p.reset,
            leg.dest,
            p.cyan,
            leg.arr_time,
            p.reset,
            p.green,
            format_with_separators(leg.cost),
            p.reset,
            format_duration(leg.duration)
        ));
    }
    out.push_str(&format!(
        "\n{}Total cost:{} {}\n",
        p.gray,
        p.reset,
        format_with_separators(summary.total_cost)
    ));
    out.push_str(&format!(
        "{}Total duration:{} {}\n",
        p.gray,
        p.reset,
        format_duration(summary.total_duration)
    ));
    out.push_str(&format!(
        "{}Total distance:{} {}km\n",
        p.gray,
        p.reset,
        format_with_separators(summary.total_distance_km.round() as u64)
    ));
    out
}

/// Serialisable overview of an import.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImportReport {
    pub cities: Vec<String>,
    pub flights: usize,
    pub two_way_flights: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<ImportQuery>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImportQuery {
    pub source: String,
    pub destination: String,
}

impl ImportReport {
    pub fn from_parsed(parsed: &ParsedData) -> Self {
        Self {
            cities: parsed.city_names(),
            flights: parsed.flights.len(),
            two_way_flights: parsed.flights.iter().filter(|f| f.is_two_way).count(),
            query: parsed
                .trailing_query()
                .map(|(source, destination)| ImportQuery {
                    source: source.to_string(),
                    destination: destination.to_string(),
                }),
        }
    }

    pub fn render(&self, palette: &ColorPalette) -> String {
        let p = palette;
        let mut out = format!(
            "Imported {} cities and {} flights ({} two-way)\n",
            self.cities.len(),
            self.flights,
            self.two_way_flights
        );
        out.push_str(&format!(
            "{}Cities:{} {}\n",
            p.gray,
            p.reset,
            self.cities.join(", ")
        ));
        if let Some(query) = &self.query {
            out.push_str(&format!(
                "{}Query:{} {}{}{} -> {}{}{}\n",
                p.gray,
                p.reset,
                p.white_bold,
                query.source,
                p.reset,
                p.white_bold,
                query.destination,
                p.reset
            ));
        }
        out
    }
}

fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    writeln!(stdout)
}
