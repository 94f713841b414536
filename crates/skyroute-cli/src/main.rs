use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroute_cli::commands::import::handle_import_command;
use skyroute_cli::commands::route::{
    handle_route_command, parse_weights, RouteCommandArgs, RoutePriorityArg,
};
use skyroute_cli::output::{print_footer, print_logo, OutputFormat};
use skyroute_lib::CustomWeights;

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight network import and route finding")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalOptions {
    /// Import file to read; `-` or omitted reads stdin.
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress the banner and timing footer.
    #[arg(long, global = true)]
    no_logo: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse the input and summarise the flight network.
    Import,
    /// Find the best route between two cities.
    Route(RouteArgs),
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Departure city. Defaults to the second-to-last line of the input.
    #[arg(long = "from")]
    from: Option<String>,

    /// Arrival city. Defaults to the last line of the input.
    #[arg(long = "to")]
    to: Option<String>,

    /// Metric to minimise.
    #[arg(long, value_enum)]
    priority: Option<RoutePriorityArg>,

    /// Custom blend as COST,TIME,DISTANCE percentages summing to 100.
    #[arg(long, value_parser = parse_weights)]
    weights: Option<CustomWeights>,
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        Self {
            from: args.from,
            to: args.to,
            priority: args.priority,
            weights: args.weights,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    let GlobalOptions {
        input,
        format,
        no_logo,
    } = cli.global;
    let decorate = !no_logo && format.supports_banner();
    if decorate {
        print_logo();
    }

    match cli.command {
        Command::Import => handle_import_command(input.as_deref(), format)?,
        Command::Route(args) => {
            handle_route_command(input.as_deref(), format, &RouteCommandArgs::from(args))?
        }
    }

    if decorate {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
