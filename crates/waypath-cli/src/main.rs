use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use waypath_cli::commands::locations::handle_list_locations;
use waypath_cli::commands::route::{handle_route_command, RouteCommandArgs};
use waypath_cli::commands::session::handle_session;
use waypath_cli::commands::vehicles::handle_list_vehicles;
use waypath_cli::commands::{AppContext, AppOptions};
use waypath_cli::output::OutputFormat;
use waypath_lib::estimate::DEFAULT_RATE_PER_KM;
use waypath_lib::RouteAlgorithm;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rank routes between locations by conditions-adjusted travel time"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct GlobalOptions {
    /// Network CSV with from,to,distance_km columns. Defaults to the built-in network.
    #[arg(long, global = true, env = "WAYPATH_NETWORK")]
    network: Option<PathBuf>,

    /// Vehicle catalog CSV with name,speed_kmh columns. Defaults to Car/Bike/Bus.
    #[arg(long, global = true, env = "WAYPATH_VEHICLES")]
    vehicles: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Seed for the simulated traffic and weather conditions.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Use a fixed conditions multiplier instead of simulating one.
    #[arg(long, global = true)]
    conditions: Option<f64>,

    /// Travel cost per adjusted kilometre.
    #[arg(long, global = true, default_value_t = DEFAULT_RATE_PER_KM)]
    rate: f64,

    /// Disable ANSI colors in output.
    #[arg(long, global = true)]
    no_color: bool,
}

impl GlobalOptions {
    fn to_app_options(&self) -> AppOptions {
        AppOptions {
            network: self.network.clone(),
            vehicles: self.vehicles.clone(),
            format: self.format,
            seed: self.seed,
            conditions: self.conditions,
            rate_per_km: self.rate,
            no_color: self.no_color,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank every route between two locations and show the fastest.
    Route(RouteArgs),
    /// List the locations registered in the network.
    Locations,
    /// List the vehicle profiles in the catalog.
    Vehicles,
    /// Answer `from,to,vehicle` queries read from stdin, tracking recent searches.
    Session,
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Starting location name.
    #[arg(long = "from")]
    from: String,
    /// Destination location name.
    #[arg(long = "to")]
    to: String,
    /// Vehicle kind (see the `vehicles` command).
    #[arg(long)]
    vehicle: String,
    /// Route enumeration algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Priority)]
    algorithm: AlgorithmArg,
    /// Maximum number of routes to list.
    #[arg(long)]
    max_routes: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    /// Priority-ordered collector.
    Priority,
    /// Yen's k-shortest loopless paths.
    Yen,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Priority => RouteAlgorithm::Priority,
            AlgorithmArg::Yen => RouteAlgorithm::Yen,
        }
    }
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        Self {
            from: args.from,
            to: args.to,
            vehicle: args.vehicle,
            algorithm: args.algorithm.into(),
            max_routes: args.max_routes,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut context = AppContext::load(&cli.global.to_app_options())?;

    match cli.command {
        Command::Route(args) => handle_route_command(&mut context, &args.into()),
        Command::Locations => handle_list_locations(&context),
        Command::Vehicles => handle_list_vehicles(&context),
        Command::Session => {
            let stdin = io::stdin();
            handle_session(&mut context, stdin.lock()).map(|_| ())
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
