//! Command line driver: load or generate cities, build a nearest-neighbor
//! tour, and print it with its length and construction time.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{ArgGroup, Parser, ValueEnum};
use log::{info, warn, LevelFilter};

use u_tour::config::TourConfig;
use u_tour::constructive::nearest_neighbor;
use u_tour::distance::DistanceMetric;
use u_tour::evaluation::check_tour;
use u_tour::models::PointStore;
use u_tour::report::Report;
use u_tour::{instance, io, logging, Result};

#[derive(Debug, Parser)]
#[command(name = "u-tour", version, about = "Nearest-neighbor TSP tour construction")]
#[command(group(ArgGroup::new("source").required(true).args(["file", "random"])))]
struct Args {
    /// TSPLIB file with a NODE_COORD_SECTION.
    file: Option<PathBuf>,

    /// Generate N uniform random cities instead of reading a file.
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed used with --random.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Side of the square --random cities are drawn from.
    #[arg(long, default_value_t = 1000.0)]
    side: f64,

    /// JSON construction config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Round edge lengths to the nearest integer (TSPLIB EUC_2D).
    #[arg(long)]
    rounded: bool,

    /// Log level for stderr output.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    logging::init_logger(args.log_level.into())?;

    let mut config = match &args.config {
        Some(path) => TourConfig::load(path)?,
        None => TourConfig::new(),
    };
    if args.rounded {
        config = config.with_metric(DistanceMetric::RoundedEuclidean);
    }

    let cities = if let Some(n) = args.random {
        info!("generating {n} cities: side={} seed={}", args.side, args.seed);
        instance::seeded_uniform(n, args.side, args.seed)
    } else if let Some(path) = &args.file {
        io::load_cities(path)?
    } else {
        Vec::new()
    };
    let store = PointStore::from_cities(cities);

    let started = Instant::now();
    let tour = nearest_neighbor(&store, &config)?;
    let elapsed = started.elapsed();

    let defects = check_tour(tour.indices(), store.len());
    if !defects.is_empty() {
        warn!("tour failed structural check: {defects:?}");
    }
    info!(
        "output: n={} length={:.3} time={}ms",
        store.len(),
        tour.length(),
        elapsed.as_millis()
    );

    print!("{}", Report::new(&tour).with_elapsed(elapsed));

    Ok(())
}
