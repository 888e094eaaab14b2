//! Monte Carlo estimate of π from points sampled in [-1, 1]²
//! (see `Cli` below for the run parameters).

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use env_logger::Env;
use log::info;

use estimate_pi::config::{RunConfig, DEFAULT_SEED};
use estimate_pi::estimate::simulate;
use estimate_pi::sink::{ErrorLog, ErrorSchema, PointsWriter, TimingLog};
use estimate_pi::Result;

#[derive(Parser)]
#[command(name = "estimate_pi")]
struct Cli {
    /// Worker threads, 1 to 8
    #[arg(allow_negative_numbers = true)]
    num_threads: String,

    /// Points to sample; must be divisible by num_threads
    #[arg(allow_negative_numbers = true)]
    num_points: String,

    /// Seed for the point generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Directory for points_<N>.csv, errors.csv and timings.csv
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Also record the estimate itself in errors.csv
    #[arg(long)]
    with_estimate: bool,

    /// Skip writing points_<N>.csv
    #[arg(long)]
    no_points: bool,
}

fn run(cli: Cli, main_start: Instant) -> Result<()> {
    let cfg = RunConfig::from_args(&cli.num_threads, &cli.num_points)?.with_seed(cli.seed);

    // Open before sampling so a bad directory fails fast.
    let mut points_writer = if cli.no_points {
        None
    } else {
        Some(PointsWriter::create(&cli.output_dir, cfg.num_points())?)
    };

    let sim = simulate(&cfg);
    if let Some(writer) = points_writer.as_mut() {
        writer.write_points(&sim.points)?;
    }

    let est = sim.estimate;
    println!("Points:          {}", est.num_points);
    println!("In circle:       {}", est.in_circle);
    println!("Pi estimate:     {:.15}", est.pi_estimate);
    println!("Error:           {:.15}", est.error());

    let schema = if cli.with_estimate { ErrorSchema::WithEstimate } else { ErrorSchema::Basic };
    let mut errors = ErrorLog::open(&cli.output_dir, schema)?;
    errors.record(&est)?;

    let mut timings = TimingLog::open(&cli.output_dir)?;
    let main_seconds = main_start.elapsed().as_secs_f64();
    timings.record(cfg.num_points(), main_seconds)?;

    info!(
        "appended to {} and {} ({:.3}s sampling, {:.3}s total)",
        errors.path().display(),
        timings.path().display(),
        sim.elapsed.as_secs_f64(),
        main_seconds
    );
    Ok(())
}

fn main() -> ExitCode {
    let main_start = Instant::now();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli, main_start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
