//! Schelling Segregation Driver
//!
//! Runs the model for a number of ticks, sampling the happy count after every
//! tick and writing the series, a summary and grid snapshots to disk.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use schelling_core::config::{default_config_toml, DEFAULT_CONFIG_PATH};
use schelling_core::output::{
    generate_snapshot, write_snapshot_to_dir, write_stats, HappyCollector, SnapshotSchedule,
    TickLogger,
};
use schelling_core::{SimConfig, Simulation};
use schelling_events::render_ascii;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "schelling_sim")]
#[command(about = "Schelling segregation model with social influencers")]
struct Args {
    /// Configuration file (defaults are used if it is missing or invalid)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Directory for the tick log, statistics and snapshots
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Interval between grid snapshots (in ticks, 0 disables)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Print the grid and happy count after every tick
    #[arg(long)]
    render: bool,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let args = Args::parse();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` directives if they parse, `info` otherwise
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SimConfig::load_or_default(&args.config);
    if let Some(seed) = args.seed {
        config.run.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        config.run.ticks = ticks;
    }
    if let Some(dir) = args.output_dir {
        config.run.output_dir = dir;
    }
    if let Some(interval) = args.snapshot_interval {
        config.run.snapshot_interval = interval;
    }
    let settings = &config.run;

    let mut sim = Simulation::new(config.model.clone(), settings.seed)?;

    let mut logger = TickLogger::in_dir(&settings.output_dir)?;
    let mut collector = HappyCollector::new();
    let mut snapshots = SnapshotSchedule::new(settings.snapshot_interval);

    write_snapshot_to_dir(&generate_snapshot(&sim), &settings.output_dir)?;

    tracing::info!(seed = settings.seed, ticks = settings.ticks, "starting simulation");

    for _ in 0..settings.ticks {
        sim.step();

        let record = collector.collect(&sim);
        if let Err(e) = logger.log(&record) {
            tracing::warn!("Could not log tick {}: {}", record.tick, e);
        }

        if args.render {
            println!("Tick {}", record.tick);
            print!("{}", render_ascii(&sim.snapshot()));
            println!("Happy agents: {}", record.happy);
            println!();
        }

        if snapshots.should_snapshot(record.tick) {
            match write_snapshot_to_dir(&generate_snapshot(&sim), &settings.output_dir) {
                Ok(_) => snapshots.mark_written(),
                Err(e) => tracing::warn!("Could not write snapshot at tick {}: {}", record.tick, e),
            }
        }
    }

    logger.flush()?;
    write_snapshot_to_dir(&generate_snapshot(&sim), &settings.output_dir)?;
    write_stats(&collector.report(), &settings.output_dir)?;

    let summary = collector.summary();
    tracing::info!(
        ticks = summary.ticks,
        final_happy = summary.final_happy,
        ordinary_agents = summary.ordinary_agents,
        peak_happy = summary.peak_happy,
        snapshots = snapshots.snapshot_count(),
        "simulation complete"
    );
    println!("Happy agents: {}", sim.happy());

    Ok(())
}
