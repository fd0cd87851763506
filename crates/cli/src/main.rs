mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use args::{ConfigArgs, RunArgs, SweepArgs};
use commands::{config, run, sweep};

/// Assimil: A Lineage Assimilation Simulator
///
/// This tool simulates how a minority Y-linked lineage disappears from a
/// population under assortative mating and lineage-linked miscarriage.
#[derive(Parser, Debug)]
#[command(name = "assimil")]
#[command(author, version, long_about = None)]
#[command(about = "Simulates the assimilation of a minority lineage")]
struct Cli {
    /// Number of threads to use for parallel sweeps
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single simulation and print its summary record.
    Run(RunArgs),

    /// Repeat runs over a range of pool sizes.
    ///
    /// Trials run in parallel; one summary record is printed per trial.
    Sweep(SweepArgs),

    /// Print the default configuration as JSON.
    ///
    /// Edit the output and pass it back with `run --config`.
    Config(ConfigArgs),
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => run::run_simulation(&args)?,
        Commands::Sweep(args) => sweep::run_sweep(&args)?,
        Commands::Config(args) => config::print_config(&args)?,
    }

    Ok(())
}
