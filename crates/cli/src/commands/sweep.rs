use anyhow::{bail, Context, Result};
use assimil_sim::simulation::{Configuration, RunSummary};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use tracing::info;

use crate::args::SweepArgs;
use crate::printing::{print_parameters, print_summaries};
use crate::utils::scenario_builder;

pub fn run_sweep(args: &SweepArgs) -> Result<()> {
    if args.min_pool == 0 {
        bail!("--min-pool must be at least 1");
    }
    if args.min_pool > args.max_pool {
        bail!(
            "--min-pool ({}) must not exceed --max-pool ({})",
            args.min_pool,
            args.max_pool
        );
    }

    let base = scenario_builder(&args.scenario)?;
    let mut master = match args.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
    };

    // Seeds are drawn up front so results do not depend on scheduling
    let mut configs: Vec<Configuration> = Vec::new();
    for pool_size in args.min_pool..=args.max_pool {
        for _ in 0..args.trials {
            let config = base
                .clone()
                .pool_size(pool_size)
                .seed(master.random())
                .build()
                .with_context(|| format!("Invalid configuration for pool size {pool_size}"))?;
            configs.push(config);
        }
    }

    if let Some(first) = configs.first() {
        print_parameters(first);
    }
    info!(runs = configs.len(), "Starting sweep");

    let pb = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(configs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        pb
    };

    let summaries: Vec<RunSummary> = configs
        .par_iter()
        .map(|config| {
            let summary = config.run();
            pb.inc(1);
            summary
        })
        .collect::<Result<Vec<_>, _>>()
        .context("Simulation failed")?;
    pb.finish_and_clear();

    print_summaries(&summaries, args.scenario.format)
}
