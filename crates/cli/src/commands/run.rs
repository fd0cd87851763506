use anyhow::{Context, Result};
use tracing::info;

use crate::args::RunArgs;
use crate::printing::{print_parameters, print_summaries};
use crate::utils::scenario_builder;

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    let mut builder = scenario_builder(&args.scenario)?;
    if let Some(pool_size) = args.pool_size {
        builder = builder.pool_size(pool_size);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let config = builder.build().context("Invalid run configuration")?;

    print_parameters(&config);
    info!(
        variant = config.variant.name(),
        pool_size = config.pool_size(),
        "Starting run"
    );

    let summary = config.run().context("Simulation failed")?;

    info!(
        cycles = summary.cycles(),
        minority_males = summary.minority_males(),
        "Run finished"
    );
    print_summaries(&[summary], args.scenario.format)
}
