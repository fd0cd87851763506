use crate::defaults;
use assimil_sim::simulation::MatingInitiative;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantArg {
    /// Single ancestry value per individual
    Continuous,
    /// Diploid trait loci per individual
    MultiLocus,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitiativeArg {
    /// A male opens each mating round
    Male,
    /// A random female chooses her mate
    Female,
}

impl From<InitiativeArg> for MatingInitiative {
    fn from(arg: InitiativeArg) -> Self {
        match arg {
            InitiativeArg::Male => MatingInitiative::MaleInitiated,
            InitiativeArg::Female => MatingInitiative::FemaleChoice,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// Tab-separated header and records
    Tsv,
    /// One JSON object per record
    Json,
}

/// Options shared by `run` and `sweep`.
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Model variant (ignored when --config is given)
    #[arg(long, value_enum, default_value = "continuous")]
    pub variant: VariantArg,

    /// JSON configuration file (see `assimil config`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of cycles
    #[arg(long)]
    pub max_cycles: Option<usize>,

    /// Cycles to keep running after the minority lineage has no males
    #[arg(long)]
    pub extra_cycles: Option<usize>,

    /// Which sex opens a mating round
    #[arg(long, value_enum)]
    pub initiative: Option<InitiativeArg>,

    /// Snap the chooser's ancestry to the nearer extreme (continuous only)
    #[arg(long)]
    pub snap: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tsv")]
    pub format: FormatArg,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Candidates drawn per mate-choice tournament
    #[arg(short, long)]
    pub pool_size: Option<usize>,

    /// Random seed (default: use configured seed or a random one)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Smallest pool size to sweep
    #[arg(long, default_value_t = defaults::MIN_POOL_SIZE)]
    pub min_pool: usize,

    /// Largest pool size to sweep (inclusive)
    #[arg(long, default_value_t = defaults::MAX_POOL_SIZE)]
    pub max_pool: usize,

    /// Trials per pool size
    #[arg(short = 'n', long, default_value_t = defaults::TRIALS)]
    pub trials: usize,

    /// Master seed from which per-trial seeds are drawn
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Model variant
    #[arg(long, value_enum, default_value = "continuous")]
    pub variant: VariantArg,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
