//! Simulation parameters.
//!
//! `BreedingConfig` controls how mating rounds are run; `SimulationConfig`
//! groups it with the culling policy and the termination settings into
//! everything the scheduler needs for a run.

use crate::errors::BuilderError;
use crate::evolution::CullingPolicy;
use serde::{Deserialize, Serialize};

/// Which sex opens a mating round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatingInitiative {
    /// A male is drawn first and then chooses among the unmated females.
    #[default]
    MaleInitiated,
    /// An unmated female is drawn first and chooses among all males.
    FemaleChoice,
}

/// Parameters of a breeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreedingConfig {
    /// Candidates drawn per mate-choice tournament
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    /// Candidates drawn when picking the individual who opens a round
    #[serde(default = "default_initiator_pool_size")]
    pub initiator_pool_size: usize,
    #[serde(default)]
    pub initiative: MatingInitiative,
    /// Fraction of females left unmated each pass
    #[serde(default = "default_unmated_fraction")]
    pub unmated_fraction: f64,
}

fn default_pool_size() -> usize {
    4
}

fn default_initiator_pool_size() -> usize {
    1
}

fn default_unmated_fraction() -> f64 {
    0.5
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            initiator_pool_size: default_initiator_pool_size(),
            initiative: MatingInitiative::default(),
            unmated_fraction: default_unmated_fraction(),
        }
    }
}

impl BreedingConfig {
    pub fn new(pool_size: usize) -> Self {
        Self {
            pool_size,
            ..Self::default()
        }
    }

    pub fn with_initiative(mut self, initiative: MatingInitiative) -> Self {
        self.initiative = initiative;
        self
    }

    /// Number of females that stay out of the mating pool when `females`
    /// are available.
    pub fn unmated_count(&self, females: usize) -> usize {
        (females as f64 * self.unmated_fraction).floor() as usize
    }

    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.pool_size == 0 {
            return Err(BuilderError::InvalidParameter(
                "pool_size must be at least 1".into(),
            ));
        }
        if self.initiator_pool_size == 0 {
            return Err(BuilderError::InvalidParameter(
                "initiator_pool_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.unmated_fraction) {
            return Err(BuilderError::InvalidParameter(format!(
                "unmated_fraction must be between 0.0 and 1.0, got {}",
                self.unmated_fraction
            )));
        }
        Ok(())
    }
}

/// Everything the cycle scheduler needs for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub breeding: BreedingConfig,
    pub culling: CullingPolicy,
    /// Hard upper bound on the number of cycles
    pub max_cycles: usize,
    /// Cycles still run once the minority lineage has no males left
    pub extra_cycles: usize,
    /// Optional RNG seed for reproducibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn new(
        breeding: BreedingConfig,
        culling: CullingPolicy,
        max_cycles: usize,
        extra_cycles: usize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            breeding,
            culling,
            max_cycles,
            extra_cycles,
            seed,
        }
    }

    pub fn validate(&self) -> Result<(), BuilderError> {
        self.breeding.validate()?;
        if self.max_cycles == 0 {
            return Err(BuilderError::InvalidParameter(
                "max_cycles must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
