//! Master run configuration.
//!
//! A `Configuration` fully describes a run: which variant to simulate, how
//! its founders are laid out and every scheduler parameter. It round-trips
//! through JSON so a run can be reproduced from a file.

use crate::errors::{BuilderError, ConfigError, SimulationError};
use crate::evolution::{ContinuousModel, CullingPolicy, MultiLocusModel};
use crate::simulation::engine::run_configuration;
use crate::simulation::parameters::{BreedingConfig, SimulationConfig};
use crate::simulation::summary::RunSummary;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Founders per lineage group in the continuous preset.
pub const DEFAULT_FOUNDERS_PER_GROUP: usize = 1000;
/// Founder quartets in the multi-locus preset.
pub const DEFAULT_FOUNDER_QUARTETS: usize = 200;
pub const DEFAULT_MAX_CYCLES: usize = 400;
pub const DEFAULT_EXTRA_CYCLES: usize = 40;

/// The model variant together with its founder layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariantConfig {
    Continuous {
        #[serde(default)]
        model: ContinuousModel,
        founders_per_group: usize,
    },
    MultiLocus {
        #[serde(default)]
        model: MultiLocusModel,
        founder_quartets: usize,
    },
}

impl VariantConfig {
    pub fn name(&self) -> &'static str {
        match self {
            VariantConfig::Continuous { .. } => "continuous",
            VariantConfig::MultiLocus { .. } => "multi-locus",
        }
    }

    /// Culling policy used when none is given explicitly.
    pub fn default_culling(&self) -> CullingPolicy {
        match self {
            VariantConfig::Continuous { .. } => CullingPolicy::oldest_first(10_000, 10_000, 10),
            VariantConfig::MultiLocus { .. } => CullingPolicy::random_total(2000, 0),
        }
    }

    pub fn validate(&self) -> Result<(), BuilderError> {
        match self {
            VariantConfig::Continuous { model, .. } => {
                if let Some(reference) = model.reference {
                    if !(0.0..=1.0).contains(&reference) {
                        return Err(BuilderError::InvalidParameter(format!(
                            "reference ancestry must be between 0.0 and 1.0, got {reference}"
                        )));
                    }
                }
            }
            VariantConfig::MultiLocus { model, .. } => {
                let layout = model.layout;
                // Appearance is scored locus by locus against preference
                if layout.appearance != layout.preference {
                    return Err(BuilderError::InvalidParameter(format!(
                        "appearance ({}) and preference ({}) loci must match in number",
                        layout.appearance, layout.preference
                    )));
                }
            }
        }
        Ok(())
    }
}

/// The master configuration struct.
/// Can be deserialized from a file to fully reproduce a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub variant: VariantConfig,
    pub simulation: SimulationConfig,
}

impl Configuration {
    /// Continuous preset: 1000 founders per group, oldest-first culling.
    pub fn continuous() -> Self {
        Self::preset(VariantConfig::Continuous {
            model: ContinuousModel::default(),
            founders_per_group: DEFAULT_FOUNDERS_PER_GROUP,
        })
    }

    /// Multi-locus preset: 200 founder quartets, uniform-random culling.
    pub fn multi_locus() -> Self {
        Self::preset(VariantConfig::MultiLocus {
            model: MultiLocusModel::default(),
            founder_quartets: DEFAULT_FOUNDER_QUARTETS,
        })
    }

    fn preset(variant: VariantConfig) -> Self {
        Self {
            simulation: SimulationConfig::new(
                BreedingConfig::default(),
                variant.default_culling(),
                DEFAULT_MAX_CYCLES,
                DEFAULT_EXTRA_CYCLES,
                None,
            ),
            variant,
        }
    }

    pub fn pool_size(&self) -> usize {
        self.simulation.breeding.pool_size
    }

    pub fn validate(&self) -> Result<(), BuilderError> {
        self.variant.validate()?;
        self.simulation.validate()
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Run the configured simulation to completion.
    pub fn run(&self) -> Result<RunSummary, SimulationError> {
        run_configuration(self)
    }
}
