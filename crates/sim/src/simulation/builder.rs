//! Builder pattern for creating run configurations.
//!
//! Provides a fluent API with sensible defaults and validation on `build()`.

pub use crate::errors::BuilderError;
use crate::evolution::{ContinuousModel, CullingPolicy, MultiLocusModel};
use crate::genome::GenomeLayout;
use crate::simulation::configs::{Configuration, VariantConfig};
use crate::simulation::parameters::{BreedingConfig, MatingInitiative, SimulationConfig};

/// Builder for constructing a `Configuration` with a fluent API.
///
/// # Examples
///
/// ```
/// use assimil_sim::simulation::SimulationBuilder;
///
/// let config = SimulationBuilder::new()
///     .continuous(1000)
///     .pool_size(4)
///     .max_cycles(400)
///     .extra_cycles(40)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.pool_size(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    // Required parameters
    variant: Option<VariantConfig>,
    max_cycles: Option<usize>,

    // Optional parameters
    breeding: BreedingConfig,
    culling: Option<CullingPolicy>, // Default: the variant's own policy
    extra_cycles: usize,            // Default: 0
    seed: Option<u64>,              // Default: None (random)
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_configuration(config: &Configuration) -> Self {
        Self {
            variant: Some(config.variant),
            max_cycles: Some(config.simulation.max_cycles),
            breeding: config.simulation.breeding,
            culling: Some(config.simulation.culling),
            extra_cycles: config.simulation.extra_cycles,
            seed: config.simulation.seed,
        }
    }

    pub fn variant(mut self, variant: VariantConfig) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Continuous variant with `founders_per_group` founders in each male
    /// lineage group and twice as many females.
    pub fn continuous(self, founders_per_group: usize) -> Self {
        self.variant(VariantConfig::Continuous {
            model: ContinuousModel::default(),
            founders_per_group,
        })
    }

    /// Multi-locus variant with `founder_quartets` founder quartets and the
    /// default genome layout.
    pub fn multi_locus(self, founder_quartets: usize) -> Self {
        self.variant(VariantConfig::MultiLocus {
            model: MultiLocusModel::default(),
            founder_quartets,
        })
    }

    /// Snap the chooser's ancestry to its nearer extreme (continuous only).
    pub fn snap_to_extreme(mut self, snap: bool) -> Self {
        if let Some(VariantConfig::Continuous { model, .. }) = &mut self.variant {
            model.snap_to_extreme = snap;
        }
        self
    }

    /// Ancestry value that initiating draws are scored against (continuous
    /// only).
    pub fn reference(mut self, reference: f64) -> Self {
        if let Some(VariantConfig::Continuous { model, .. }) = &mut self.variant {
            model.reference = Some(reference);
        }
        self
    }

    /// Loci per trait block (multi-locus only).
    pub fn genome_layout(mut self, layout: GenomeLayout) -> Self {
        if let Some(VariantConfig::MultiLocus { model, .. }) = &mut self.variant {
            model.layout = layout;
        }
        self
    }

    pub fn pool_size(mut self, pool_size: usize) -> Self {
        self.breeding.pool_size = pool_size;
        self
    }

    pub fn initiator_pool_size(mut self, pool_size: usize) -> Self {
        self.breeding.initiator_pool_size = pool_size;
        self
    }

    pub fn initiative(mut self, initiative: MatingInitiative) -> Self {
        self.breeding.initiative = initiative;
        self
    }

    pub fn unmated_fraction(mut self, fraction: f64) -> Self {
        self.breeding.unmated_fraction = fraction;
        self
    }

    pub fn culling(mut self, culling: CullingPolicy) -> Self {
        self.culling = Some(culling);
        self
    }

    /// Set the maximum number of cycles to run (required).
    pub fn max_cycles(mut self, max_cycles: usize) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn extra_cycles(mut self, extra_cycles: usize) -> Self {
        self.extra_cycles = extra_cycles;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the collected parameters and build the configuration.
    pub fn build(self) -> Result<Configuration, BuilderError> {
        let variant = self
            .variant
            .ok_or(BuilderError::MissingRequired("variant"))?;
        let max_cycles = self
            .max_cycles
            .ok_or(BuilderError::MissingRequired("max_cycles"))?;

        let config = Configuration {
            variant,
            simulation: SimulationConfig::new(
                self.breeding,
                self.culling.unwrap_or_else(|| variant.default_culling()),
                max_cycles,
                self.extra_cycles,
                self.seed,
            ),
        };
        config.validate()?;
        Ok(config)
    }
}
