use crate::args::{ScenarioArgs, VariantArg};
use anyhow::{bail, Context, Result};
use assimil_sim::simulation::{Configuration, SimulationBuilder, VariantConfig};

/// Preset configuration for a variant.
pub fn default_configuration(variant: VariantArg) -> Configuration {
    match variant {
        VariantArg::Continuous => Configuration::continuous(),
        VariantArg::MultiLocus => Configuration::multi_locus(),
    }
}

/// Start from the configuration file (or the variant preset) and apply the
/// command line overrides on top.
pub fn scenario_builder(scenario: &ScenarioArgs) -> Result<SimulationBuilder> {
    let config = match &scenario.config {
        Some(path) => Configuration::from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => default_configuration(scenario.variant),
    };
    if scenario.snap && matches!(config.variant, VariantConfig::MultiLocus { .. }) {
        bail!("--snap only applies to the continuous variant");
    }

    let mut builder = SimulationBuilder::from_configuration(&config);
    if let Some(max_cycles) = scenario.max_cycles {
        builder = builder.max_cycles(max_cycles);
    }
    if let Some(extra_cycles) = scenario.extra_cycles {
        builder = builder.extra_cycles(extra_cycles);
    }
    if let Some(initiative) = scenario.initiative {
        builder = builder.initiative(initiative.into());
    }
    if scenario.snap {
        builder = builder.snap_to_extreme(true);
    }
    Ok(builder)
}
