use crate::args::FormatArg;
use anyhow::Result;
use assimil_sim::evolution::{Capacity, CullingPolicy};
use assimil_sim::simulation::{Configuration, MatingInitiative, RunSummary, VariantConfig};

/// Describe a configuration on stderr so stdout stays machine readable.
pub fn print_parameters(config: &Configuration) {
    let simulation = &config.simulation;
    let breeding = &simulation.breeding;

    eprintln!("\n📋 Run Configuration");
    match config.variant {
        VariantConfig::Continuous {
            model,
            founders_per_group,
        } => {
            eprintln!("  • Variant: continuous [--variant]");
            eprintln!(
                "  • Founders: {founders_per_group} per male lineage, {} females",
                2 * founders_per_group
            );
            eprintln!("  • Snap to extreme: {} [--snap]", model.snap_to_extreme);
            if let Some(reference) = model.reference {
                eprintln!("  • Reference ancestry: {reference}");
            }
        }
        VariantConfig::MultiLocus {
            model,
            founder_quartets,
        } => {
            eprintln!("  • Variant: multi-locus [--variant]");
            eprintln!("  • Founders: {founder_quartets} quartets");
            eprintln!(
                "  • Loci per block: appearance {}, preference {}, miscarriage {}, other {}",
                model.layout.appearance,
                model.layout.preference,
                model.layout.miscarriage_risk,
                model.layout.other
            );
        }
    }
    eprintln!("  • Max Cycles: {} [--max-cycles]", simulation.max_cycles);
    eprintln!("  • Extra Cycles: {} [--extra-cycles]", simulation.extra_cycles);
    match simulation.seed {
        Some(seed) => eprintln!("  • Random Seed: {seed} [--seed]"),
        None => eprintln!("  • Random Seed: Random [--seed]"),
    }

    eprintln!("\n💞 Mating");
    eprintln!("  • Pool Size: {} [--pool-size]", breeding.pool_size);
    let initiative = match breeding.initiative {
        MatingInitiative::MaleInitiated => "male-initiated",
        MatingInitiative::FemaleChoice => "female choice",
    };
    eprintln!("  • Initiative: {initiative} [--initiative]");
    eprintln!("  • Unmated Fraction: {:.2}", breeding.unmated_fraction);

    eprintln!("\n💀 Culling");
    match simulation.culling {
        CullingPolicy::OldestFirst {
            male_capacity,
            female_capacity,
            forced_deaths,
        } => {
            eprintln!("  • Policy: oldest first");
            eprintln!("  • Capacity: {male_capacity} males, {female_capacity} females");
            eprintln!("  • Forced Deaths: {forced_deaths} per group");
        }
        CullingPolicy::Random {
            capacity,
            forced_deaths,
        } => {
            eprintln!("  • Policy: uniform random");
            match capacity {
                Capacity::Total(total) => eprintln!("  • Capacity: {total} total"),
                Capacity::BySex { males, females } => {
                    eprintln!("  • Capacity: {males} males, {females} females")
                }
            }
            eprintln!("  • Forced Deaths: {forced_deaths}");
        }
    }
    eprintln!();
}

/// Print summary records to stdout.
pub fn print_summaries(summaries: &[RunSummary], format: FormatArg) -> Result<()> {
    match format {
        FormatArg::Tsv => {
            if let Some(first) = summaries.first() {
                println!("{}", first.header());
            }
            for summary in summaries {
                println!("{summary}");
            }
        }
        FormatArg::Json => {
            for summary in summaries {
                println!("{}", serde_json::to_string(summary)?);
            }
        }
    }
    Ok(())
}
