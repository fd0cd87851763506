//! Founder populations.
//!
//! Both presets start from an even split between the two lineages, with
//! every founder carrying the pure trait value of its lineage.

use crate::genome::{ContinuousIndividual, DiploidIndividual, GenomeLayout, Lineage, Sex};
use crate::simulation::population::{FlatPopulation, LineagePopulation};

/// Continuous founders: `per_group` majority males at `1.0`, `per_group`
/// minority males at `0.0` and `2 * per_group` females alternating between
/// `1.0` and `0.0`.
pub fn continuous_founders(per_group: usize) -> LineagePopulation<ContinuousIndividual> {
    let majority = (0..per_group)
        .map(|_| ContinuousIndividual::new(Sex::Male(Lineage::Majority), 1.0));
    let minority = (0..per_group)
        .map(|_| ContinuousIndividual::new(Sex::Male(Lineage::Minority), 0.0));
    let females = (0..2 * per_group).map(|i| {
        let ancestry = if i % 2 == 0 { 1.0 } else { 0.0 };
        ContinuousIndividual::new(Sex::Female, ancestry)
    });

    majority.chain(minority).chain(females).collect()
}

/// Multi-locus founders: `quartets` repetitions of a majority male, a
/// minority female, a minority male and a majority female, each homozygous
/// for its lineage's allele at every locus.
pub fn multi_locus_founders(
    quartets: usize,
    layout: &GenomeLayout,
) -> FlatPopulation<DiploidIndividual> {
    let quartet = [
        (Sex::Male(Lineage::Majority), Lineage::Majority),
        (Sex::Female, Lineage::Minority),
        (Sex::Male(Lineage::Minority), Lineage::Minority),
        (Sex::Female, Lineage::Majority),
    ];

    (0..quartets)
        .flat_map(|_| quartet)
        .map(|(sex, lineage)| DiploidIndividual::founder(sex, lineage, layout))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{Individual, TraitBlock};
    use crate::simulation::population::{Group, Population};

    #[test]
    fn test_continuous_founders_layout() {
        let population = continuous_founders(1000);
        assert_eq!(population.count(Group::MajorityMales), 1000);
        assert_eq!(population.count(Group::MinorityMales), 1000);
        assert_eq!(population.count(Group::Females), 2000);

        assert!(population.majority_males().iter().all(|m| m.ancestry() == 1.0));
        assert!(population.minority_males().iter().all(|m| m.ancestry() == 0.0));

        let pure_majority = population
            .females()
            .iter()
            .filter(|f| f.ancestry() == 1.0)
            .count();
        assert_eq!(pure_majority, 1000);
        assert_eq!(population.females()[0].ancestry(), 1.0);
        assert_eq!(population.females()[1].ancestry(), 0.0);
    }

    #[test]
    fn test_continuous_founders_empty() {
        assert!(continuous_founders(0).is_empty());
    }

    #[test]
    fn test_multi_locus_founders_quartets() {
        let layout = GenomeLayout::uniform(20);
        let population = multi_locus_founders(200, &layout);

        assert_eq!(population.len(), 800);
        assert_eq!(population.count(Group::MajorityMales), 200);
        assert_eq!(population.count(Group::MinorityMales), 200);
        assert_eq!(population.count(Group::Females), 400);

        let first = &population.individuals()[..4];
        assert_eq!(first[0].sex(), Sex::Male(Lineage::Majority));
        assert_eq!(first[0].genome().allele_count(TraitBlock::Appearance), 40);
        assert_eq!(first[1].sex(), Sex::Female);
        assert_eq!(first[1].genome().allele_count(TraitBlock::Appearance), 0);
        assert_eq!(first[2].sex(), Sex::Male(Lineage::Minority));
        assert_eq!(first[2].genome().allele_count(TraitBlock::MiscarriageRisk), 0);
        assert_eq!(first[3].genome().allele_count(TraitBlock::Preference), 40);
        assert!(population.individuals().iter().all(|i| i.birth_cycle().is_none()));
    }
}
