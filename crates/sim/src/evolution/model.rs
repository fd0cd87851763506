//! Genetic models plugging variant-specific behaviour into the engine.
//!
//! A `GeneticModel` supplies the three things that differ between the two
//! representations: how a chooser scores a candidate partner, how a child is
//! conceived, and whether the child is miscarried. Everything else (the
//! tournament, the breeding loop, culling, termination) is generic.

use crate::errors::{ReproductionError, SelectionError};
use crate::evolution::miscarriage::{ancestry_miscarriage, at_risk, carries_risk_allele};
use crate::evolution::reproduction::{blend_ancestry, child_sex, combine_genomes, paternal_lineage};
use crate::evolution::selection::{ancestry_distance, preference_match, snap_to_extreme};
use crate::genome::{ContinuousIndividual, DiploidIndividual, GenomeLayout, Individual};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Variant-specific mate scoring, reproduction and miscarriage.
pub trait GeneticModel {
    type Individual: Individual;

    /// Score `candidate` as a partner for `chooser`. Higher is better.
    ///
    /// Fails when the two cannot be compared at all.
    fn mate_score(
        &self,
        chooser: &Self::Individual,
        candidate: &Self::Individual,
    ) -> Result<f64, SelectionError>;

    /// Score a candidate against the model's neutral reference.
    ///
    /// Used for the initiating draw of a mating round. The default scores
    /// every candidate equally, which makes the draw uniform.
    fn reference_score(&self, _candidate: &Self::Individual) -> f64 {
        0.0
    }

    /// Conceive one child of `father` and `mother` in `cycle`.
    fn conceive<R: Rng + ?Sized>(
        &self,
        father: &Self::Individual,
        mother: &Self::Individual,
        cycle: usize,
        rng: &mut R,
    ) -> Result<Self::Individual, ReproductionError>;

    /// Decide whether a conceived `child` of `mother` is lost before birth.
    fn miscarries<R: Rng + ?Sized>(
        &self,
        child: &Self::Individual,
        mother: &Self::Individual,
        rng: &mut R,
    ) -> bool;
}

/// Blending model over a single ancestry scalar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContinuousModel {
    /// Snap the chooser's value to its nearer extreme before measuring
    /// distance.
    #[serde(default)]
    pub snap_to_extreme: bool,
    /// Ancestry value that initiating draws are measured against. `None`
    /// makes the initiating draw uniform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<f64>,
}

impl ContinuousModel {
    pub fn new(snap_to_extreme: bool) -> Self {
        Self {
            snap_to_extreme,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = Some(reference);
        self
    }

    fn query_value(&self, chooser: &ContinuousIndividual) -> f64 {
        if self.snap_to_extreme {
            snap_to_extreme(chooser.ancestry())
        } else {
            chooser.ancestry()
        }
    }
}

impl GeneticModel for ContinuousModel {
    type Individual = ContinuousIndividual;

    fn mate_score(
        &self,
        chooser: &ContinuousIndividual,
        candidate: &ContinuousIndividual,
    ) -> Result<f64, SelectionError> {
        Ok(-ancestry_distance(self.query_value(chooser), candidate.ancestry()))
    }

    fn reference_score(&self, candidate: &ContinuousIndividual) -> f64 {
        match self.reference {
            Some(reference) => -ancestry_distance(reference, candidate.ancestry()),
            None => 0.0,
        }
    }

    fn conceive<R: Rng + ?Sized>(
        &self,
        father: &ContinuousIndividual,
        mother: &ContinuousIndividual,
        _cycle: usize,
        rng: &mut R,
    ) -> Result<ContinuousIndividual, ReproductionError> {
        let lineage = paternal_lineage(father, mother)?;
        let sex = child_sex(lineage, rng);
        Ok(ContinuousIndividual::new(
            sex,
            blend_ancestry(father.ancestry(), mother.ancestry()),
        ))
    }

    fn miscarries<R: Rng + ?Sized>(
        &self,
        child: &ContinuousIndividual,
        mother: &ContinuousIndividual,
        rng: &mut R,
    ) -> bool {
        at_risk(child) && ancestry_miscarriage(mother.ancestry(), rng)
    }
}

/// Mendelian model over four blocks of diploid loci.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultiLocusModel {
    #[serde(default)]
    pub layout: GenomeLayout,
}

impl MultiLocusModel {
    pub fn new(layout: GenomeLayout) -> Self {
        Self { layout }
    }
}

impl GeneticModel for MultiLocusModel {
    type Individual = DiploidIndividual;

    /// The female's preference loci are always matched against the male's
    /// appearance loci, whichever of the two is choosing.
    fn mate_score(
        &self,
        chooser: &DiploidIndividual,
        candidate: &DiploidIndividual,
    ) -> Result<f64, SelectionError> {
        let (male, female) = if chooser.is_male() {
            (chooser, candidate)
        } else {
            (candidate, chooser)
        };
        let matched = preference_match(male.genome().appearance(), female.genome().preference())?;
        Ok(matched as f64)
    }

    fn conceive<R: Rng + ?Sized>(
        &self,
        father: &DiploidIndividual,
        mother: &DiploidIndividual,
        cycle: usize,
        rng: &mut R,
    ) -> Result<DiploidIndividual, ReproductionError> {
        let lineage = paternal_lineage(father, mother)?;
        let sex = child_sex(lineage, rng);
        let genome = combine_genomes(father.genome(), mother.genome(), rng)?;
        Ok(DiploidIndividual::new(sex, genome, Some(cycle)))
    }

    fn miscarries<R: Rng + ?Sized>(
        &self,
        child: &DiploidIndividual,
        _mother: &DiploidIndividual,
        _rng: &mut R,
    ) -> bool {
        at_risk(child) && carries_risk_allele(child.genome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{Lineage, Locus, LocusGenome, Sex, TraitBlock};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn continuous(sex: Sex, ancestry: f64) -> ContinuousIndividual {
        ContinuousIndividual::new(sex, ancestry)
    }

    #[test]
    fn test_continuous_score_prefers_closer() {
        let model = ContinuousModel::default();
        let female = continuous(Sex::Female, 0.8);
        let near = continuous(Sex::Male(Lineage::Majority), 0.7);
        let far = continuous(Sex::Male(Lineage::Minority), 0.1);
        let near_score = model.mate_score(&female, &near).unwrap();
        assert!(near_score > model.mate_score(&female, &far).unwrap());
    }

    #[test]
    fn test_continuous_snap_changes_preference() {
        let female = continuous(Sex::Female, 0.6);
        let exact = continuous(Sex::Male(Lineage::Majority), 0.6);
        let extreme = continuous(Sex::Male(Lineage::Majority), 1.0);

        let plain = ContinuousModel::new(false);
        let score = |model: ContinuousModel, male: &ContinuousIndividual| {
            model.mate_score(&female, male).unwrap()
        };
        assert!(score(plain, &exact) > score(plain, &extreme));

        let snapping = ContinuousModel::new(true);
        assert!(score(snapping, &extreme) > score(snapping, &exact));
    }

    #[test]
    fn test_continuous_reference_score() {
        let candidate = continuous(Sex::Male(Lineage::Majority), 0.25);
        assert_eq!(ContinuousModel::default().reference_score(&candidate), 0.0);
        let model = ContinuousModel::default().with_reference(0.5);
        assert_eq!(model.reference_score(&candidate), -0.25);
    }

    #[test]
    fn test_continuous_child_inherits_paternal_lineage() {
        let model = ContinuousModel::default();
        let mut rng = StdRng::seed_from_u64(21);
        let father = continuous(Sex::Male(Lineage::Minority), 0.0);
        let mother = continuous(Sex::Female, 1.0);

        let mut sons = 0;
        for cycle in 0..500 {
            let child = model.conceive(&father, &mother, cycle, &mut rng).unwrap();
            assert_eq!(child.ancestry(), 0.5);
            if child.is_male() {
                sons += 1;
                assert_eq!(child.lineage(), Some(Lineage::Minority));
            } else {
                assert_eq!(child.lineage(), None);
            }
        }
        assert!(sons > 0 && sons < 500);
    }

    #[test]
    fn test_continuous_conceive_rejects_swapped_pair() {
        let model = ContinuousModel::default();
        let mut rng = StdRng::seed_from_u64(0);
        let father = continuous(Sex::Male(Lineage::Majority), 1.0);
        let mother = continuous(Sex::Female, 1.0);
        assert_eq!(
            model.conceive(&mother, &father, 0, &mut rng),
            Err(ReproductionError::InvalidPair)
        );
    }

    #[test]
    fn test_continuous_miscarriage_rule() {
        let model = ContinuousModel::default();
        let mut rng = StdRng::seed_from_u64(8);
        let minority_son = continuous(Sex::Male(Lineage::Minority), 0.5);
        let majority_son = continuous(Sex::Male(Lineage::Majority), 0.5);
        let daughter = continuous(Sex::Female, 0.5);
        let majority_mother = continuous(Sex::Female, 1.0);
        let minority_mother = continuous(Sex::Female, 0.0);

        for _ in 0..1000 {
            assert!(model.miscarries(&minority_son, &majority_mother, &mut rng));
            assert!(!model.miscarries(&minority_son, &minority_mother, &mut rng));
            assert!(!model.miscarries(&majority_son, &majority_mother, &mut rng));
            assert!(!model.miscarries(&daughter, &majority_mother, &mut rng));
        }
    }

    fn diploid(sex: Sex, allele: bool, layout: &GenomeLayout) -> DiploidIndividual {
        DiploidIndividual::new(sex, LocusGenome::homozygous(layout, allele), None)
    }

    #[test]
    fn test_multi_locus_score_uses_female_preference() {
        let layout = GenomeLayout::uniform(10);
        let model = MultiLocusModel::new(layout);
        let female = diploid(Sex::Female, true, &layout);
        let matching = diploid(Sex::Male(Lineage::Majority), true, &layout);
        let opposite = diploid(Sex::Male(Lineage::Minority), false, &layout);

        assert_eq!(model.mate_score(&female, &matching), Ok(20.0));
        assert_eq!(model.mate_score(&female, &opposite), Ok(0.0));
        // Symmetric in who is choosing
        assert_eq!(model.mate_score(&matching, &female), Ok(20.0));
        assert_eq!(model.reference_score(&matching), model.reference_score(&opposite));
    }

    #[test]
    fn test_multi_locus_score_rejects_unaligned_blocks() {
        let model = MultiLocusModel::default();
        let male = diploid(Sex::Male(Lineage::Majority), true, &GenomeLayout::uniform(3));
        let female = diploid(Sex::Female, true, &GenomeLayout::uniform(5));

        let expected = Err(SelectionError::TraitLengthMismatch {
            appearance: 3,
            preference: 5,
        });
        assert_eq!(model.mate_score(&female, &male), expected);
        assert_eq!(model.mate_score(&male, &female), expected);
    }

    #[test]
    fn test_multi_locus_child_alleles_from_each_parent() {
        let layout = GenomeLayout::uniform(20);
        let model = MultiLocusModel::new(layout);
        let mut rng = StdRng::seed_from_u64(33);

        // Distinct allele per parent so provenance is visible
        let father = diploid(Sex::Male(Lineage::Minority), false, &layout);
        let mother = diploid(Sex::Female, true, &layout);

        for _ in 0..50 {
            let child = model.conceive(&father, &mother, 7, &mut rng).unwrap();
            assert_eq!(child.birth_cycle(), Some(7));
            for block in TraitBlock::ALL {
                for locus in child.genome().block(block) {
                    assert_eq!(*locus, Locus::new(false, true));
                }
            }
            if child.is_male() {
                assert_eq!(child.lineage(), Some(Lineage::Minority));
            }
        }
    }

    #[test]
    fn test_multi_locus_miscarriage_is_deterministic() {
        let layout = GenomeLayout::uniform(5);
        let model = MultiLocusModel::new(layout);
        let mut rng = StdRng::seed_from_u64(0);
        let mother = diploid(Sex::Female, false, &layout);

        let clean_son = diploid(Sex::Male(Lineage::Minority), false, &layout);
        let risky_son = diploid(Sex::Male(Lineage::Minority), true, &layout);
        let risky_majority_son = diploid(Sex::Male(Lineage::Majority), true, &layout);
        let risky_daughter = diploid(Sex::Female, true, &layout);

        assert!(!model.miscarries(&clean_son, &mother, &mut rng));
        assert!(model.miscarries(&risky_son, &mother, &mut rng));
        assert!(!model.miscarries(&risky_majority_son, &mother, &mut rng));
        assert!(!model.miscarries(&risky_daughter, &mother, &mut rng));
    }
}
