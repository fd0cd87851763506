use crate::genome::locus::{count_alleles, Locus};
use crate::genome::{Lineage, Sex};
use serde::{Deserialize, Serialize};

/// Capability set shared by both representations of an individual.
///
/// Mate selection, culling, scheduling and population containers only need
/// to know an individual's sex and Y lineage, so they are written once
/// against this trait.
pub trait Individual: Clone + std::fmt::Debug {
    /// Sex (and, for males, Y lineage) fixed at creation.
    fn sex(&self) -> Sex;

    #[inline]
    fn is_male(&self) -> bool {
        self.sex().is_male()
    }

    #[inline]
    fn is_female(&self) -> bool {
        self.sex().is_female()
    }

    /// Y lineage tag. `None` for females.
    #[inline]
    fn lineage(&self) -> Option<Lineage> {
        self.sex().lineage()
    }

    /// True iff this is a male carrying the minority Y-marker.
    #[inline]
    fn carries_minority_lineage(&self) -> bool {
        self.lineage() == Some(Lineage::Minority)
    }
}

/// An individual whose heritable state is a single ancestry scalar.
///
/// `0.0` is pure minority ancestry and `1.0` pure majority ancestry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousIndividual {
    sex: Sex,
    ancestry: f64,
}

impl ContinuousIndividual {
    /// Create an individual. The ancestry value is clamped into `[0, 1]`.
    pub fn new(sex: Sex, ancestry: f64) -> Self {
        Self {
            sex,
            ancestry: ancestry.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn ancestry(&self) -> f64 {
        self.ancestry
    }
}

impl Individual for ContinuousIndividual {
    #[inline]
    fn sex(&self) -> Sex {
        self.sex
    }
}

/// Identifies one of the four independent trait blocks of a `LocusGenome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitBlock {
    Appearance,
    Preference,
    MiscarriageRisk,
    Other,
}

impl TraitBlock {
    pub const ALL: [TraitBlock; 4] = [
        TraitBlock::Appearance,
        TraitBlock::Preference,
        TraitBlock::MiscarriageRisk,
        TraitBlock::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TraitBlock::Appearance => "appearance",
            TraitBlock::Preference => "preference",
            TraitBlock::MiscarriageRisk => "miscarriage_risk",
            TraitBlock::Other => "other",
        }
    }
}

/// Number of loci in each trait block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeLayout {
    pub appearance: usize,
    pub preference: usize,
    pub miscarriage_risk: usize,
    pub other: usize,
}

impl GenomeLayout {
    /// Same number of loci in every block.
    pub fn uniform(loci_per_block: usize) -> Self {
        Self {
            appearance: loci_per_block,
            preference: loci_per_block,
            miscarriage_risk: loci_per_block,
            other: loci_per_block,
        }
    }

    pub fn len(&self, block: TraitBlock) -> usize {
        match block {
            TraitBlock::Appearance => self.appearance,
            TraitBlock::Preference => self.preference,
            TraitBlock::MiscarriageRisk => self.miscarriage_risk,
            TraitBlock::Other => self.other,
        }
    }
}

impl Default for GenomeLayout {
    fn default() -> Self {
        Self::uniform(20)
    }
}

/// Four positionally aligned blocks of diploid loci.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocusGenome {
    appearance: Vec<Locus>,
    preference: Vec<Locus>,
    miscarriage_risk: Vec<Locus>,
    other: Vec<Locus>,
}

impl LocusGenome {
    pub fn new(
        appearance: Vec<Locus>,
        preference: Vec<Locus>,
        miscarriage_risk: Vec<Locus>,
        other: Vec<Locus>,
    ) -> Self {
        Self {
            appearance,
            preference,
            miscarriage_risk,
            other,
        }
    }

    /// A genome homozygous for `allele` at every locus.
    pub fn homozygous(layout: &GenomeLayout, allele: bool) -> Self {
        let block = |n: usize| vec![Locus::homozygous(allele); n];
        Self::new(
            block(layout.appearance),
            block(layout.preference),
            block(layout.miscarriage_risk),
            block(layout.other),
        )
    }

    pub fn block(&self, block: TraitBlock) -> &[Locus] {
        match block {
            TraitBlock::Appearance => &self.appearance,
            TraitBlock::Preference => &self.preference,
            TraitBlock::MiscarriageRisk => &self.miscarriage_risk,
            TraitBlock::Other => &self.other,
        }
    }

    #[inline]
    pub fn appearance(&self) -> &[Locus] {
        &self.appearance
    }

    #[inline]
    pub fn preference(&self) -> &[Locus] {
        &self.preference
    }

    #[inline]
    pub fn miscarriage_risk(&self) -> &[Locus] {
        &self.miscarriage_risk
    }

    #[inline]
    pub fn other(&self) -> &[Locus] {
        &self.other
    }

    /// Number of `true` alleles in `block`.
    pub fn allele_count(&self, block: TraitBlock) -> usize {
        count_alleles(self.block(block))
    }

    pub fn layout(&self) -> GenomeLayout {
        GenomeLayout {
            appearance: self.appearance.len(),
            preference: self.preference.len(),
            miscarriage_risk: self.miscarriage_risk.len(),
            other: self.other.len(),
        }
    }
}

/// An individual carrying a multi-locus diploid genome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiploidIndividual {
    sex: Sex,
    genome: LocusGenome,
    /// Cycle in which the individual was born. `None` for founders.
    birth_cycle: Option<usize>,
}

impl DiploidIndividual {
    pub fn new(sex: Sex, genome: LocusGenome, birth_cycle: Option<usize>) -> Self {
        Self {
            sex,
            genome,
            birth_cycle,
        }
    }

    /// A founder homozygous for its lineage's allele everywhere: `true` for
    /// majority founders, `false` for minority founders.
    pub fn founder(sex: Sex, lineage: Lineage, layout: &GenomeLayout) -> Self {
        let allele = lineage == Lineage::Majority;
        Self::new(sex, LocusGenome::homozygous(layout, allele), None)
    }

    #[inline]
    pub fn genome(&self) -> &LocusGenome {
        &self.genome
    }

    #[inline]
    pub fn birth_cycle(&self) -> Option<usize> {
        self.birth_cycle
    }
}

impl Individual for DiploidIndividual {
    #[inline]
    fn sex(&self) -> Sex {
        self.sex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_individual_clamps() {
        let ind = ContinuousIndividual::new(Sex::Female, 1.5);
        assert_eq!(ind.ancestry(), 1.0);
        let ind = ContinuousIndividual::new(Sex::Female, -0.2);
        assert_eq!(ind.ancestry(), 0.0);
    }

    #[test]
    fn test_individual_lineage_accessors() {
        let minority = ContinuousIndividual::new(Sex::Male(Lineage::Minority), 0.0);
        let majority = ContinuousIndividual::new(Sex::Male(Lineage::Majority), 1.0);
        let female = ContinuousIndividual::new(Sex::Female, 0.0);

        assert!(minority.carries_minority_lineage());
        assert!(!majority.carries_minority_lineage());
        assert!(!female.carries_minority_lineage());
        assert_eq!(female.lineage(), None);
        assert!(female.is_female());
        assert!(majority.is_male());
    }

    #[test]
    fn test_layout_uniform() {
        let layout = GenomeLayout::uniform(5);
        for block in TraitBlock::ALL {
            assert_eq!(layout.len(block), 5);
        }
        assert_eq!(GenomeLayout::default(), GenomeLayout::uniform(20));
    }

    #[test]
    fn test_homozygous_genome_counts() {
        let layout = GenomeLayout {
            appearance: 3,
            preference: 3,
            miscarriage_risk: 2,
            other: 4,
        };
        let genome = LocusGenome::homozygous(&layout, true);
        assert_eq!(genome.allele_count(TraitBlock::Appearance), 6);
        assert_eq!(genome.allele_count(TraitBlock::MiscarriageRisk), 4);
        assert_eq!(genome.allele_count(TraitBlock::Other), 8);
        assert_eq!(genome.layout(), layout);

        let genome = LocusGenome::homozygous(&layout, false);
        assert_eq!(genome.allele_count(TraitBlock::Preference), 0);
    }

    #[test]
    fn test_founder_alleles_follow_lineage() {
        let layout = GenomeLayout::uniform(4);
        let majority =
            DiploidIndividual::founder(Sex::Male(Lineage::Majority), Lineage::Majority, &layout);
        let minority = DiploidIndividual::founder(Sex::Female, Lineage::Minority, &layout);

        assert_eq!(majority.genome().allele_count(TraitBlock::Appearance), 8);
        assert_eq!(minority.genome().allele_count(TraitBlock::Appearance), 0);
        assert_eq!(majority.birth_cycle(), None);
        assert!(minority.is_female());
    }
}
