//! Reproduction: combining two parents into one child.
//!
//! Sex is a fair coin independent of the parents, and a male child inherits
//! his father's Y lineage unchanged. Autosomal material is combined in one of
//! two ways:
//!
//! - **Blending** (continuous model): the child's ancestry is the mean of
//!   the parents' ancestry values.
//! - **Mendelian segregation** (multi-locus model): at every locus the child
//!   receives one allele drawn from the father's pair and one drawn
//!   independently from the mother's pair. Loci are unlinked.

pub use crate::errors::ReproductionError;
use crate::genome::{Individual, Lineage, Locus, LocusGenome, Sex, TraitBlock};
use rand::Rng;

/// Check that the pair is a male father and a female mother and return the
/// father's lineage.
pub fn paternal_lineage<I: Individual>(
    father: &I,
    mother: &I,
) -> Result<Lineage, ReproductionError> {
    match (father.lineage(), mother.is_female()) {
        (Some(lineage), true) => Ok(lineage),
        _ => Err(ReproductionError::InvalidPair),
    }
}

/// Draw the sex of a child of a father carrying `lineage`.
#[inline]
pub fn child_sex<R: Rng + ?Sized>(lineage: Lineage, rng: &mut R) -> Sex {
    Sex::random(lineage, rng)
}

/// Blending inheritance of a single ancestry scalar.
#[inline]
pub fn blend_ancestry(father: f64, mother: f64) -> f64 {
    (father + mother) * 0.5
}

/// Segregate one block of loci.
///
/// # Errors
/// `ReproductionError::LocusCountMismatch` if the blocks differ in length.
pub fn segregate<R: Rng + ?Sized>(
    block: TraitBlock,
    father: &[Locus],
    mother: &[Locus],
    rng: &mut R,
) -> Result<Vec<Locus>, ReproductionError> {
    if father.len() != mother.len() {
        return Err(ReproductionError::LocusCountMismatch {
            block: block.name(),
            father: father.len(),
            mother: mother.len(),
        });
    }

    Ok(father
        .iter()
        .zip(mother)
        .map(|(paternal, maternal)| Locus::new(paternal.gamete(rng), maternal.gamete(rng)))
        .collect())
}

/// Segregate every trait block of two genomes into a child genome.
///
/// The first allele of each child locus is paternal, the second maternal.
pub fn combine_genomes<R: Rng + ?Sized>(
    father: &LocusGenome,
    mother: &LocusGenome,
    rng: &mut R,
) -> Result<LocusGenome, ReproductionError> {
    let appearance = segregate(
        TraitBlock::Appearance,
        father.appearance(),
        mother.appearance(),
        rng,
    )?;
    let preference = segregate(
        TraitBlock::Preference,
        father.preference(),
        mother.preference(),
        rng,
    )?;
    let miscarriage_risk = segregate(
        TraitBlock::MiscarriageRisk,
        father.miscarriage_risk(),
        mother.miscarriage_risk(),
        rng,
    )?;
    let other = segregate(TraitBlock::Other, father.other(), mother.other(), rng)?;

    Ok(LocusGenome::new(appearance, preference, miscarriage_risk, other))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{ContinuousIndividual, GenomeLayout};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_blend_ancestry() {
        assert_eq!(blend_ancestry(1.0, 0.0), 0.5);
        assert_eq!(blend_ancestry(0.5, 0.0), 0.25);
        assert_eq!(blend_ancestry(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_paternal_lineage_requires_male_and_female() {
        let father = ContinuousIndividual::new(Sex::Male(Lineage::Minority), 0.0);
        let mother = ContinuousIndividual::new(Sex::Female, 1.0);
        assert_eq!(paternal_lineage(&father, &mother), Ok(Lineage::Minority));
        assert_eq!(
            paternal_lineage(&mother, &father),
            Err(ReproductionError::InvalidPair)
        );
        assert_eq!(
            paternal_lineage(&father, &father),
            Err(ReproductionError::InvalidPair)
        );
    }

    #[test]
    fn test_segregate_one_allele_from_each_parent() {
        let mut rng = StdRng::seed_from_u64(11);
        let father = vec![Locus::homozygous(true); 50];
        let mother = vec![Locus::homozygous(false); 50];

        let child = segregate(TraitBlock::Other, &father, &mother, &mut rng).unwrap();
        assert_eq!(child.len(), 50);
        for locus in child {
            assert_eq!(locus.alleles(), (true, false));
        }
    }

    #[test]
    fn test_segregate_heterozygous_parents() {
        let mut rng = StdRng::seed_from_u64(12);
        let father = vec![Locus::new(true, false); 200];
        let mother = vec![Locus::new(false, true); 200];

        let child = segregate(TraitBlock::Appearance, &father, &mother, &mut rng).unwrap();
        let mut counts = [0usize; 3];
        for locus in &child {
            counts[locus.allele_count() as usize] += 1;
        }
        // 1:2:1 expected; every class should show up
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn test_segregate_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(0);
        let father = vec![Locus::homozygous(true); 3];
        let mother = vec![Locus::homozygous(true); 2];
        let err = segregate(TraitBlock::Preference, &father, &mother, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ReproductionError::LocusCountMismatch {
                block: "preference",
                father: 3,
                mother: 2,
            }
        );
    }

    #[test]
    fn test_combine_genomes_keeps_layout() {
        let mut rng = StdRng::seed_from_u64(2);
        let layout = GenomeLayout {
            appearance: 4,
            preference: 4,
            miscarriage_risk: 3,
            other: 6,
        };
        let father = LocusGenome::homozygous(&layout, true);
        let mother = LocusGenome::homozygous(&layout, false);
        let child = combine_genomes(&father, &mother, &mut rng).unwrap();
        assert_eq!(child.layout(), layout);
        for block in TraitBlock::ALL {
            assert_eq!(child.allele_count(block), layout.len(block));
        }
    }

    #[test]
    fn test_combine_genomes_mismatch_names_block() {
        let mut rng = StdRng::seed_from_u64(2);
        let father = LocusGenome::homozygous(&GenomeLayout::uniform(4), true);
        let mut layout = GenomeLayout::uniform(4);
        layout.miscarriage_risk = 5;
        let mother = LocusGenome::homozygous(&layout, true);

        match combine_genomes(&father, &mother, &mut rng) {
            Err(ReproductionError::LocusCountMismatch { block, .. }) => {
                assert_eq!(block, "miscarriage_risk")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
