//! Lineage-conditioned miscarriage.
//!
//! Only a male child carrying the minority Y lineage is ever at risk. Female
//! children and majority-lineage sons always survive the check.
//!
//! - **Continuous model**: probabilistic. A uniform draw in `[0, 1)` below the
//!   mother's ancestry value means the pregnancy is lost. Miscarriage-causing
//!   genes are treated as spread evenly over the genome, so the risk is linear
//!   in the mother's majority ancestry: certain at `1.0`, impossible at `0.0`.
//! - **Multi-locus model**: deterministic. The child is lost if any allele in
//!   its miscarriage-risk block is a risk allele (single dominant allele).

use crate::genome::{Individual, LocusGenome};
use rand::Rng;

/// Whether `child` is exposed to the miscarriage rule at all.
#[inline]
pub fn at_risk<I: Individual>(child: &I) -> bool {
    child.carries_minority_lineage()
}

/// Probabilistic loss given the mother's ancestry value.
#[inline]
pub fn ancestry_miscarriage<R: Rng + ?Sized>(mother_ancestry: f64, rng: &mut R) -> bool {
    rng.random::<f64>() < mother_ancestry
}

/// Deterministic loss: any risk allele in the miscarriage-risk block.
#[inline]
pub fn carries_risk_allele(genome: &LocusGenome) -> bool {
    genome.miscarriage_risk().iter().any(|locus| locus.contains(true))
}
