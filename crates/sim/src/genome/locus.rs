use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single diploid locus: two boolean alleles.
///
/// `true` is the majority-lineage allele. Inside the miscarriage-risk block
/// it is also the risk allele.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locus {
    first: bool,
    second: bool,
}

impl Locus {
    #[inline]
    pub const fn new(first: bool, second: bool) -> Self {
        Self { first, second }
    }

    /// Both alleles set to `allele`.
    #[inline]
    pub const fn homozygous(allele: bool) -> Self {
        Self::new(allele, allele)
    }

    #[inline]
    pub fn alleles(&self) -> (bool, bool) {
        (self.first, self.second)
    }

    /// Number of `true` alleles (0, 1 or 2).
    #[inline]
    pub fn allele_count(&self) -> u8 {
        self.first as u8 + self.second as u8
    }

    /// Draw one of the two alleles uniformly at random.
    #[inline]
    pub fn gamete<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        if rng.random_bool(0.5) {
            self.first
        } else {
            self.second
        }
    }

    /// Whether `allele` is one of the two alleles held here.
    #[inline]
    pub fn contains(&self, allele: bool) -> bool {
        self.first == allele || self.second == allele
    }
}

/// Total number of `true` alleles in a block of loci.
pub fn count_alleles(loci: &[Locus]) -> usize {
    loci.iter().map(|locus| locus.allele_count() as usize).sum()
}
