use rand::Rng;
use serde::{Deserialize, Serialize};

/// The Y-linked ancestral line a male descends from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lineage {
    /// The lineage the population is being assimilated into.
    Majority,
    /// The tracked lineage whose Y-marker may disappear.
    Minority,
}

/// Biological sex of an individual.
///
/// The Y lineage is carried inside the `Male` variant, so a female can never
/// hold a lineage tag and a male always holds exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male(Lineage),
}

impl Sex {
    /// Flip a fair coin for the sex of a child of a father carrying `lineage`.
    pub fn random<R: Rng + ?Sized>(lineage: Lineage, rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Sex::Male(lineage)
        } else {
            Sex::Female
        }
    }

    #[inline]
    pub fn is_male(&self) -> bool {
        matches!(self, Sex::Male(_))
    }

    #[inline]
    pub fn is_female(&self) -> bool {
        matches!(self, Sex::Female)
    }

    /// The Y lineage, if this is a male.
    #[inline]
    pub fn lineage(&self) -> Option<Lineage> {
        match self {
            Sex::Male(lineage) => Some(*lineage),
            Sex::Female => None,
        }
    }
}
