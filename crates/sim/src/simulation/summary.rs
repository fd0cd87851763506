//! End-of-run summary records.
//!
//! Each record renders as one tab-separated line through `Display`, with a
//! matching `header()`. Means over empty groups are reported as `0`.

use crate::genome::{ContinuousIndividual, DiploidIndividual, Individual, TraitBlock};
use crate::simulation::population::{Group, Population};
use serde::Serialize;
use std::fmt;

/// Size and mean ancestry of one group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GroupStats {
    pub count: usize,
    pub mean: f64,
}

impl GroupStats {
    fn from_members(members: &[&ContinuousIndividual]) -> Self {
        let count = members.len();
        let mean = if count == 0 {
            0.0
        } else {
            members.iter().map(|m| m.ancestry()).sum::<f64>() / count as f64
        };
        Self { count, mean }
    }
}

/// Summary of a continuous-variant run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContinuousSummary {
    pub pool_size: usize,
    pub cycles: usize,
    pub majority_males: GroupStats,
    pub minority_males: GroupStats,
    pub females: GroupStats,
}

impl ContinuousSummary {
    pub fn collect<P>(population: &P, pool_size: usize, cycles: usize) -> Self
    where
        P: Population<Member = ContinuousIndividual>,
    {
        let stats = |group| GroupStats::from_members(&population.members(group));
        Self {
            pool_size,
            cycles,
            majority_males: stats(Group::MajorityMales),
            minority_males: stats(Group::MinorityMales),
            females: stats(Group::Females),
        }
    }

    pub fn header() -> &'static str {
        concat!(
            "pool\tcycles\tmajority_males\tmajority_mean\t",
            "minority_males\tminority_mean\tfemales\tfemale_mean"
        )
    }
}

impl fmt::Display for ContinuousSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.pool_size,
            self.cycles,
            self.majority_males.count,
            self.majority_males.mean,
            self.minority_males.count,
            self.minority_males.mean,
            self.females.count,
            self.females.mean
        )
    }
}

/// Summary of a multi-locus run.
///
/// Trait means are the fraction of `true` alleles in a block, taken over
/// every allele slot of every individual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocusSummary {
    pub pool_size: usize,
    pub cycles: usize,
    pub total: usize,
    pub males: usize,
    pub minority_males: usize,
    pub mean_appearance: f64,
    pub mean_preference: f64,
    pub mean_miscarriage_risk: f64,
    pub mean_other: f64,
}

impl LocusSummary {
    pub fn collect<P>(population: &P, pool_size: usize, cycles: usize) -> Self
    where
        P: Population<Member = DiploidIndividual>,
    {
        let members = population.members(Group::All);
        let block_mean = |block: TraitBlock| {
            let slots: usize = members.iter().map(|m| 2 * m.genome().block(block).len()).sum();
            if slots == 0 {
                return 0.0;
            }
            let alleles: usize = members.iter().map(|m| m.genome().allele_count(block)).sum();
            alleles as f64 / slots as f64
        };

        Self {
            pool_size,
            cycles,
            total: members.len(),
            males: members.iter().filter(|m| m.is_male()).count(),
            minority_males: members
                .iter()
                .filter(|m| m.carries_minority_lineage())
                .count(),
            mean_appearance: block_mean(TraitBlock::Appearance),
            mean_preference: block_mean(TraitBlock::Preference),
            mean_miscarriage_risk: block_mean(TraitBlock::MiscarriageRisk),
            mean_other: block_mean(TraitBlock::Other),
        }
    }

    pub fn header() -> &'static str {
        "pool\tcycles\tpop\tmales\tminority_y\tappearance\tpreference\tmiscarriage\tother"
    }
}

impl fmt::Display for LocusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.pool_size,
            self.cycles,
            self.total,
            self.males,
            self.minority_males,
            self.mean_appearance,
            self.mean_preference,
            self.mean_miscarriage_risk,
            self.mean_other
        )
    }
}

/// Summary of a run of either variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum RunSummary {
    Continuous(ContinuousSummary),
    MultiLocus(LocusSummary),
}

impl RunSummary {
    pub fn header(&self) -> &'static str {
        match self {
            RunSummary::Continuous(_) => ContinuousSummary::header(),
            RunSummary::MultiLocus(_) => LocusSummary::header(),
        }
    }

    pub fn cycles(&self) -> usize {
        match self {
            RunSummary::Continuous(s) => s.cycles,
            RunSummary::MultiLocus(s) => s.cycles,
        }
    }

    /// Minority-lineage males alive at the end of the run.
    pub fn minority_males(&self) -> usize {
        match self {
            RunSummary::Continuous(s) => s.minority_males.count,
            RunSummary::MultiLocus(s) => s.minority_males,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunSummary::Continuous(s) => s.fmt(f),
            RunSummary::MultiLocus(s) => s.fmt(f),
        }
    }
}
