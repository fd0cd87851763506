//! Culling (death) policies.
//!
//! After every breeding pass the population is trimmed back to its carrying
//! capacity, and a constant number of forced deaths is applied on top of any
//! overflow. All removal counts are derived from the group sizes observed
//! before the first removal of the pass.

use crate::simulation::population::{Group, Population};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Carrying capacity for uniform-random culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capacity {
    /// One cap over the whole population.
    Total(usize),
    /// Separate caps for males and females.
    BySex { males: usize, females: usize },
}

/// How individuals are removed at the end of each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum CullingPolicy {
    /// Remove the oldest members of each group.
    ///
    /// Male overflow is shared between the two lineages in proportion to
    /// their current sizes, and each lineage additionally loses
    /// `forced_deaths` members.
    OldestFirst {
        male_capacity: usize,
        female_capacity: usize,
        forced_deaths: usize,
    },
    /// Remove uniformly random members until the capacity is met.
    Random {
        capacity: Capacity,
        forced_deaths: usize,
    },
}

/// Outcome of a single culling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CullReport {
    pub before: usize,
    pub after: usize,
}

impl CullReport {
    pub fn removed(&self) -> usize {
        self.before - self.after
    }
}

impl CullingPolicy {
    /// Oldest-first culling with the given caps and forced deaths.
    pub fn oldest_first(
        male_capacity: usize,
        female_capacity: usize,
        forced_deaths: usize,
    ) -> Self {
        CullingPolicy::OldestFirst {
            male_capacity,
            female_capacity,
            forced_deaths,
        }
    }

    /// Uniform-random culling against a single total cap.
    pub fn random_total(capacity: usize, forced_deaths: usize) -> Self {
        CullingPolicy::Random {
            capacity: Capacity::Total(capacity),
            forced_deaths,
        }
    }

    /// Run one culling pass over `population`.
    pub fn apply<P, R>(&self, population: &mut P, rng: &mut R) -> CullReport
    where
        P: Population,
        R: Rng + ?Sized,
    {
        let before = population.len();
        match *self {
            CullingPolicy::OldestFirst {
                male_capacity,
                female_capacity,
                forced_deaths,
            } => cull_oldest(population, male_capacity, female_capacity, forced_deaths),
            CullingPolicy::Random {
                capacity,
                forced_deaths,
            } => cull_random(population, capacity, forced_deaths, rng),
        }
        CullReport {
            before,
            after: population.len(),
        }
    }
}

fn cull_oldest<P: Population>(
    population: &mut P,
    male_capacity: usize,
    female_capacity: usize,
    forced_deaths: usize,
) {
    let females = population.count(Group::Females);
    let majority = population.count(Group::MajorityMales);
    let minority = population.count(Group::MinorityMales);
    let males = majority + minority;

    let female_loss = females.saturating_sub(female_capacity) + forced_deaths;

    let excess = males.saturating_sub(male_capacity);
    let (majority_share, minority_share) = if males == 0 {
        (0, 0)
    } else {
        (excess * majority / males, excess * minority / males)
    };

    population.remove_oldest(Group::Females, female_loss);
    population.remove_oldest(Group::MinorityMales, minority_share + forced_deaths);
    population.remove_oldest(Group::MajorityMales, majority_share + forced_deaths);
}

fn cull_random<P, R>(population: &mut P, capacity: Capacity, forced_deaths: usize, rng: &mut R)
where
    P: Population,
    R: Rng + ?Sized,
{
    let plan: Vec<(Group, usize)> = match capacity {
        Capacity::Total(cap) => vec![(Group::All, cap)],
        Capacity::BySex { males, females } => {
            vec![(Group::Males, males), (Group::Females, females)]
        }
    };

    let losses: Vec<(Group, usize)> = plan
        .into_iter()
        .map(|(group, cap)| {
            let size = population.count(group);
            (group, (size.saturating_sub(cap) + forced_deaths).min(size))
        })
        .collect();

    for (group, loss) in losses {
        for _ in 0..loss {
            let size = population.count(group);
            if size == 0 {
                break;
            }
            population.remove_nth(group, rng.random_range(0..size));
        }
    }
}
