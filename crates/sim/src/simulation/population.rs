//! Population containers.
//!
//! Two containers share one capability set, the `Population` trait:
//!
//! - `LineagePopulation` keeps three explicit ordered sequences (majority
//!   males, minority males, females).
//! - `FlatPopulation` keeps a single ordered sequence and filters it by group
//!   on demand.
//!
//! Both keep individuals in insertion order, so within any group the first
//! member is the oldest. New individuals are only ever appended.

use crate::genome::{Individual, Lineage, Sex};

/// A selectable subset of a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    All,
    Males,
    Females,
    MajorityMales,
    MinorityMales,
}

impl Group {
    /// Whether an individual of sex `sex` belongs to this group.
    pub fn includes(&self, sex: Sex) -> bool {
        match self {
            Group::All => true,
            Group::Males => sex.is_male(),
            Group::Females => sex.is_female(),
            Group::MajorityMales => sex == Sex::Male(Lineage::Majority),
            Group::MinorityMales => sex == Sex::Male(Lineage::Minority),
        }
    }

    #[inline]
    pub fn contains<I: Individual>(&self, individual: &I) -> bool {
        self.includes(individual.sex())
    }
}

/// Capability set every population container provides.
///
/// Breeding, culling, termination checks and summaries are all written
/// against this trait.
pub trait Population {
    type Member: Individual;

    /// Total number of individuals.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of individuals in `group`.
    fn count(&self, group: Group) -> usize;

    /// Members of `group`, oldest first.
    fn members(&self, group: Group) -> Vec<&Self::Member>;

    /// Append a newly created individual.
    fn push(&mut self, individual: Self::Member);

    fn push_all<It>(&mut self, individuals: It)
    where
        It: IntoIterator<Item = Self::Member>,
    {
        for individual in individuals {
            self.push(individual);
        }
    }

    /// Remove the `n` oldest members of `group`. Returns how many were
    /// actually removed, which is less than `n` if the group is smaller.
    fn remove_oldest(&mut self, group: Group, n: usize) -> usize;

    /// Remove and return the `index`-th member of `group` in age order.
    fn remove_nth(&mut self, group: Group, index: usize) -> Option<Self::Member>;
}

/// Population split into majority males, minority males and females.
///
/// Groups spanning several partitions (`All`, `Males`) are visited in the
/// order majority males, minority males, females.
#[derive(Debug, Clone, PartialEq)]
pub struct LineagePopulation<I> {
    majority_males: Vec<I>,
    minority_males: Vec<I>,
    females: Vec<I>,
}

impl<I: Individual> LineagePopulation<I> {
    pub fn new() -> Self {
        Self {
            majority_males: Vec::new(),
            minority_males: Vec::new(),
            females: Vec::new(),
        }
    }

    pub fn majority_males(&self) -> &[I] {
        &self.majority_males
    }

    pub fn minority_males(&self) -> &[I] {
        &self.minority_males
    }

    pub fn females(&self) -> &[I] {
        &self.females
    }

    fn partition_mut(&mut self, sex: Sex) -> &mut Vec<I> {
        match sex {
            Sex::Male(Lineage::Majority) => &mut self.majority_males,
            Sex::Male(Lineage::Minority) => &mut self.minority_males,
            Sex::Female => &mut self.females,
        }
    }

    /// Partitions covered by `group`, in visiting order.
    fn partitions(&self, group: Group) -> Vec<&Vec<I>> {
        match group {
            Group::All => vec![&self.majority_males, &self.minority_males, &self.females],
            Group::Males => vec![&self.majority_males, &self.minority_males],
            Group::Females => vec![&self.females],
            Group::MajorityMales => vec![&self.majority_males],
            Group::MinorityMales => vec![&self.minority_males],
        }
    }

    fn partitions_mut(&mut self, group: Group) -> Vec<&mut Vec<I>> {
        match group {
            Group::All => vec![
                &mut self.majority_males,
                &mut self.minority_males,
                &mut self.females,
            ],
            Group::Males => vec![&mut self.majority_males, &mut self.minority_males],
            Group::Females => vec![&mut self.females],
            Group::MajorityMales => vec![&mut self.majority_males],
            Group::MinorityMales => vec![&mut self.minority_males],
        }
    }
}

impl<I: Individual> Default for LineagePopulation<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Individual> FromIterator<I> for LineagePopulation<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut population = Self::new();
        population.push_all(iter);
        population
    }
}

impl<I: Individual> Population for LineagePopulation<I> {
    type Member = I;

    fn len(&self) -> usize {
        self.majority_males.len() + self.minority_males.len() + self.females.len()
    }

    fn count(&self, group: Group) -> usize {
        self.partitions(group).iter().map(|p| p.len()).sum()
    }

    fn members(&self, group: Group) -> Vec<&I> {
        self.partitions(group)
            .into_iter()
            .flat_map(|p| p.iter())
            .collect()
    }

    fn push(&mut self, individual: I) {
        self.partition_mut(individual.sex()).push(individual);
    }

    fn remove_oldest(&mut self, group: Group, n: usize) -> usize {
        let mut remaining = n;
        for partition in self.partitions_mut(group) {
            let take = remaining.min(partition.len());
            partition.drain(..take);
            remaining -= take;
        }
        n - remaining
    }

    fn remove_nth(&mut self, group: Group, mut index: usize) -> Option<I> {
        for partition in self.partitions_mut(group) {
            if index < partition.len() {
                return Some(partition.remove(index));
            }
            index -= partition.len();
        }
        None
    }
}

/// Population held in one insertion-ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPopulation<I> {
    individuals: Vec<I>,
}

impl<I: Individual> FlatPopulation<I> {
    pub fn new(individuals: Vec<I>) -> Self {
        Self { individuals }
    }

    pub fn individuals(&self) -> &[I] {
        &self.individuals
    }
}

impl<I: Individual> Default for FlatPopulation<I> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<I: Individual> FromIterator<I> for FlatPopulation<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<I: Individual> Population for FlatPopulation<I> {
    type Member = I;

    fn len(&self) -> usize {
        self.individuals.len()
    }

    fn count(&self, group: Group) -> usize {
        match group {
            Group::All => self.individuals.len(),
            _ => self.individuals.iter().filter(|i| group.contains(*i)).count(),
        }
    }

    fn members(&self, group: Group) -> Vec<&I> {
        self.individuals.iter().filter(|i| group.contains(*i)).collect()
    }

    fn push(&mut self, individual: I) {
        self.individuals.push(individual);
    }

    fn remove_oldest(&mut self, group: Group, n: usize) -> usize {
        let mut removed = 0;
        self.individuals.retain(|individual| {
            if removed < n && group.contains(individual) {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    fn remove_nth(&mut self, group: Group, index: usize) -> Option<I> {
        let position = match group {
            Group::All => (index < self.individuals.len()).then_some(index)?,
            _ => self
                .individuals
                .iter()
                .enumerate()
                .filter(|(_, i)| group.contains(*i))
                .nth(index)?
                .0,
        };
        Some(self.individuals.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::ContinuousIndividual;

    fn ind(sex: Sex, ancestry: f64) -> ContinuousIndividual {
        ContinuousIndividual::new(sex, ancestry)
    }

    /// Mixed population whose ancestry values double as insertion stamps.
    fn mixed() -> Vec<ContinuousIndividual> {
        vec![
            ind(Sex::Male(Lineage::Majority), 0.0),
            ind(Sex::Female, 0.1),
            ind(Sex::Male(Lineage::Minority), 0.2),
            ind(Sex::Female, 0.3),
            ind(Sex::Male(Lineage::Majority), 0.4),
            ind(Sex::Male(Lineage::Minority), 0.5),
            ind(Sex::Female, 0.6),
        ]
    }

    fn stamps(members: Vec<&ContinuousIndividual>) -> Vec<f64> {
        members.iter().map(|i| i.ancestry()).collect()
    }

    #[test]
    fn test_group_membership() {
        let minority = Sex::Male(Lineage::Minority);
        assert!(Group::All.includes(minority));
        assert!(Group::Males.includes(minority));
        assert!(Group::MinorityMales.includes(minority));
        assert!(!Group::MajorityMales.includes(minority));
        assert!(!Group::Females.includes(minority));
        assert!(Group::Females.includes(Sex::Female));
        assert!(!Group::Males.includes(Sex::Female));
    }

    fn check_counts<P: Population>(population: &P) {
        assert_eq!(population.len(), 7);
        assert_eq!(population.count(Group::All), 7);
        assert_eq!(population.count(Group::Males), 4);
        assert_eq!(population.count(Group::Females), 3);
        assert_eq!(population.count(Group::MajorityMales), 2);
        assert_eq!(population.count(Group::MinorityMales), 2);
    }

    #[test]
    fn test_counts_agree_between_containers() {
        let lineage: LineagePopulation<_> = mixed().into_iter().collect();
        let flat: FlatPopulation<_> = mixed().into_iter().collect();
        check_counts(&lineage);
        check_counts(&flat);
    }

    #[test]
    fn test_members_in_age_order() {
        let lineage: LineagePopulation<_> = mixed().into_iter().collect();
        let flat: FlatPopulation<_> = mixed().into_iter().collect();

        for group in [Group::Females, Group::MajorityMales, Group::MinorityMales] {
            assert_eq!(stamps(lineage.members(group)), stamps(flat.members(group)));
        }
        assert_eq!(stamps(flat.members(Group::Females)), vec![0.1, 0.3, 0.6]);
        assert_eq!(stamps(flat.members(Group::All)).len(), 7);
    }

    #[test]
    fn test_remove_oldest_per_group() {
        let mut lineage: LineagePopulation<_> = mixed().into_iter().collect();
        let mut flat: FlatPopulation<_> = mixed().into_iter().collect();

        assert_eq!(lineage.remove_oldest(Group::Females, 2), 2);
        assert_eq!(flat.remove_oldest(Group::Females, 2), 2);
        assert_eq!(stamps(lineage.members(Group::Females)), vec![0.6]);
        assert_eq!(stamps(flat.members(Group::Females)), vec![0.6]);

        // Other groups are untouched
        assert_eq!(flat.count(Group::Males), 4);
        assert_eq!(stamps(flat.members(Group::All)), vec![0.0, 0.2, 0.4, 0.5, 0.6]);
    }

    #[test]
    fn test_remove_oldest_clamps() {
        let mut lineage: LineagePopulation<_> = mixed().into_iter().collect();
        let mut flat: FlatPopulation<_> = mixed().into_iter().collect();

        assert_eq!(lineage.remove_oldest(Group::MinorityMales, 10), 2);
        assert_eq!(flat.remove_oldest(Group::MinorityMales, 10), 2);
        assert_eq!(lineage.count(Group::MinorityMales), 0);
        assert_eq!(flat.count(Group::MinorityMales), 0);
        assert_eq!(flat.remove_oldest(Group::MinorityMales, 1), 0);
    }

    #[test]
    fn test_remove_oldest_spanning_partitions() {
        let mut lineage: LineagePopulation<_> = mixed().into_iter().collect();
        // Two majority males first, then one minority male
        assert_eq!(lineage.remove_oldest(Group::Males, 3), 3);
        assert_eq!(lineage.count(Group::MajorityMales), 0);
        assert_eq!(stamps(lineage.members(Group::MinorityMales)), vec![0.5]);
    }

    #[test]
    fn test_remove_nth() {
        let mut lineage: LineagePopulation<_> = mixed().into_iter().collect();
        let mut flat: FlatPopulation<_> = mixed().into_iter().collect();

        let a = lineage.remove_nth(Group::Females, 1).unwrap();
        let b = flat.remove_nth(Group::Females, 1).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ancestry(), 0.3);
        assert_eq!(stamps(flat.members(Group::Females)), vec![0.1, 0.6]);

        assert!(lineage.remove_nth(Group::Females, 2).is_none());
        assert!(flat.remove_nth(Group::Females, 2).is_none());
        assert!(flat.remove_nth(Group::All, 100).is_none());

        // Index runs across partitions for spanning groups
        let c = lineage.remove_nth(Group::Males, 2).unwrap();
        assert_eq!(c.sex(), Sex::Male(Lineage::Minority));
    }

    #[test]
    fn test_push_routes_by_sex() {
        let mut lineage = LineagePopulation::new();
        lineage.push(ind(Sex::Male(Lineage::Minority), 0.0));
        lineage.push(ind(Sex::Female, 1.0));
        assert_eq!(lineage.minority_males().len(), 1);
        assert_eq!(lineage.females().len(), 1);
        assert!(lineage.majority_males().is_empty());
        assert!(!lineage.is_empty());
    }
}
