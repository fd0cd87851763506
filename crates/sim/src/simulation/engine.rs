//! Simulation engine.
//!
//! One cycle is a breeding pass followed by a culling pass. The scheduler
//! keeps running cycles until the minority lineage has been without males
//! for the configured grace period, or the cycle limit is reached.

use crate::errors::SimulationError;
use crate::evolution::{tournament, try_tournament, CullReport, GeneticModel};
use crate::simulation::configs::{Configuration, VariantConfig};
use crate::simulation::initialization::{continuous_founders, multi_locus_founders};
use crate::simulation::parameters::{BreedingConfig, MatingInitiative, SimulationConfig};
use crate::simulation::population::{Group, Population};
use crate::simulation::summary::{ContinuousSummary, LocusSummary, RunSummary};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No minority-lineage males were left for the whole grace period.
    LineageExtinct,
    /// `max_cycles` cycles were executed.
    CycleLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Stopped(StopReason),
}

impl RunStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, RunStatus::Running)
    }
}

/// Counts from one breeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreedingReport {
    pub matings: usize,
    pub births: usize,
    pub miscarriages: usize,
}

/// Counts from one full cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    pub breeding: BreedingReport,
    pub culling: CullReport,
}

/// Run one breeding pass over `population`.
///
/// The breeding males and females are snapshotted up front, so children born
/// in this pass are only added to the population once it is over. Each round
/// opens with a draw of the initiating sex scored by `reference_score` over
/// `initiator_pool_size` candidates; the opener then picks a partner by
/// `mate_score` over `pool_size` candidates. Each mated female leaves the
/// pool whether or not her child survives. If either sex is absent the pass
/// is skipped.
///
/// # Errors
/// Fails on an invalid `config` before touching the population, and on the
/// first selection or reproduction error.
pub fn breed<M, P, R>(
    population: &mut P,
    model: &M,
    config: &BreedingConfig,
    cycle: usize,
    rng: &mut R,
) -> Result<BreedingReport, SimulationError>
where
    M: GeneticModel,
    P: Population<Member = M::Individual>,
    R: Rng + ?Sized,
{
    config.validate()?;
    let mut report = BreedingReport::default();

    let children = {
        let males = population.members(Group::Males);
        let mut females = population.members(Group::Females);
        if males.is_empty() || females.is_empty() {
            return Ok(report);
        }

        let unmated = config.unmated_count(females.len());
        let mut children = Vec::with_capacity(females.len().saturating_sub(unmated));

        while females.len() > unmated {
            let (father, mother) = match config.initiative {
                MatingInitiative::MaleInitiated => {
                    let father = males[tournament(&males, config.initiator_pool_size, rng, |c| {
                        model.reference_score(c)
                    })?];
                    let chosen = try_tournament(&females, config.pool_size, rng, |c| {
                        model.mate_score(father, c)
                    })?;
                    (father, females.swap_remove(chosen))
                }
                MatingInitiative::FemaleChoice => {
                    let opener = tournament(&females, config.initiator_pool_size, rng, |c| {
                        model.reference_score(c)
                    })?;
                    let mother = females.swap_remove(opener);
                    let father = males[try_tournament(&males, config.pool_size, rng, |c| {
                        model.mate_score(mother, c)
                    })?];
                    (father, mother)
                }
            };

            report.matings += 1;
            let child = model.conceive(father, mother, cycle, rng)?;
            if model.miscarries(&child, mother, rng) {
                report.miscarriages += 1;
            } else {
                children.push(child);
            }
        }
        children
    };

    report.births = children.len();
    population.push_all(children);
    Ok(report)
}

/// Run one full cycle: breeding, then culling.
pub fn run_cycle<M, P, R>(
    population: &mut P,
    model: &M,
    config: &SimulationConfig,
    cycle: usize,
    rng: &mut R,
) -> Result<CycleReport, SimulationError>
where
    M: GeneticModel,
    P: Population<Member = M::Individual>,
    R: Rng + ?Sized,
{
    let breeding = breed(population, model, &config.breeding, cycle, rng)?;
    let culling = config.culling.apply(population, rng);
    Ok(CycleReport { breeding, culling })
}

/// Termination bookkeeping shared by `evolve` and `Simulation`.
#[derive(Debug, Clone, Copy)]
struct Termination {
    grace_remaining: usize,
    max_cycles: usize,
}

impl Termination {
    fn new(config: &SimulationConfig) -> Self {
        Self {
            grace_remaining: config.extra_cycles,
            max_cycles: config.max_cycles,
        }
    }

    /// Update the grace counter after `cycles` completed cycles.
    fn check(&mut self, cycles: usize, minority_males: usize) -> RunStatus {
        if minority_males == 0 {
            self.grace_remaining = self.grace_remaining.saturating_sub(1);
            if self.grace_remaining == 0 {
                return RunStatus::Stopped(StopReason::LineageExtinct);
            }
        }
        if cycles >= self.max_cycles {
            return RunStatus::Stopped(StopReason::CycleLimit);
        }
        RunStatus::Running
    }
}

fn log_cycle<P: Population>(cycle: usize, report: &CycleReport, population: &P) {
    debug!(
        cycle,
        matings = report.breeding.matings,
        births = report.breeding.births,
        miscarriages = report.breeding.miscarriages,
        culled = report.culling.removed(),
        population = population.len(),
        minority_males = population.count(Group::MinorityMales),
        "Cycle complete"
    );
}

/// Run the scheduler to completion on `population`.
///
/// The run ends after `extra_cycles` cycles without minority-lineage males,
/// counted from the first such cycle, or after `max_cycles` cycles. With
/// `extra_cycles = 0` it ends on the first cycle without them.
///
/// Returns the number of cycles executed.
pub fn evolve<M, P, R>(
    population: &mut P,
    model: &M,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<usize, SimulationError>
where
    M: GeneticModel,
    P: Population<Member = M::Individual>,
    R: Rng + ?Sized,
{
    config.validate()?;
    let mut termination = Termination::new(config);
    let mut cycle = 0;

    loop {
        let report = run_cycle(population, model, config, cycle, rng)?;
        cycle += 1;
        log_cycle(cycle, &report, population);

        if let RunStatus::Stopped(reason) =
            termination.check(cycle, population.count(Group::MinorityMales))
        {
            info!(cycles = cycle, ?reason, "Run stopped");
            return Ok(cycle);
        }
    }
}

/// Main simulation engine.
///
/// Owns the population, the genetic model and its own random number
/// generator, and can be advanced one cycle at a time.
#[derive(Debug)]
pub struct Simulation<M: GeneticModel, P> {
    population: P,
    model: M,
    config: SimulationConfig,
    /// Random number generator (Xoshiro256++)
    rng: Xoshiro256PlusPlus,
    cycle: usize,
    termination: Termination,
    status: RunStatus,
}

impl<M, P> Simulation<M, P>
where
    M: GeneticModel,
    P: Population<Member = M::Individual>,
{
    /// Create a simulation over `population`.
    ///
    /// The generator is seeded from `config.seed` when set and from the
    /// thread-local generator otherwise.
    pub fn new(population: P, model: M, config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        Ok(Self {
            population,
            model,
            termination: Termination::new(&config),
            config,
            rng,
            cycle: 0,
            status: RunStatus::Running,
        })
    }

    /// Advance by one cycle. A stopped simulation is left untouched.
    pub fn step(&mut self) -> Result<RunStatus, SimulationError> {
        if !self.status.is_running() {
            return Ok(self.status);
        }

        let report = run_cycle(
            &mut self.population,
            &self.model,
            &self.config,
            self.cycle,
            &mut self.rng,
        )?;
        self.cycle += 1;
        log_cycle(self.cycle, &report, &self.population);

        self.status = self
            .termination
            .check(self.cycle, self.population.count(Group::MinorityMales));
        if let RunStatus::Stopped(reason) = self.status {
            info!(cycles = self.cycle, ?reason, "Run stopped");
        }
        Ok(self.status)
    }

    /// Step until the run stops. Returns the number of cycles executed.
    pub fn run(&mut self) -> Result<usize, SimulationError> {
        while self.step()?.is_running() {}
        Ok(self.cycle)
    }

    pub fn population(&self) -> &P {
        &self.population
    }

    pub fn into_population(self) -> P {
        self.population
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of completed cycles.
    pub fn cycle(&self) -> usize {
        self.cycle
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }
}

/// Build the founders described by `config`, run to completion and
/// summarise the final population.
pub fn run_configuration(config: &Configuration) -> Result<RunSummary, SimulationError> {
    config.validate()?;
    let pool_size = config.pool_size();

    match config.variant {
        VariantConfig::Continuous {
            model,
            founders_per_group,
        } => {
            let mut sim = Simulation::new(
                continuous_founders(founders_per_group),
                model,
                config.simulation,
            )?;
            let cycles = sim.run()?;
            Ok(RunSummary::Continuous(ContinuousSummary::collect(
                sim.population(),
                pool_size,
                cycles,
            )))
        }
        VariantConfig::MultiLocus {
            model,
            founder_quartets,
        } => {
            let founders = multi_locus_founders(founder_quartets, &model.layout);
            let mut sim = Simulation::new(founders, model, config.simulation)?;
            let cycles = sim.run()?;
            Ok(RunSummary::MultiLocus(LocusSummary::collect(
                sim.population(),
                pool_size,
                cycles,
            )))
        }
    }
}
