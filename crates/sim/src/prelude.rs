//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use assimil_sim::prelude::*;
//!
//! let population = continuous_founders(10);
//! assert_eq!(population.count(Group::MinorityMales), 10);
//! ```

pub use crate::errors::{self, BuilderError, ConfigError, SimulationError};
pub use crate::evolution::{
    Capacity, ContinuousModel, CullingPolicy, GeneticModel, MultiLocusModel,
};
pub use crate::genome::{
    ContinuousIndividual, DiploidIndividual, GenomeLayout, Individual, Lineage, Sex,
};
pub use crate::simulation::{
    continuous_founders, evolve, multi_locus_founders, BreedingConfig, Configuration,
    FlatPopulation, Group, LineagePopulation, MatingInitiative, Population, RunStatus,
    RunSummary, Simulation, SimulationBuilder, SimulationConfig, StopReason, VariantConfig,
};
