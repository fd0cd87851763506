//! Simulation engine and run configuration.
//!
//! This module provides the population containers, the cycle scheduler,
//! configuration management and end-of-run summaries.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod initialization;
pub mod parameters;
pub mod population;
pub mod summary;

pub use builder::SimulationBuilder;
pub use configs::{Configuration, VariantConfig};
pub use engine::{
    breed, evolve, run_configuration, run_cycle, BreedingReport, CycleReport, RunStatus,
    Simulation, StopReason,
};
pub use initialization::{continuous_founders, multi_locus_founders};
pub use parameters::{BreedingConfig, MatingInitiative, SimulationConfig};
pub use population::{FlatPopulation, Group, LineagePopulation, Population};
pub use summary::{ContinuousSummary, GroupStats, LocusSummary, RunSummary};
