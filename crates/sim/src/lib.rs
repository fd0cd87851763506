//! # Simulation Crate
//!
//! The `assimil_sim` crate models the genetic assimilation of a minority
//! lineage into a majority one under assortative mating. It includes modules
//! for representing individuals, the evolutionary operators (mate selection,
//! reproduction, miscarriage, culling) and the cycle scheduler that drives
//! them.
//!
//! Two variants share the same engine: a continuous model where ancestry is
//! a single scalar, and a multi-locus model with diploid trait blocks.

pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use evolution::{ContinuousModel, GeneticModel, MultiLocusModel};
pub use simulation::{evolve, Configuration, RunSummary, Simulation};
