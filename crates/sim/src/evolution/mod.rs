//! Evolutionary operators: mate selection, reproduction, miscarriage and
//! culling.
//!
//! - **Selection**: tournament search for the best-matching partner
//! - **Reproduction**: blending or Mendelian inheritance plus Y-linked lineage
//! - **Miscarriage**: loss of minority-lineage sons
//! - **Culling**: capacity-bounded removal, oldest-first or uniform-random
//!
//! The variant-specific pieces are bundled behind `GeneticModel`.

pub mod culling;
pub mod miscarriage;
pub mod model;
pub mod reproduction;
pub mod selection;

pub use culling::{Capacity, CullReport, CullingPolicy};
pub use model::{ContinuousModel, GeneticModel, MultiLocusModel};
pub use selection::{tournament, try_tournament};
