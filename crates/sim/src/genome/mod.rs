//! Individuals and their heritable state.
//!
//! Two representations share the `Individual` capability trait:
//! - `ContinuousIndividual`: a single ancestry scalar in `[0, 1]`
//! - `DiploidIndividual`: four blocks of diploid boolean loci

mod individual;
pub mod locus;
mod sex;

pub use individual::{
    ContinuousIndividual, DiploidIndividual, GenomeLayout, Individual, LocusGenome, TraitBlock,
};
pub use locus::Locus;
pub use sex::{Lineage, Sex};
