//! Core data structures for the pond population engine.
//!
//! Everything in this crate is plain serde data. Behaviour that needs
//! configuration or randomness lives in `pondlife_core`.

pub mod data;

pub use data::genes::{GeneticVector, Trait};
pub use data::individual::Individual;
pub use data::pond::{BreedingPair, Pond, MAX_LEVEL};
pub use data::produce::{Produce, QualityTier};
pub use data::report::{Birth, BreedingFailure, DailyReport};
pub use data::variant::{DiscoverySet, VariantDef};
