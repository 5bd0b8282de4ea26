//! Core data structures for the pond simulation.

pub mod genes;
pub mod individual;
pub mod pond;
pub mod produce;
pub mod report;
pub mod variant;
