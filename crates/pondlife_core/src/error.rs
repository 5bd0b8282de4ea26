//! Rejection reasons for pond commands.
//!
//! Every command either succeeds or returns one of these without touching
//! pond state or the collaborators.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PondError {
    #[error("Pond has not been built")]
    NotBuilt,

    #[error("Pond is already built")]
    AlreadyBuilt,

    #[error("Pond is already at the highest level")]
    MaxLevel,

    #[error("Not enough gold: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("Missing material: {quantity} x {item}")]
    MissingMaterial { item: String, quantity: u32 },

    #[error("Pond is full")]
    PondFull,

    #[error("No individual with id {0}")]
    UnknownIndividual(Uuid),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("An individual cannot breed with itself")]
    SameIndividual,

    #[error("Parents must be the same species")]
    SpeciesMismatch,

    #[error("{0} is not mature yet")]
    Immature(String),

    #[error("{0} is sick")]
    Sick(String),

    #[error("{0} is not sick")]
    NotSick(String),

    #[error("A breeding pair is already in progress")]
    BreedingInProgress,

    #[error("Pond was already fed today")]
    AlreadyFed,

    #[error("Output was already collected today")]
    AlreadyCollected,

    #[error("Water is already clean")]
    WaterAlreadyClean,

    #[error("Inventory cannot accept {0}")]
    InventoryFull(String),

    #[error("Name must not be empty")]
    EmptyName,
}

/// Result type alias for pond commands.
pub type Result<T> = std::result::Result<T, PondError>;
