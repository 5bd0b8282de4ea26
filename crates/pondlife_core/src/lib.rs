//! # Pondlife Core
//!
//! The pond population and genetics engine.
//!
//! This crate contains the rules that act on the plain data in
//! `pondlife_data`:
//! - Trait inheritance with fluctuation and mutation jumps
//! - Pedigree lookup and variant discovery
//! - Population commands (build, upgrade, introduce, remove)
//! - Care commands (feed, clean, medicate) and breeding
//! - The daily simulation tick and output collection
//! - Snapshot capture and defensive restore
//!
//! ## Architecture
//!
//! [`PondEngine`] is stateless apart from its configuration. The host owns
//! the [`Pond`](pondlife_data::Pond) and the
//! [`DiscoverySet`](pondlife_data::DiscoverySet) and passes them into each
//! call together with collaborator handles and a random source, so runs are
//! reproducible under a seeded RNG.
//!
//! ## Example
//!
//! ```
//! use pondlife_core::{FixedSkills, MemoryInventory, MemoryWallet, PondEngine};
//! use pondlife_data::{DiscoverySet, Pond};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let engine = PondEngine::default();
//! let mut pond = Pond::new();
//! let mut discovery = DiscoverySet::new();
//! let mut inventory = MemoryInventory::new()
//!     .with_item("stone", 200)
//!     .with_item("clay", 50)
//!     .with_item("koi", 2);
//! let mut wallet = MemoryWallet::new(5000);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! engine.build(&mut pond, &mut inventory, &mut wallet).unwrap();
//! let added = engine.introduce(&mut pond, &mut discovery, "koi", 2, &mut inventory, &mut rng);
//! assert_eq!(added, 2);
//!
//! let report = engine.advance_day(&mut pond, &mut discovery, &FixedSkills::new(), &mut rng);
//! assert!(report.died.is_empty());
//! ```

/// Breeding pair validation and offspring resolution
pub mod breeding;
/// Feeding, cleaning and medication
pub mod care;
/// Inventory, wallet and skill interfaces plus in-memory implementations
pub mod collaborators;
/// Rule tables loaded from TOML
pub mod config;
/// The daily simulation tick
pub mod daily;
/// The engine type and pond queries
pub mod engine;
/// Command rejection reasons
pub mod error;
/// Trait inheritance and quality rolls
pub mod genetics;
/// Output collection
pub mod harvest;
/// Running totals and logging setup
pub mod metrics;
/// Variant table and discovery
pub mod pedigree;
/// Build, upgrade, introduce, remove, rename, appraise
pub mod population;
/// Snapshot capture and restore
pub mod snapshot;

pub use collaborators::{charge, FixedSkills, Inventory, MemoryInventory, MemoryWallet, SkillSource, Wallet};
pub use config::{Cost, PondConfig, SpeciesProfile};
pub use engine::PondEngine;
pub use error::{PondError, Result};
pub use genetics::GeneticsLogic;
pub use metrics::{init_logging, Metrics};
pub use pedigree::PedigreeRegistry;
pub use snapshot::PondSnapshot;
