use crate::config::{PondConfig, SpeciesProfile};
use crate::error::{PondError, Result};
use crate::pedigree::PedigreeRegistry;
use pondlife_data::Pond;
use rand::Rng;
use uuid::Uuid;

/// Rules for driving a pond.
///
/// The engine holds configuration and the pedigree table only. Pond state and
/// the discovery set belong to the host and are passed into every call, along
/// with whichever collaborators and random source the call needs. Commands are
/// split by concern across `population`, `care`, `breeding`, `daily`,
/// `harvest` and `snapshot`.
#[derive(Debug, Clone)]
pub struct PondEngine {
    config: PondConfig,
    registry: PedigreeRegistry,
}

impl Default for PondEngine {
    fn default() -> Self {
        Self {
            config: PondConfig::default(),
            registry: PedigreeRegistry::builtin(),
        }
    }
}

impl PondEngine {
    /// Validates the configuration and its variant table.
    pub fn new(config: PondConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let registry = PedigreeRegistry::new(config.variants.clone())?;
        for v in registry.iter() {
            anyhow::ensure!(
                config.species(&v.species_id).is_some(),
                "Variant {} refers to unknown species {}",
                v.id,
                v.species_id
            );
        }
        Ok(Self { config, registry })
    }

    #[must_use]
    pub fn config(&self) -> &PondConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &PedigreeRegistry {
        &self.registry
    }

    pub fn species(&self, id: &str) -> Result<&SpeciesProfile> {
        self.config
            .species(id)
            .ok_or_else(|| PondError::UnknownSpecies(id.to_string()))
    }

    /// Capacity at the pond's current level; 0 before the pond is built.
    #[must_use]
    pub fn capacity(&self, pond: &Pond) -> usize {
        if pond.built {
            self.config.pond.capacity(pond.level)
        } else {
            0
        }
    }

    #[must_use]
    pub fn free_slots(&self, pond: &Pond) -> usize {
        self.capacity(pond).saturating_sub(pond.count())
    }

    #[must_use]
    pub fn is_full(&self, pond: &Pond) -> bool {
        self.free_slots(pond) == 0
    }

    /// Population over capacity; 0 when the pond is not built.
    #[must_use]
    pub fn density(&self, pond: &Pond) -> f32 {
        let capacity = self.capacity(pond);
        if capacity == 0 {
            return 0.0;
        }
        pond.count() as f32 / capacity as f32
    }

    pub(crate) fn ensure_built(pond: &Pond) -> Result<()> {
        if pond.built {
            Ok(())
        } else {
            Err(PondError::NotBuilt)
        }
    }
}

/// Ids come from the injected source so seeded runs repeat exactly.
pub(crate) fn next_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Uuid::from_u128(rng.gen())
}
