//! Population store commands: construction, stocking and removal.

use crate::collaborators::{charge, Inventory, Wallet};
use crate::engine::{next_id, PondEngine};
use crate::error::{PondError, Result};
use crate::genetics::GeneticsLogic;
use pondlife_data::{DiscoverySet, GeneticVector, Individual, Pond, QualityTier, MAX_LEVEL};
use rand::Rng;
use uuid::Uuid;

impl PondEngine {
    /// Builds the pond, paying the build cost all-or-nothing.
    pub fn build(
        &self,
        pond: &mut Pond,
        inventory: &mut dyn Inventory,
        wallet: &mut dyn Wallet,
    ) -> Result<()> {
        if pond.built {
            return Err(PondError::AlreadyBuilt);
        }
        charge(&self.config().pond.build_cost, inventory, wallet)?;
        pond.built = true;
        pond.level = 1;
        pond.water_quality = self.config().pond.starting_water_quality;
        tracing::info!(capacity = self.capacity(pond), "Pond built");
        Ok(())
    }

    /// Raises the pond one level. Returns the new level.
    pub fn upgrade(
        &self,
        pond: &mut Pond,
        inventory: &mut dyn Inventory,
        wallet: &mut dyn Wallet,
    ) -> Result<u8> {
        Self::ensure_built(pond)?;
        if pond.level >= MAX_LEVEL {
            return Err(PondError::MaxLevel);
        }
        let cost = self
            .config()
            .pond
            .upgrade_cost(pond.level)
            .ok_or(PondError::MaxLevel)?;
        charge(cost, inventory, wallet)?;
        pond.level += 1;
        tracing::info!(
            level = pond.level,
            capacity = self.capacity(pond),
            "Pond upgraded"
        );
        Ok(pond.level)
    }

    /// Moves up to `quantity` units of a species from the inventory into the
    /// pond. Stops early when the pond fills or the inventory runs dry, and
    /// returns how many were actually introduced.
    pub fn introduce<R: Rng + ?Sized>(
        &self,
        pond: &mut Pond,
        discovery: &mut DiscoverySet,
        species_id: &str,
        quantity: u32,
        inventory: &mut dyn Inventory,
        rng: &mut R,
    ) -> usize {
        if !pond.built {
            return 0;
        }
        let Ok(species) = self.species(species_id) else {
            tracing::warn!(species = species_id, "Cannot introduce unknown species");
            return 0;
        };

        let mut introduced = 0;
        while introduced < quantity as usize && !self.is_full(pond) {
            if !inventory.has_quantity(species_id, 1) || !inventory.withdraw(species_id, 1) {
                break;
            }
            let variant = self.registry().random_founder(species_id, rng);
            if let Some(v) = variant {
                self.registry().discover(discovery, v);
            }
            let name = variant.map_or(species.name.as_str(), |v| v.name.as_str());
            let genes = GeneticVector::founder_with_rng(rng);
            let individual = Individual::new(next_id(rng), species_id, name, genes)
                .with_variant(variant.map(|v| v.id.clone()));
            tracing::debug!(id = %individual.id, name = %individual.name, "Individual introduced");
            pond.individuals.push(individual);
            introduced += 1;
        }
        introduced
    }

    /// Returns an individual to the inventory and takes it out of the pond.
    ///
    /// The inventory deposit happens first; if it is refused the pond is left
    /// untouched. Removing a breeding parent cancels the pair.
    pub fn remove(
        &self,
        pond: &mut Pond,
        id: Uuid,
        inventory: &mut dyn Inventory,
    ) -> Result<Individual> {
        let index = pond.index_of(id).ok_or(PondError::UnknownIndividual(id))?;
        let individual = &pond.individuals[index];
        if !inventory.deposit(&individual.species_id, 1, QualityTier::Normal) {
            return Err(PondError::InventoryFull(individual.species_id.clone()));
        }
        let was_parent = pond.breeding_pair.as_ref().is_some_and(|p| p.involves(id));
        let removed = pond.take_individual(index);
        tracing::info!(id = %removed.id, name = %removed.name, "Individual removed");
        if was_parent {
            tracing::info!("Breeding pair cancelled by removal");
        }
        Ok(removed)
    }

    pub fn rename(&self, pond: &mut Pond, id: Uuid, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PondError::EmptyName);
        }
        let individual = pond.find_mut(id).ok_or(PondError::UnknownIndividual(id))?;
        individual.name = name.to_string();
        Ok(())
    }

    /// Market value of an individual.
    ///
    /// Heavier individuals are worth more; maturity doubles the price and
    /// sickness halves it.
    pub fn appraise(&self, individual: &Individual) -> Result<u64> {
        let species = self.species(&individual.species_id)?;
        let mut value =
            species.base_value as f64 * (1.0 + f64::from(individual.genes.weight) / 100.0);
        if individual.mature {
            value *= 2.0;
        }
        if individual.sick {
            value *= 0.5;
        }
        Ok(value.round() as u64)
    }
}
