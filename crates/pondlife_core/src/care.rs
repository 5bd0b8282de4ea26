//! Daily care commands.

use crate::collaborators::{charge, Inventory, Wallet};
use crate::engine::PondEngine;
use crate::error::{PondError, Result};
use pondlife_data::Pond;
use uuid::Uuid;

impl PondEngine {
    /// Feeds the pond for today. Production and recovery depend on it.
    pub fn feed(
        &self,
        pond: &mut Pond,
        inventory: &mut dyn Inventory,
        wallet: &mut dyn Wallet,
    ) -> Result<()> {
        Self::ensure_built(pond)?;
        if pond.fed_today {
            return Err(PondError::AlreadyFed);
        }
        charge(&self.config().care.feed_cost, inventory, wallet)?;
        pond.fed_today = true;
        Ok(())
    }

    /// Restores water quality. Returns the new value.
    pub fn clean(
        &self,
        pond: &mut Pond,
        inventory: &mut dyn Inventory,
        wallet: &mut dyn Wallet,
    ) -> Result<f32> {
        Self::ensure_built(pond)?;
        if pond.water_quality >= 100.0 {
            return Err(PondError::WaterAlreadyClean);
        }
        charge(&self.config().care.clean_cost, inventory, wallet)?;
        pond.water_quality = (pond.water_quality + self.config().care.clean_restore).clamp(0.0, 100.0);
        tracing::debug!(water_quality = pond.water_quality, "Pond cleaned");
        Ok(pond.water_quality)
    }

    pub fn medicate(
        &self,
        pond: &mut Pond,
        id: Uuid,
        inventory: &mut dyn Inventory,
        wallet: &mut dyn Wallet,
    ) -> Result<()> {
        let individual = pond.find(id).ok_or(PondError::UnknownIndividual(id))?;
        if !individual.sick {
            return Err(PondError::NotSick(individual.name.clone()));
        }
        charge(&self.config().care.medicate_cost, inventory, wallet)?;
        if let Some(individual) = pond.find_mut(id) {
            individual.recover();
            tracing::debug!(name = %individual.name, "Individual medicated");
        }
        Ok(())
    }
}
