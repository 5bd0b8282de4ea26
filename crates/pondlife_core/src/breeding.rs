//! Breeding engine: pairing validation and offspring resolution.

use crate::engine::{next_id, PondEngine};
use crate::error::{PondError, Result};
use crate::genetics::GeneticsLogic;
use pondlife_data::{Birth, BreedingFailure, BreedingPair, DiscoverySet, Individual, Pond};
use rand::Rng;
use uuid::Uuid;

impl PondEngine {
    /// Pairs two individuals. The offspring arrives after the configured
    /// number of daily ticks, if there is still room for it.
    pub fn start_breeding(&self, pond: &mut Pond, a: Uuid, b: Uuid) -> Result<()> {
        Self::ensure_built(pond)?;
        if pond.is_breeding() {
            return Err(PondError::BreedingInProgress);
        }
        if self.is_full(pond) {
            return Err(PondError::PondFull);
        }
        if a == b {
            return Err(PondError::SameIndividual);
        }
        let first = pond.find(a).ok_or(PondError::UnknownIndividual(a))?;
        let second = pond.find(b).ok_or(PondError::UnknownIndividual(b))?;
        for parent in [first, second] {
            if !parent.mature {
                return Err(PondError::Immature(parent.name.clone()));
            }
            if parent.sick {
                return Err(PondError::Sick(parent.name.clone()));
            }
        }
        if first.species_id != second.species_id {
            return Err(PondError::SpeciesMismatch);
        }

        let pair = BreedingPair {
            parent_a: a,
            parent_b: b,
            days_remaining: self.config().pond.breeding_days,
            species_id: first.species_id.clone(),
        };
        tracing::info!(
            parent_a = %first.name,
            parent_b = %second.name,
            days = pair.days_remaining,
            "Breeding started"
        );
        pond.breeding_pair = Some(pair);
        Ok(())
    }

    pub fn cancel_breeding(&self, pond: &mut Pond) -> Option<BreedingPair> {
        pond.breeding_pair.take()
    }

    /// Turns the active pair into an offspring. The pair is cleared whatever
    /// the outcome; a failed attempt is not retried.
    pub(crate) fn resolve_breeding<R: Rng + ?Sized>(
        &self,
        pond: &mut Pond,
        discovery: &mut DiscoverySet,
        rng: &mut R,
    ) -> std::result::Result<Birth, BreedingFailure> {
        let pair = pond
            .breeding_pair
            .take()
            .ok_or(BreedingFailure::ParentsLost)?;
        let (Some(a), Some(b)) = (pond.find(pair.parent_a), pond.find(pair.parent_b)) else {
            return Err(BreedingFailure::ParentsLost);
        };
        if self.is_full(pond) {
            return Err(BreedingFailure::PondFull);
        }

        let genes = a
            .genes
            .inherit_with_rng(&b.genes, &self.config().genetics, rng);
        let registry = self.registry();
        let bred = match (a.variant_id.as_deref(), b.variant_id.as_deref()) {
            (Some(va), Some(vb)) => registry.lookup_offspring(&pair.species_id, va, vb),
            _ => None,
        };
        let variant = bred.or_else(|| registry.random_founder(&pair.species_id, rng));
        let new_discovery = variant.is_some_and(|v| registry.discover(discovery, v));

        let name = match variant {
            Some(v) => v.name.clone(),
            None => self
                .species(&pair.species_id)
                .map_or_else(|_| pair.species_id.clone(), |s| s.name.clone()),
        };
        let variant_id = variant.map(|v| v.id.clone());
        let child = Individual::new(next_id(rng), &pair.species_id, &name, genes)
            .with_variant(variant_id.clone());
        tracing::info!(id = %child.id, name = %child.name, variant = ?variant_id, "Offspring born");

        let birth = Birth {
            id: child.id,
            name,
            variant_id,
            new_discovery,
        };
        pond.individuals.push(child);
        Ok(birth)
    }
}
