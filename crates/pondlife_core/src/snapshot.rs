//! Snapshot capture and defensive restore.
//!
//! A snapshot is a plain structural copy of the pond plus the discovery list.
//! Restoring never fails: anything inconsistent is repaired to a safe value
//! and logged.

use crate::engine::{next_id, PondEngine};
use pondlife_data::{DiscoverySet, Pond, MAX_LEVEL};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Serialized form of one pond and its discoveries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PondSnapshot {
    pub pond: Pond,
    pub discovered: Vec<String>,
}

impl PondEngine {
    #[must_use]
    pub fn snapshot(&self, pond: &Pond, discovery: &DiscoverySet) -> PondSnapshot {
        PondSnapshot {
            pond: pond.clone(),
            discovered: discovery.iter().map(str::to_string).collect(),
        }
    }

    /// Rebuilds pond state from a snapshot, repairing it where needed.
    ///
    /// Individuals saved without an id get one drawn from `rng`.
    pub fn restore<R: Rng + ?Sized>(
        &self,
        snapshot: PondSnapshot,
        rng: &mut R,
    ) -> (Pond, DiscoverySet) {
        let PondSnapshot {
            mut pond,
            discovered,
        } = snapshot;

        let level = pond.level.clamp(1, MAX_LEVEL);
        if level != pond.level {
            tracing::warn!(level = pond.level, "Pond level out of range, clamped");
            pond.level = level;
        }

        if !pond.water_quality.is_finite() {
            tracing::warn!("Water quality unreadable, reset to clean");
            pond.water_quality = 100.0;
        } else if !(0.0..=100.0).contains(&pond.water_quality) {
            tracing::warn!(water_quality = pond.water_quality, "Water quality clamped");
            pond.water_quality = pond.water_quality.clamp(0.0, 100.0);
        }

        self.repair_individuals(&mut pond, rng);
        self.repair_breeding_pair(&mut pond);

        let raw_len = discovered.len();
        let discovery: DiscoverySet = discovered.into_iter().collect();
        if discovery.len() != raw_len {
            tracing::warn!(
                dropped = raw_len - discovery.len(),
                "Duplicate discoveries removed"
            );
        }
        (pond, discovery)
    }

    fn repair_individuals<R: Rng + ?Sized>(&self, pond: &mut Pond, rng: &mut R) {
        let mut seen = HashSet::new();
        pond.individuals.retain_mut(|individual| {
            if individual.id.is_nil() {
                individual.id = next_id(rng);
                tracing::warn!(name = %individual.name, "Individual without id, assigned a new one");
            }
            if !seen.insert(individual.id) {
                tracing::warn!(id = %individual.id, "Duplicate individual dropped");
                return false;
            }
            if !individual.genes.in_bounds() {
                tracing::warn!(id = %individual.id, "Genes out of bounds, clamped");
                individual.genes = individual.genes.clamped();
            }
            if !individual.sick && individual.sick_days > 0 {
                individual.sick_days = 0;
            }
            true
        });

        let capacity = self.capacity(pond);
        if pond.individuals.len() > capacity {
            tracing::warn!(
                count = pond.individuals.len(),
                capacity,
                "Population over capacity, truncated"
            );
            pond.individuals.truncate(capacity);
        }
    }

    fn repair_breeding_pair(&self, pond: &mut Pond) {
        let Some(pair) = pond.breeding_pair.as_mut() else {
            return;
        };
        let valid = pair.parent_a != pair.parent_b
            && [pair.parent_a, pair.parent_b].iter().all(|&id| {
                pond.individuals
                    .iter()
                    .any(|i| i.id == id && i.species_id == pair.species_id)
            });
        if !valid {
            tracing::warn!("Breeding pair references missing individuals, dropped");
            pond.breeding_pair = None;
            return;
        }
        let max_days = self.config().pond.breeding_days;
        let days = pair.days_remaining.clamp(1, max_days);
        if days != pair.days_remaining {
            tracing::warn!(days = pair.days_remaining, "Breeding countdown clamped");
            pair.days_remaining = days;
        }
    }
}
