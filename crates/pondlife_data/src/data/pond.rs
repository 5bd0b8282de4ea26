use super::individual::Individual;
use super::produce::Produce;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Highest pond tier.
pub const MAX_LEVEL: u8 = 3;

/// An in-progress breeding attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedingPair {
    pub parent_a: Uuid,
    pub parent_b: Uuid,
    pub days_remaining: u32,
    pub species_id: String,
}

impl Default for BreedingPair {
    fn default() -> Self {
        Self {
            parent_a: Uuid::nil(),
            parent_b: Uuid::nil(),
            days_remaining: 0,
            species_id: String::new(),
        }
    }
}

impl BreedingPair {
    #[must_use]
    pub fn involves(&self, id: Uuid) -> bool {
        self.parent_a == id || self.parent_b == id
    }
}

/// Aggregate root: the pond, its occupants and pond-level resources.
///
/// Capacity depends on configuration, so the capacity invariant is enforced
/// by the engine; this type only guarantees that removing an individual never
/// leaves a breeding pair pointing at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pond {
    pub built: bool,
    pub level: u8,
    pub individuals: Vec<Individual>,
    pub water_quality: f32,
    pub fed_today: bool,
    pub collected_today: bool,
    pub breeding_pair: Option<BreedingPair>,
    /// Produce from the latest daily tick, waiting to be collected.
    pub pending_output: Vec<Produce>,
}

impl Default for Pond {
    fn default() -> Self {
        Self {
            built: false,
            level: 1,
            individuals: Vec::new(),
            water_quality: 100.0,
            fed_today: false,
            collected_today: false,
            breeding_pair: None,
            pending_output: Vec::new(),
        }
    }
}

impl Pond {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.individuals.iter().position(|i| i.id == id)
    }

    #[must_use]
    pub fn find(&self, id: Uuid) -> Option<&Individual> {
        self.individuals.iter().find(|i| i.id == id)
    }

    pub fn find_mut(&mut self, id: Uuid) -> Option<&mut Individual> {
        self.individuals.iter_mut().find(|i| i.id == id)
    }

    pub fn mature(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter().filter(|i| i.mature)
    }

    pub fn sick(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter().filter(|i| i.sick)
    }

    /// Mature, healthy individuals.
    pub fn breeding_candidates(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter().filter(|i| i.can_breed())
    }

    #[must_use]
    pub fn is_breeding(&self) -> bool {
        self.breeding_pair.is_some()
    }

    /// Removes the individual at `index`, cancelling the breeding pair if it
    /// was one of the parents. Every removal path goes through here.
    pub fn take_individual(&mut self, index: usize) -> Individual {
        let removed = self.individuals.remove(index);
        if self
            .breeding_pair
            .as_ref()
            .is_some_and(|p| p.involves(removed.id))
        {
            self.breeding_pair = None;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::genes::GeneticVector;

    fn fish(n: u128) -> Individual {
        Individual::new(Uuid::from_u128(n), "koi", "Koi", GeneticVector::default())
    }

    #[test]
    fn test_default_pond() {
        let pond = Pond::new();
        assert!(!pond.built);
        assert_eq!(pond.level, 1);
        assert_eq!(pond.water_quality, 100.0);
        assert!(pond.is_empty());
        assert!(!pond.is_breeding());
    }

    #[test]
    fn test_take_parent_cancels_pair() {
        let mut pond = Pond::new();
        pond.individuals = vec![fish(1), fish(2), fish(3)];
        pond.breeding_pair = Some(BreedingPair {
            parent_a: Uuid::from_u128(1),
            parent_b: Uuid::from_u128(3),
            days_remaining: 2,
            species_id: "koi".into(),
        });

        let removed = pond.take_individual(2);
        assert_eq!(removed.id, Uuid::from_u128(3));
        assert!(pond.breeding_pair.is_none());
        assert_eq!(pond.count(), 2);
    }

    #[test]
    fn test_take_bystander_keeps_pair() {
        let mut pond = Pond::new();
        pond.individuals = vec![fish(1), fish(2), fish(3)];
        pond.breeding_pair = Some(BreedingPair {
            parent_a: Uuid::from_u128(1),
            parent_b: Uuid::from_u128(3),
            days_remaining: 2,
            species_id: "koi".into(),
        });

        pond.take_individual(1);
        assert!(pond.is_breeding());
    }

    #[test]
    fn test_subsets() {
        let mut pond = Pond::new();
        let mut a = fish(1);
        a.mature = true;
        let mut b = fish(2);
        b.mature = true;
        b.sick = true;
        pond.individuals = vec![a, b, fish(3)];
        assert_eq!(pond.mature().count(), 2);
        assert_eq!(pond.sick().count(), 1);
        assert_eq!(pond.breeding_candidates().count(), 1);
        assert_eq!(pond.index_of(Uuid::from_u128(3)), Some(2));
        assert!(pond.find(Uuid::from_u128(9)).is_none());
    }
}
