//! Static pedigree table and discovery bookkeeping.

use crate::config::default_variants;
use pondlife_data::{DiscoverySet, VariantDef};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Highest generation a variant may declare.
pub const MAX_GENERATION: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Default)]
struct VariantTable {
    #[serde(default)]
    variants: Vec<VariantDef>,
}

/// Lookup table of named variants, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct PedigreeRegistry {
    variants: Vec<VariantDef>,
    index: HashMap<String, usize>,
}

impl PedigreeRegistry {
    /// Builds and validates a registry.
    pub fn new(variants: Vec<VariantDef>) -> anyhow::Result<Self> {
        let registry = Self::indexed(variants);
        registry.validate()?;
        Ok(registry)
    }

    /// The default lineage table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::indexed(default_variants())
    }

    /// Parses `[[variants]]` entries from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let table: VariantTable = toml::from_str(content)?;
        Self::new(table.variants)
    }

    fn indexed(variants: Vec<VariantDef>) -> Self {
        let index = variants
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect();
        Self { variants, index }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.index.len() == self.variants.len(),
            "Duplicate variant ids in pedigree table"
        );
        let mut pairs = HashSet::new();
        for v in &self.variants {
            anyhow::ensure!(!v.id.is_empty(), "Variant id must not be empty");
            anyhow::ensure!(
                (1..=MAX_GENERATION).contains(&v.generation),
                "{}: generation must be in 1..={}",
                v.id,
                MAX_GENERATION
            );
            if v.generation == 1 {
                anyhow::ensure!(v.is_founder(), "{}: founders cannot have parents", v.id);
                continue;
            }
            let Some((a, b)) = v.parents() else {
                anyhow::bail!("{}: bred variants need both parents", v.id);
            };
            for parent in [a, b] {
                let Some(p) = self.get(parent) else {
                    anyhow::bail!("{}: unknown parent variant {}", v.id, parent);
                };
                anyhow::ensure!(
                    p.species_id == v.species_id,
                    "{}: parent {} belongs to another species",
                    v.id,
                    parent
                );
                anyhow::ensure!(
                    p.generation < v.generation,
                    "{}: parent {} is not an earlier generation",
                    v.id,
                    parent
                );
            }
            let key = if a <= b { (a, b) } else { (b, a) };
            anyhow::ensure!(
                pairs.insert((v.species_id.as_str(), key)),
                "{}: parent pair {} x {} is already taken",
                v.id,
                a,
                b
            );
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&VariantDef> {
        self.index.get(id).map(|&i| &self.variants[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantDef> {
        self.variants.iter()
    }

    pub fn variants_for<'a>(&'a self, species_id: &'a str) -> impl Iterator<Item = &'a VariantDef> {
        self.variants.iter().filter(move |v| v.species_id == species_id)
    }

    /// Generation-1 variants of a species.
    #[must_use]
    pub fn founders(&self, species_id: &str) -> Vec<&VariantDef> {
        self.variants
            .iter()
            .filter(|v| v.species_id == species_id && v.is_founder())
            .collect()
    }

    /// Bred variant for an unordered pair of parent variants.
    #[must_use]
    pub fn lookup_offspring(&self, species_id: &str, a: &str, b: &str) -> Option<&VariantDef> {
        self.variants
            .iter()
            .find(|v| v.species_id == species_id && v.bred_from(a, b))
    }

    pub fn random_founder<R: Rng + ?Sized>(
        &self,
        species_id: &str,
        rng: &mut R,
    ) -> Option<&VariantDef> {
        self.founders(species_id).choose(rng).copied()
    }

    /// `(discovered, total)` for one species.
    #[must_use]
    pub fn discovery_progress(&self, species_id: &str, discovered: &DiscoverySet) -> (usize, usize) {
        self.variants_for(species_id)
            .fold((0, 0), |(found, total), v| {
                (found + usize::from(discovered.contains(&v.id)), total + 1)
            })
    }

    /// Marks a variant discovered. Returns `true` the first time.
    pub fn discover(&self, discovered: &mut DiscoverySet, variant: &VariantDef) -> bool {
        let new = discovered.insert(&variant.id);
        if new {
            tracing::info!(
                variant = %variant.id,
                generation = variant.generation,
                species = %variant.species_id,
                "New variant discovered"
            );
        }
        new
    }
}
