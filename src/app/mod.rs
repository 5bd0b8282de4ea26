//! Headless pond harness.
//!
//! `App` owns one pond, its discovery set and a set of in-memory
//! collaborators, and runs a simple keeper routine once per day.

mod keeper;

use crate::model::collaborators::{FixedSkills, MemoryInventory, MemoryWallet};
use crate::model::config::PondConfig;
use crate::model::metrics::Metrics;
use crate::model::state::{DiscoverySet, Pond, QualityTier};
use crate::model::{PondEngine, PondSnapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;

pub const STARTING_GOLD: u64 = 50_000;
pub const KEEPER_SKILL: u32 = 4;

pub struct App {
    pub engine: PondEngine,
    pub pond: Pond,
    pub discovery: DiscoverySet,
    pub inventory: MemoryInventory,
    pub wallet: MemoryWallet,
    pub skills: FixedSkills,
    pub metrics: Metrics,
    pub day: u64,
    rng: ChaCha8Rng,
}

impl App {
    pub fn new(config: PondConfig, seed: u64) -> anyhow::Result<Self> {
        let skills = FixedSkills::new().with(&config.health.skill_key, KEEPER_SKILL);
        let engine = PondEngine::new(config)?;
        let inventory = MemoryInventory::new()
            .with_item("stone", 500)
            .with_item("clay", 100)
            .with_item("refined_quartz", 20)
            .with_item("fish_food", 400)
            .with_item("pond_medicine", 40);
        Ok(Self {
            engine,
            pond: Pond::new(),
            discovery: DiscoverySet::new(),
            inventory,
            wallet: MemoryWallet::new(STARTING_GOLD),
            skills,
            metrics: Metrics::new(),
            day: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Replaces the pond and discoveries with a repaired snapshot.
    pub fn restore(&mut self, snapshot: PondSnapshot) {
        let (pond, discovery) = self.engine.restore(snapshot, &mut self.rng);
        self.pond = pond;
        self.discovery = discovery;
    }

    #[must_use]
    pub fn snapshot(&self) -> PondSnapshot {
        self.engine.snapshot(&self.pond, &self.discovery)
    }

    /// Builds the pond if needed, then buys `quantity` of a species and
    /// introduces as many as fit.
    pub fn stock(&mut self, species_id: &str, quantity: u32) -> anyhow::Result<usize> {
        self.engine.species(species_id)?;
        if !self.pond.built {
            self.engine
                .build(&mut self.pond, &mut self.inventory, &mut self.wallet)?;
        }
        self.inventory.add(species_id, quantity, QualityTier::Normal);
        Ok(self.engine.introduce(
            &mut self.pond,
            &mut self.discovery,
            species_id,
            quantity,
            &mut self.inventory,
            &mut self.rng,
        ))
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut species: Vec<&str> = self
            .pond
            .individuals
            .iter()
            .map(|i| i.species_id.as_str())
            .collect();
        species.sort_unstable();
        species.dedup();
        let discovery_progress = species
            .into_iter()
            .map(|s| {
                let (found, total) = self.engine.registry().discovery_progress(s, &self.discovery);
                (s.to_string(), found, total)
            })
            .collect();

        Summary {
            day: self.day,
            level: self.pond.level,
            population: self.pond.count(),
            capacity: self.engine.capacity(&self.pond),
            water_quality: self.pond.water_quality,
            mature: self.pond.mature().count(),
            sick: self.pond.sick().count(),
            births: self.metrics.births(),
            deaths: self.metrics.deaths(),
            produced: self.metrics.produced(),
            gold: self.wallet.gold,
            discovered: self.discovery.iter().map(str::to_string).collect(),
            discovery_progress,
        }
    }
}

/// End-of-run overview.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub day: u64,
    pub level: u8,
    pub population: usize,
    pub capacity: usize,
    pub water_quality: f32,
    pub mature: usize,
    pub sick: usize,
    pub births: u64,
    pub deaths: u64,
    pub produced: u64,
    pub gold: u64,
    pub discovered: Vec<String>,
    /// `(species, discovered, total)` for species present in the pond.
    pub discovery_progress: Vec<(String, usize, usize)>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Day {} | level {} pond", self.day, self.level)?;
        writeln!(
            f,
            "Population {}/{} ({} mature, {} sick), water {:.1}",
            self.population, self.capacity, self.mature, self.sick, self.water_quality
        )?;
        writeln!(
            f,
            "Births {}, deaths {}, produce {}, gold {}",
            self.births, self.deaths, self.produced, self.gold
        )?;
        for (species, found, total) in &self.discovery_progress {
            writeln!(f, "{species}: {found}/{total} variants discovered")?;
        }
        if !self.discovered.is_empty() {
            write!(f, "Discovered: {}", self.discovered.join(", "))?;
        }
        Ok(())
    }
}
