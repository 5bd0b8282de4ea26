pub mod macros;

use pondlife_lib::model::collaborators::{FixedSkills, MemoryInventory, MemoryWallet};
use pondlife_lib::model::config::PondConfig;
use pondlife_lib::model::state::{DiscoverySet, GeneticVector, Individual, Pond};
use pondlife_lib::model::PondEngine;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Everything one engine call needs, owned in one place.
#[allow(dead_code)]
pub struct Harness {
    pub engine: PondEngine,
    pub pond: Pond,
    pub discovery: DiscoverySet,
    pub inventory: MemoryInventory,
    pub wallet: MemoryWallet,
    pub skills: FixedSkills,
    pub rng: ChaCha8Rng,
}

#[allow(dead_code)]
impl Harness {
    pub fn tick(&mut self) -> pondlife_lib::model::state::DailyReport {
        self.engine
            .advance_day(&mut self.pond, &mut self.discovery, &self.skills, &mut self.rng)
    }

    pub fn introduce(&mut self, species_id: &str, quantity: u32) -> usize {
        self.engine.introduce(
            &mut self.pond,
            &mut self.discovery,
            species_id,
            quantity,
            &mut self.inventory,
            &mut self.rng,
        )
    }
}

#[allow(dead_code)]
pub struct PondBuilder {
    config: PondConfig,
    individuals: Vec<Individual>,
    built: bool,
    level: u8,
    water_quality: f32,
    inventory: MemoryInventory,
    gold: u64,
    seed: u64,
}

#[allow(dead_code)]
impl PondBuilder {
    pub fn new() -> Self {
        Self {
            config: PondConfig::default(),
            individuals: Vec::new(),
            built: true,
            level: 1,
            water_quality: 100.0,
            inventory: MemoryInventory::new(),
            gold: 0,
            seed: 42,
        }
    }

    pub fn unbuilt(mut self) -> Self {
        self.built = false;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut PondConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn water(mut self, quality: f32) -> Self {
        self.water_quality = quality;
        self
    }

    pub fn with_individual(mut self, individual: Individual) -> Self {
        self.individuals.push(individual);
        self
    }

    pub fn with_item(mut self, item: &str, quantity: u32) -> Self {
        self.inventory = self.inventory.with_item(item, quantity);
        self
    }

    pub fn with_gold(mut self, gold: u64) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Harness {
        let engine = PondEngine::new(self.config).expect("Failed to create engine in test builder");
        let mut pond = Pond::new();
        pond.built = self.built;
        pond.level = self.level;
        pond.water_quality = self.water_quality;
        pond.individuals = self.individuals;
        Harness {
            engine,
            pond,
            discovery: DiscoverySet::new(),
            inventory: self.inventory,
            wallet: MemoryWallet::new(self.gold),
            skills: FixedSkills::new(),
            rng: ChaCha8Rng::seed_from_u64(self.seed),
        }
    }
}

#[allow(dead_code)]
pub struct IndividualBuilder {
    id: Uuid,
    species_id: String,
    name: Option<String>,
    variant_id: Option<String>,
    genes: GeneticVector,
    mature: bool,
    sick_days: Option<u32>,
}

#[allow(dead_code)]
impl IndividualBuilder {
    pub fn new(n: u128) -> Self {
        Self {
            id: Uuid::from_u128(n),
            species_id: "koi".to_string(),
            name: None,
            variant_id: None,
            genes: GeneticVector::default(),
            mature: false,
            sick_days: None,
        }
    }

    pub fn species(mut self, species_id: &str) -> Self {
        self.species_id = species_id.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn variant(mut self, variant_id: &str) -> Self {
        self.variant_id = Some(variant_id.to_string());
        self
    }

    pub fn genes(mut self, genes: GeneticVector) -> Self {
        self.genes = genes;
        self
    }

    pub fn mature(mut self) -> Self {
        self.mature = true;
        self
    }

    /// Sick for the given number of consecutive days.
    pub fn sick(mut self, days: u32) -> Self {
        self.sick_days = Some(days);
        self
    }

    pub fn build(self) -> Individual {
        let name = self
            .name
            .unwrap_or_else(|| format!("Fish {}", self.id.as_u128()));
        let mut individual = Individual::new(self.id, &self.species_id, &name, self.genes)
            .with_variant(self.variant_id);
        individual.mature = self.mature;
        if let Some(days) = self.sick_days {
            individual.sick = true;
            individual.sick_days = days;
        }
        individual
    }
}
