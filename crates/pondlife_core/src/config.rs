//! Configuration management for pond rules and species tables.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `pond.toml` file. Every section has a playable default, so a file only
//! needs to list the values it overrides.
//!
//! ## Example `pond.toml`
//!
//! ```toml
//! [pond]
//! capacities = [4, 8, 12]
//! breeding_days = 3
//!
//! [water]
//! base_decay = 2.0
//! unfed_penalty = 2.0
//!
//! [health]
//! disease_threshold = 50.0
//! death_threshold = 5
//!
//! [[species]]
//! id = "koi"
//! name = "Koi"
//! maturity_days = 6
//! base_production = 0.25
//! weight_production_bonus = 0.25
//! product_item = "koi_roe"
//! base_value = 300
//! ```

use pondlife_data::VariantDef;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A quantity of one inventory item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MaterialCost {
    pub item: String,
    pub quantity: u32,
}

/// Price of a command: currency plus materials, charged all-or-nothing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Cost {
    pub gold: u64,
    pub materials: Vec<MaterialCost>,
}

impl Cost {
    #[must_use]
    pub fn free() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn gold(gold: u64) -> Self {
        Self {
            gold,
            materials: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_material(mut self, item: &str, quantity: u32) -> Self {
        self.materials.push(MaterialCost {
            item: item.to_string(),
            quantity,
        });
        self
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.gold == 0 && self.materials.iter().all(|m| m.quantity == 0)
    }
}

/// Structure, tiers and breeding timing.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PondSettings {
    /// Capacity at levels 1, 2 and 3.
    pub capacities: [usize; 3],
    /// Countdown for every breeding pair, independent of species.
    pub breeding_days: u32,
    pub starting_water_quality: f32,
    pub build_cost: Cost,
    /// Cost of 1→2 and 2→3.
    pub upgrade_costs: [Cost; 2],
}

impl Default for PondSettings {
    fn default() -> Self {
        Self {
            capacities: [4, 8, 12],
            breeding_days: 3,
            starting_water_quality: 100.0,
            build_cost: Cost::gold(5000)
                .with_material("stone", 200)
                .with_material("clay", 50),
            upgrade_costs: [
                Cost::gold(10000).with_material("stone", 150),
                Cost::gold(25000).with_material("refined_quartz", 20),
            ],
        }
    }
}

impl PondSettings {
    /// Capacity at a level; out-of-range levels are clamped to 1..=3.
    #[must_use]
    pub fn capacity(&self, level: u8) -> usize {
        let idx = level.clamp(1, 3) as usize - 1;
        self.capacities[idx]
    }

    /// Cost of leaving `level` for the next tier, if there is one.
    #[must_use]
    pub fn upgrade_cost(&self, level: u8) -> Option<&Cost> {
        match level {
            1 => Some(&self.upgrade_costs[0]),
            2 => Some(&self.upgrade_costs[1]),
            _ => None,
        }
    }
}

/// Daily water-quality decay model.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WaterConfig {
    pub base_decay: f32,
    pub crowded_threshold: f32,
    pub crowded_penalty: f32,
    pub half_full_threshold: f32,
    pub half_full_penalty: f32,
    pub unfed_penalty: f32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            base_decay: 2.0,
            crowded_threshold: 0.8,
            crowded_penalty: 3.0,
            half_full_threshold: 0.5,
            half_full_penalty: 1.0,
            unfed_penalty: 2.0,
        }
    }
}

/// Disease, death and maturation parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct HealthConfig {
    /// Water quality below which healthy individuals may fall sick.
    pub disease_threshold: f32,
    pub base_disease_chance: f64,
    /// Consecutive sick days that kill an individual.
    pub death_threshold: u32,
    /// Skill consulted to damp disease onset.
    pub skill_key: String,
    pub skill_damping_per_level: f64,
    pub max_skill_damping: f64,
    /// Fraction of maturity time a growth rate of 100 removes.
    pub max_growth_acceleration: f32,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            disease_threshold: 50.0,
            base_disease_chance: 0.15,
            death_threshold: 5,
            skill_key: "fishing".to_string(),
            skill_damping_per_level: 0.05,
            max_skill_damping: 0.5,
            max_growth_acceleration: 0.5,
        }
    }
}

/// Inheritance noise.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GeneticsConfig {
    /// Fluctuation amplitude at zero parental stability.
    pub fluctuation: f32,
    pub jump_min: f32,
    pub jump_max: f32,
}

impl Default for GeneticsConfig {
    fn default() -> Self {
        Self {
            fluctuation: 10.0,
            jump_min: 15.0,
            jump_max: 30.0,
        }
    }
}

/// Prices of the keeper's daily care commands.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CareConfig {
    pub clean_restore: f32,
    pub feed_cost: Cost,
    pub clean_cost: Cost,
    pub medicate_cost: Cost,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            clean_restore: 40.0,
            feed_cost: Cost::free().with_material("fish_food", 1),
            clean_cost: Cost::gold(100),
            medicate_cost: Cost::free().with_material("pond_medicine", 1),
        }
    }
}

/// Per-species constants.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeciesProfile {
    pub id: String,
    pub name: String,
    pub maturity_days: u32,
    pub base_production: f64,
    /// Extra production chance at weight 100, scaled linearly.
    pub weight_production_bonus: f64,
    pub product_item: String,
    pub base_value: u64,
}

impl SpeciesProfile {
    #[must_use]
    pub fn new(id: &str, name: &str, maturity_days: u32, product_item: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            maturity_days,
            base_production: 0.25,
            weight_production_bonus: 0.25,
            product_item: product_item.to_string(),
            base_value: 100,
        }
    }
}

fn default_species() -> Vec<SpeciesProfile> {
    vec![
        SpeciesProfile {
            id: "koi".to_string(),
            name: "Koi".to_string(),
            maturity_days: 6,
            base_production: 0.25,
            weight_production_bonus: 0.25,
            product_item: "koi_roe".to_string(),
            base_value: 300,
        },
        SpeciesProfile {
            id: "goldfish".to_string(),
            name: "Goldfish".to_string(),
            maturity_days: 4,
            base_production: 0.35,
            weight_production_bonus: 0.2,
            product_item: "goldfish_roe".to_string(),
            base_value: 120,
        },
        SpeciesProfile {
            id: "sturgeon".to_string(),
            name: "Sturgeon".to_string(),
            maturity_days: 10,
            base_production: 0.15,
            weight_production_bonus: 0.35,
            product_item: "caviar".to_string(),
            base_value: 800,
        },
    ]
}

/// Default lineage table: five koi generations and three goldfish ones.
/// Sturgeon deliberately has none.
pub fn default_variants() -> Vec<VariantDef> {
    vec![
        VariantDef::founder("kohaku", "Kohaku", "koi"),
        VariantDef::founder("taisho_sanke", "Taisho Sanke", "koi"),
        VariantDef::founder("asagi", "Asagi", "koi"),
        VariantDef::bred("showa", "Showa Sanshoku", "koi", 2, ("kohaku", "taisho_sanke")),
        VariantDef::bred("shusui", "Shusui", "koi", 2, ("asagi", "kohaku")),
        VariantDef::bred("goshiki", "Goshiki", "koi", 3, ("showa", "shusui")),
        VariantDef::bred("kujaku", "Kujaku", "koi", 4, ("goshiki", "showa")),
        VariantDef::bred("platinum_ogon", "Platinum Ogon", "koi", 5, ("kujaku", "goshiki")),
        VariantDef::founder("comet", "Comet", "goldfish"),
        VariantDef::founder("fantail", "Fantail", "goldfish"),
        VariantDef::bred("ryukin", "Ryukin", "goldfish", 2, ("comet", "fantail")),
        VariantDef::bred("oranda", "Oranda", "goldfish", 3, ("ryukin", "fantail")),
    ]
}

/// Complete rule set for one pond engine.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PondConfig {
    pub pond: PondSettings,
    pub water: WaterConfig,
    pub health: HealthConfig,
    pub genetics: GeneticsConfig,
    pub care: CareConfig,
    pub species: Vec<SpeciesProfile>,
    pub variants: Vec<VariantDef>,
}

impl Default for PondConfig {
    fn default() -> Self {
        Self {
            pond: PondSettings::default(),
            water: WaterConfig::default(),
            health: HealthConfig::default(),
            genetics: GeneticsConfig::default(),
            care: CareConfig::default(),
            species: default_species(),
            variants: default_variants(),
        }
    }
}

fn ensure_probability(value: f64, name: &str) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&value),
        "{} must be in [0.0, 1.0]",
        name
    );
    Ok(())
}

impl PondConfig {
    #[must_use]
    pub fn species(&self, id: &str) -> Option<&SpeciesProfile> {
        self.species.iter().find(|s| s.id == id)
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure. Variant tables are checked separately by
    /// the pedigree registry.
    pub fn validate(&self) -> anyhow::Result<()> {
        // Pond validation
        let caps = self.pond.capacities;
        anyhow::ensure!(caps[0] > 0, "Level 1 capacity must be positive");
        anyhow::ensure!(
            caps[0] <= caps[1] && caps[1] <= caps[2],
            "Capacities must not shrink with level"
        );
        anyhow::ensure!(caps[2] <= 100, "Capacity too large (max 100)");
        anyhow::ensure!(
            self.pond.breeding_days > 0,
            "Breeding countdown must be at least one day"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.pond.starting_water_quality),
            "Starting water quality must be in [0, 100]"
        );

        // Water validation
        let w = &self.water;
        anyhow::ensure!(w.base_decay >= 0.0, "Base decay must be non-negative");
        anyhow::ensure!(
            w.crowded_penalty >= 0.0 && w.half_full_penalty >= 0.0 && w.unfed_penalty >= 0.0,
            "Water penalties must be non-negative"
        );
        anyhow::ensure!(
            w.half_full_threshold <= w.crowded_threshold,
            "Half-full threshold must not exceed crowded threshold"
        );

        // Health validation
        let h = &self.health;
        anyhow::ensure!(
            (0.0..=100.0).contains(&h.disease_threshold),
            "Disease threshold must be in [0, 100]"
        );
        ensure_probability(h.base_disease_chance, "Base disease chance")?;
        ensure_probability(h.max_skill_damping, "Max skill damping")?;
        anyhow::ensure!(
            h.skill_damping_per_level >= 0.0,
            "Skill damping per level must be non-negative"
        );
        anyhow::ensure!(h.death_threshold > 0, "Death threshold must be positive");
        anyhow::ensure!(
            (0.0..1.0).contains(&h.max_growth_acceleration),
            "Max growth acceleration must be in [0.0, 1.0)"
        );

        // Genetics validation
        let g = &self.genetics;
        anyhow::ensure!(g.fluctuation >= 0.0, "Fluctuation must be non-negative");
        anyhow::ensure!(
            g.jump_min > g.fluctuation,
            "Mutation jumps must be larger than ordinary fluctuation"
        );
        anyhow::ensure!(g.jump_max >= g.jump_min, "jump_max must be >= jump_min");

        // Care validation
        anyhow::ensure!(
            self.care.clean_restore > 0.0,
            "Cleaning must restore some water quality"
        );

        // Species validation
        anyhow::ensure!(!self.species.is_empty(), "At least one species is required");
        let mut seen = HashSet::new();
        for s in &self.species {
            anyhow::ensure!(!s.id.is_empty(), "Species id must not be empty");
            anyhow::ensure!(seen.insert(s.id.as_str()), "Duplicate species id {}", s.id);
            anyhow::ensure!(s.maturity_days > 0, "{}: maturity days must be positive", s.id);
            ensure_probability(s.base_production, "Base production")?;
            ensure_probability(s.weight_production_bonus, "Weight production bonus")?;
            anyhow::ensure!(
                !s.product_item.is_empty(),
                "{}: product item must not be empty",
                s.id
            );
        }

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = PondConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_capacity_lookup() {
        let settings = PondSettings::default();
        assert_eq!(settings.capacity(1), 4);
        assert_eq!(settings.capacity(2), 8);
        assert_eq!(settings.capacity(3), 12);
        assert_eq!(settings.capacity(0), 4);
        assert_eq!(settings.capacity(9), 12);
        assert!(settings.upgrade_cost(3).is_none());
    }

    #[test]
    fn test_shrinking_capacity_rejected() {
        let config = PondConfig {
            pond: PondSettings {
                capacities: [8, 4, 12],
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_jump_must_exceed_fluctuation() {
        let config = PondConfig {
            genetics: GeneticsConfig {
                fluctuation: 20.0,
                jump_min: 15.0,
                jump_max: 30.0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_disease_chance() {
        let config = PondConfig {
            health: HealthConfig {
                base_disease_chance: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_species_rejected() {
        let mut config = PondConfig::default();
        config.species.push(config.species[0].clone());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PondConfig::from_toml(
            r#"
            [pond]
            capacities = [2, 4, 6]

            [health]
            death_threshold = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.pond.capacity(1), 2);
        assert_eq!(config.health.death_threshold, 3);
        assert_eq!(config.pond.breeding_days, 3);
        assert!(config.species("koi").is_some());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PondConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = PondConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.species, config.species);
        assert_eq!(parsed.variants, config.variants);
    }
}
