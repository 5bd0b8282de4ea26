//! The daily simulation driver.
//!
//! One call to [`PondEngine::advance_day`] advances the pond by one day in a
//! fixed order:
//!
//! 1. Unbuilt or empty ponds only reset their daily flags.
//! 2. Water quality decays with density and feeding.
//! 3. A single health pass handles sickness, recovery, ageing and maturation.
//! 4. Individuals that died in step 3 are removed, last index first.
//! 5. Fed ponds produce output into the pending buffer.
//! 6. The breeding countdown ticks and may resolve.
//! 7. Daily flags reset.
//!
//! The tick has no failure path, so it always applies completely.

use crate::collaborators::SkillSource;
use crate::config::{HealthConfig, SpeciesProfile, WaterConfig};
use crate::engine::PondEngine;
use crate::genetics::roll_quality;
use pondlife_data::{DailyReport, DiscoverySet, Pond, Produce};
use rand::Rng;

/// Water-quality loss for one day.
#[must_use]
pub fn water_decay(config: &WaterConfig, density: f32, fed: bool) -> f32 {
    let mut decay = config.base_decay;
    if density > config.crowded_threshold {
        decay += config.crowded_penalty;
    } else if density > config.half_full_threshold {
        decay += config.half_full_penalty;
    }
    if !fed {
        decay += config.unfed_penalty;
    }
    decay
}

/// Probability that a healthy individual falls sick today.
#[must_use]
pub fn disease_chance(config: &HealthConfig, resistance: u8, skill_level: u32) -> f64 {
    let resistance = f64::from(resistance.min(100)) / 100.0;
    let damping = (f64::from(skill_level) * config.skill_damping_per_level).min(config.max_skill_damping);
    (config.base_disease_chance * (1.0 - resistance) * (1.0 - damping)).clamp(0.0, 1.0)
}

/// Days an individual needs to mature. Never below one.
#[must_use]
pub fn maturity_days(base: u32, growth_rate: u8, max_acceleration: f32) -> u32 {
    let speedup = f32::from(growth_rate.min(100)) / 100.0 * max_acceleration;
    let days = (base as f32 * (1.0 - speedup)).ceil() as u32;
    days.max(1)
}

/// Daily production probability for a mature, healthy individual.
#[must_use]
pub fn production_chance(species: &SpeciesProfile, weight: u8) -> f64 {
    let bonus = f64::from(weight.min(100)) / 100.0 * species.weight_production_bonus;
    (species.base_production + bonus).clamp(0.0, 1.0)
}

impl PondEngine {
    /// Advances the pond by one day and reports what happened.
    pub fn advance_day<R: Rng + ?Sized>(
        &self,
        pond: &mut Pond,
        discovery: &mut DiscoverySet,
        skills: &dyn SkillSource,
        rng: &mut R,
    ) -> DailyReport {
        let mut report = DailyReport::default();
        if !pond.built || pond.is_empty() {
            pond.fed_today = false;
            pond.collected_today = false;
            report.water_quality = pond.water_quality;
            return report;
        }

        let decay = water_decay(&self.config().water, self.density(pond), pond.fed_today);
        pond.water_quality = (pond.water_quality - decay).clamp(0.0, 100.0);

        let doomed = self.health_pass(pond, skills, &mut report, rng);

        for &index in doomed.iter().rev() {
            let dead = pond.take_individual(index);
            tracing::info!(id = %dead.id, name = %dead.name, "Individual died of illness");
            report.died.push(dead.name);
        }
        report.died.reverse();

        self.production_pass(pond, &mut report, rng);

        if let Some(pair) = pond.breeding_pair.as_mut() {
            pair.days_remaining = pair.days_remaining.saturating_sub(1);
            if pair.days_remaining == 0 {
                match self.resolve_breeding(pond, discovery, rng) {
                    Ok(birth) => report.bred = Some(birth),
                    Err(reason) => {
                        tracing::info!(%reason, "Breeding failed");
                        report.breeding_failed_reason = Some(reason);
                    }
                }
            }
        }

        pond.fed_today = false;
        pond.collected_today = false;
        report.water_quality = pond.water_quality;
        report
    }

    /// Returns the indices of individuals that died, in ascending order.
    fn health_pass<R: Rng + ?Sized>(
        &self,
        pond: &mut Pond,
        skills: &dyn SkillSource,
        report: &mut DailyReport,
        rng: &mut R,
    ) -> Vec<usize> {
        let health = &self.config().health;
        let skill = skills.level(&health.skill_key);
        let water = pond.water_quality;
        let fed = pond.fed_today;
        let mut doomed = Vec::new();

        for (index, individual) in pond.individuals.iter_mut().enumerate() {
            if individual.sick {
                individual.sick_days += 1;
                if individual.sick_days >= health.death_threshold {
                    doomed.push(index);
                    continue;
                }
                if fed && water >= health.disease_threshold {
                    individual.recover();
                    tracing::debug!(name = %individual.name, "Recovered");
                    report.healed.push(individual.name.clone());
                }
            } else if water < health.disease_threshold {
                let chance = disease_chance(health, individual.genes.disease_resistance, skill);
                if rng.gen_bool(chance) {
                    individual.fall_sick();
                    tracing::debug!(name = %individual.name, water, "Fell sick");
                    report.got_sick.push(individual.name.clone());
                }
            }

            individual.days_in_pond += 1;
            if !individual.mature {
                let Some(species) = self.config().species(&individual.species_id) else {
                    continue;
                };
                let needed = maturity_days(
                    species.maturity_days,
                    individual.genes.growth_rate,
                    health.max_growth_acceleration,
                );
                if individual.days_in_pond >= needed {
                    individual.mature = true;
                    tracing::debug!(name = %individual.name, days = individual.days_in_pond, "Matured");
                    report.matured.push(individual.name.clone());
                }
            }
        }
        doomed
    }

    // Yesterday's uncollected output is dropped here whether or not the pond
    // was fed.
    fn production_pass<R: Rng + ?Sized>(
        &self,
        pond: &mut Pond,
        report: &mut DailyReport,
        rng: &mut R,
    ) {
        pond.pending_output.clear();
        if !pond.fed_today {
            return;
        }
        for individual in pond.individuals.iter().filter(|i| i.can_breed()) {
            let Some(species) = self.config().species(&individual.species_id) else {
                continue;
            };
            if !rng.gen_bool(production_chance(species, individual.genes.weight)) {
                continue;
            }
            let produce = Produce::new(
                &species.product_item,
                roll_quality(individual.genes.quality_gene, rng),
            );
            tracing::debug!(name = %individual.name, quality = %produce.quality, "Produced");
            report.produced.push(produce.clone());
            pond.pending_output.push(produce);
        }
    }
}
