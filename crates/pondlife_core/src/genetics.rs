//! Trait inheritance and output-quality rolls.
//!
//! Both are pure functions of their inputs and an injected random source, so
//! they can be exercised without a pond.

use crate::config::GeneticsConfig;
use pondlife_data::{GeneticVector, QualityTier, Trait};
use rand::Rng;

/// Breeding-side behaviour for genetic vectors.
pub trait GeneticsLogic {
    /// Random founder stock for a freshly introduced individual.
    fn founder_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Offspring vector from two parents.
    fn inherit_with_rng<R: Rng + ?Sized>(
        &self,
        other: &Self,
        config: &GeneticsConfig,
        rng: &mut R,
    ) -> Self;
}

impl GeneticsLogic for GeneticVector {
    fn founder_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        GeneticVector::new(
            rng.gen_range(30.0..=70.0),
            rng.gen_range(30.0..=70.0),
            rng.gen_range(30.0..=70.0),
            rng.gen_range(30.0..=70.0),
            rng.gen_range(5.0..=15.0),
        )
    }

    fn inherit_with_rng<R: Rng + ?Sized>(
        &self,
        other: &Self,
        config: &GeneticsConfig,
        rng: &mut R,
    ) -> Self {
        let stability = mean(self.disease_resistance, other.disease_resistance);
        let range = fluctuation_range(config.fluctuation, stability);
        let jump_chance = (mean(self.mutation_rate, other.mutation_rate) / 100.0).clamp(0.0, 1.0);

        let mut child = GeneticVector::default();
        for t in Trait::ALL {
            let mut value = mean(self.get(t), other.get(t));
            if range > 0.0 {
                value += rng.gen_range(-range..=range);
            }
            if rng.gen_bool(f64::from(jump_chance)) {
                let magnitude = jump_magnitude(config, rng);
                value += if rng.gen_bool(0.5) { magnitude } else { -magnitude };
            }
            child.set(t, value);
        }
        child
    }
}

fn mean(a: u8, b: u8) -> f32 {
    (f32::from(a) + f32::from(b)) / 2.0
}

fn jump_magnitude<R: Rng + ?Sized>(config: &GeneticsConfig, rng: &mut R) -> f32 {
    if config.jump_max > config.jump_min {
        rng.gen_range(config.jump_min..=config.jump_max)
    } else {
        config.jump_min
    }
}

/// Fluctuation amplitude for a given average parental disease resistance.
///
/// Full amplitude at stability 0, half at stability 100.
#[must_use]
pub fn fluctuation_range(base: f32, avg_stability: f32) -> f32 {
    let stability = avg_stability.clamp(0.0, 100.0);
    (base * (1.0 - stability / 200.0)).max(0.0)
}

/// Maps a quality gene and a roll in `[0, 100)` to an output tier.
///
/// Tiers are tested highest first, so one roll never satisfies two.
#[must_use]
pub fn quality_for_roll(quality_gene: u8, roll: f32) -> QualityTier {
    let q = f32::from(quality_gene);
    if quality_gene >= 75 && roll < q - 50.0 {
        QualityTier::Iridium
    } else if quality_gene >= 50 && roll < q - 25.0 {
        QualityTier::Gold
    } else if quality_gene >= 25 && roll < q {
        QualityTier::Silver
    } else {
        QualityTier::Normal
    }
}

pub fn roll_quality<R: Rng + ?Sized>(quality_gene: u8, rng: &mut R) -> QualityTier {
    quality_for_roll(quality_gene, rng.gen_range(0.0..100.0))
}
