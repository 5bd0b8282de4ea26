use serde::{Deserialize, Serialize};

/// Lower bound shared by the four ordinary traits.
pub const TRAIT_MIN: u8 = 0;
/// Upper bound shared by the four ordinary traits.
pub const TRAIT_MAX: u8 = 100;
/// Lower bound of the mutation-rate trait.
pub const MUTATION_RATE_MIN: u8 = 1;
/// Upper bound of the mutation-rate trait.
pub const MUTATION_RATE_MAX: u8 = 50;

/// One axis of an individual's genetic vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trait {
    /// Production probability and market value.
    Weight,
    /// Maturation speed.
    GrowthRate,
    /// Resistance to disease onset; also damps inheritance fluctuation.
    DiseaseResistance,
    /// Output quality tier odds.
    QualityGene,
    /// Drift magnitude passed on to offspring.
    MutationRate,
}

impl Trait {
    pub const ALL: [Trait; 5] = [
        Trait::Weight,
        Trait::GrowthRate,
        Trait::DiseaseResistance,
        Trait::QualityGene,
        Trait::MutationRate,
    ];

    /// Inclusive `(min, max)` bounds for this trait.
    #[must_use]
    pub fn bounds(self) -> (u8, u8) {
        match self {
            Trait::MutationRate => (MUTATION_RATE_MIN, MUTATION_RATE_MAX),
            _ => (TRAIT_MIN, TRAIT_MAX),
        }
    }

    /// Clamps a raw value into bounds and rounds it to the stored integer.
    ///
    /// Non-finite input collapses to the lower bound.
    #[must_use]
    pub fn clamp(self, value: f32) -> u8 {
        let (lo, hi) = self.bounds();
        if !value.is_finite() {
            return lo;
        }
        value.clamp(lo as f32, hi as f32).round() as u8
    }
}

/// The five bounded traits carried by every individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticVector {
    pub weight: u8,
    pub growth_rate: u8,
    pub disease_resistance: u8,
    pub quality_gene: u8,
    pub mutation_rate: u8,
}

impl Default for GeneticVector {
    fn default() -> Self {
        Self {
            weight: 50,
            growth_rate: 50,
            disease_resistance: 50,
            quality_gene: 50,
            mutation_rate: 10,
        }
    }
}

impl GeneticVector {
    /// Builds a vector, clamping every trait into its bounds.
    #[must_use]
    pub fn new(
        weight: f32,
        growth_rate: f32,
        disease_resistance: f32,
        quality_gene: f32,
        mutation_rate: f32,
    ) -> Self {
        Self {
            weight: Trait::Weight.clamp(weight),
            growth_rate: Trait::GrowthRate.clamp(growth_rate),
            disease_resistance: Trait::DiseaseResistance.clamp(disease_resistance),
            quality_gene: Trait::QualityGene.clamp(quality_gene),
            mutation_rate: Trait::MutationRate.clamp(mutation_rate),
        }
    }

    #[must_use]
    pub fn get(&self, t: Trait) -> u8 {
        match t {
            Trait::Weight => self.weight,
            Trait::GrowthRate => self.growth_rate,
            Trait::DiseaseResistance => self.disease_resistance,
            Trait::QualityGene => self.quality_gene,
            Trait::MutationRate => self.mutation_rate,
        }
    }

    /// Writes a trait, clamping on the way in.
    pub fn set(&mut self, t: Trait, value: f32) {
        let v = t.clamp(value);
        match t {
            Trait::Weight => self.weight = v,
            Trait::GrowthRate => self.growth_rate = v,
            Trait::DiseaseResistance => self.disease_resistance = v,
            Trait::QualityGene => self.quality_gene = v,
            Trait::MutationRate => self.mutation_rate = v,
        }
    }

    /// Returns a copy with every trait forced back into bounds.
    ///
    /// Used when restoring data that did not pass through `set`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for t in Trait::ALL {
            out.set(t, self.get(t) as f32);
        }
        out
    }

    #[must_use]
    pub fn in_bounds(&self) -> bool {
        Trait::ALL.iter().all(|&t| {
            let (lo, hi) = t.bounds();
            (lo..=hi).contains(&self.get(t))
        })
    }
}
