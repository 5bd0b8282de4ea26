use super::genes::GeneticVector;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single creature occupying a pond slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Individual {
    pub id: Uuid,
    pub species_id: String,
    pub name: String,
    pub genes: GeneticVector,
    /// Age counter, incremented once per daily tick.
    pub days_in_pond: u32,
    pub mature: bool,
    pub sick: bool,
    /// Consecutive days spent sick.
    pub sick_days: u32,
    /// Pedigree registry key, if one was assigned.
    pub variant_id: Option<String>,
}

impl Default for Individual {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            species_id: String::new(),
            name: String::new(),
            genes: GeneticVector::default(),
            days_in_pond: 0,
            mature: false,
            sick: false,
            sick_days: 0,
            variant_id: None,
        }
    }
}

impl Individual {
    /// A fresh, immature, healthy individual.
    #[must_use]
    pub fn new(id: Uuid, species_id: &str, name: &str, genes: GeneticVector) -> Self {
        Self {
            id,
            species_id: species_id.to_string(),
            name: name.to_string(),
            genes,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_variant(mut self, variant_id: Option<String>) -> Self {
        self.variant_id = variant_id;
        self
    }

    /// Mature and healthy.
    #[must_use]
    pub fn can_breed(&self) -> bool {
        self.mature && !self.sick
    }

    pub fn fall_sick(&mut self) {
        self.sick = true;
        self.sick_days = 0;
    }

    pub fn recover(&mut self) {
        self.sick = false;
        self.sick_days = 0;
    }
}
