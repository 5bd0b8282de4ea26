use super::produce::Produce;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Why a breeding attempt ended without offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreedingFailure {
    /// A parent was removed or died before resolution.
    ParentsLost,
    /// No free slot when the countdown ended. The attempt is not retried.
    PondFull,
}

impl fmt::Display for BreedingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreedingFailure::ParentsLost => f.write_str("parents lost"),
            BreedingFailure::PondFull => f.write_str("pond full"),
        }
    }
}

/// A successful breeding resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birth {
    pub id: Uuid,
    pub name: String,
    pub variant_id: Option<String>,
    /// True when this birth added the variant to the discovery set.
    pub new_discovery: bool,
}

/// Everything that happened during one daily tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub produced: Vec<Produce>,
    pub died: Vec<String>,
    pub got_sick: Vec<String>,
    pub healed: Vec<String>,
    pub matured: Vec<String>,
    pub bred: Option<Birth>,
    pub breeding_failed_reason: Option<BreedingFailure>,
    /// Water quality after the tick.
    pub water_quality: f32,
}

impl DailyReport {
    /// True when nothing happened to any individual.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.produced.is_empty()
            && self.died.is_empty()
            && self.got_sick.is_empty()
            && self.healed.is_empty()
            && self.matured.is_empty()
            && self.bred.is_none()
            && self.breeding_failed_reason.is_none()
    }
}
