use serde::{Deserialize, Serialize};
use std::fmt;

/// Output quality, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Normal,
    Silver,
    Gold,
    Iridium,
}

impl QualityTier {
    pub const ALL: [QualityTier; 4] = [
        QualityTier::Normal,
        QualityTier::Silver,
        QualityTier::Gold,
        QualityTier::Iridium,
    ];

    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QualityTier::Normal => "normal",
            QualityTier::Silver => "silver",
            QualityTier::Gold => "gold",
            QualityTier::Iridium => "iridium",
        };
        f.write_str(s)
    }
}

/// One unit of pond output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Produce {
    pub item: String,
    pub quality: QualityTier,
}

impl Produce {
    #[must_use]
    pub fn new(item: &str, quality: QualityTier) -> Self {
        Self {
            item: item.to_string(),
            quality,
        }
    }
}
