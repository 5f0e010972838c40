//! Named difficulty presets and the fog ranges they map to.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::str::FromStr;

use crate::constants::{EASY_FOG_END, EASY_FOG_START, HARD_FOG_END, HARD_FOG_START};
use crate::error::SampleError;
use crate::scenario::Scenario;

/// Visibility preset applied to a generated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Fog far away; the whole board is visible
    Easy,
    /// Fog close to the player
    Hard,
}

/// Distance at which fog starts and becomes opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FogRange {
    pub fog_start: i64,
    pub fog_end: i64,
}

impl Difficulty {
    pub const ALL: [Self; 2] = [Self::Easy, Self::Hard];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }

    #[must_use]
    pub const fn fog_range(self) -> FogRange {
        match self {
            Self::Easy => FogRange {
                fog_start: EASY_FOG_START,
                fog_end: EASY_FOG_END,
            },
            Self::Hard => FogRange {
                fog_start: HARD_FOG_START,
                fog_end: HARD_FOG_END,
            },
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = SampleError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "easy" => Ok(Self::Easy),
            "hard" => Ok(Self::Hard),
            other => Err(SampleError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Apply the fog range of `difficulty`. No other field is touched.
#[must_use]
pub fn set_difficulty(mut scenario: Scenario, difficulty: Difficulty) -> Scenario {
    let range = difficulty.fog_range();
    scenario.map.fog_start = Number::from(range.fog_start);
    scenario.map.fog_end = Number::from(range.fog_end);
    scenario
}

/// Apply the difficulty named by `label`.
///
/// # Errors
///
/// Returns [`SampleError::UnknownDifficulty`] if the label is not a known preset.
pub fn configure(scenario: Scenario, label: &str) -> Result<Scenario, SampleError> {
    let difficulty = label.parse::<Difficulty>()?;
    Ok(set_difficulty(scenario, difficulty))
}
