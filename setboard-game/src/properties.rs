//! Card property tuples and the uniform property sampler.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{COLOR_MAX, COLOR_MIN, COUNT_MAX, COUNT_MIN, SHAPE_MAX, SHAPE_MIN};
use crate::error::SampleError;
use crate::scenario::CardState;

/// Visual properties of a card, compared as a whole tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardProperties {
    pub color: u8,
    pub shape: u8,
    pub count: u8,
}

impl CardProperties {
    #[must_use]
    pub const fn new(color: u8, shape: u8, count: u8) -> Self {
        Self {
            color,
            shape,
            count,
        }
    }

    /// Check every component against its domain.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::PropertyOutOfRange`] naming the first field
    /// outside its domain.
    pub fn validate(&self) -> Result<(), SampleError> {
        check_range("color", self.color, COLOR_MIN, COLOR_MAX)?;
        check_range("shape", self.shape, SHAPE_MIN, SHAPE_MAX)?;
        check_range("count", self.count, COUNT_MIN, COUNT_MAX)
    }
}

impl std::fmt::Display for CardProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "color {} shape {} count {}",
            self.color, self.shape, self.count
        )
    }
}

const fn check_range(field: &'static str, value: u8, min: u8, max: u8) -> Result<(), SampleError> {
    if value < min || value > max {
        return Err(SampleError::PropertyOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Draw one property tuple, each component uniform over its domain.
pub fn sample_card_properties<R: Rng>(rng: &mut R) -> CardProperties {
    CardProperties {
        color: rng.gen_range(COLOR_MIN..=COLOR_MAX),
        shape: rng.gen_range(SHAPE_MIN..=SHAPE_MAX),
        count: rng.gen_range(COUNT_MIN..=COUNT_MAX),
    }
}

/// Draw a fresh visible, unselected card state.
pub fn sample_card_state<R: Rng>(rng: &mut R) -> CardState {
    CardState::fresh(sample_card_properties(rng))
}

/// Draw properties until they differ from `excluded`.
///
/// The domain holds 147 tuples, so the loop terminates almost surely after a
/// single draw.
pub fn sample_properties_except<R: Rng>(
    rng: &mut R,
    excluded: CardProperties,
) -> CardProperties {
    loop {
        let candidate = sample_card_properties(rng);
        if candidate != excluded {
            return candidate;
        }
    }
}
