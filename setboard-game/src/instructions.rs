//! Renders target properties into the objective text shown to the player.

use crate::constants::{COLOR_WORDS, NUMBER_WORDS, SHAPE_WORDS};
use crate::error::SampleError;
use crate::properties::CardProperties;

/// Render `properties` as `"<NUMBER> <COLOR> <SHAPE>."`, upper-cased.
///
/// The shape word is plural whenever the count is above one.
///
/// # Errors
///
/// Returns [`SampleError::PropertyOutOfRange`] if any component lies outside
/// its vocabulary.
pub fn format_instructions(properties: CardProperties) -> Result<String, SampleError> {
    properties.validate()?;
    let count_ix = usize::from(properties.count - 1);
    let color = COLOR_WORDS[usize::from(properties.color - 1)];
    let (singular, plural) = SHAPE_WORDS[usize::from(properties.shape - 1)];
    let shape = if count_ix > 0 { plural } else { singular };
    let number = NUMBER_WORDS[count_ix];
    Ok(format!("{number} {color} {shape}.").to_uppercase())
}
