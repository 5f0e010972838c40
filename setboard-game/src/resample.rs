//! Target set selection and distractor conflict resolution.
//!
//! The resolver caps the board, picks the three cards forming the solution,
//! gives them a shared freshly sampled property tuple and resamples any other
//! card that happens to carry the same tuple. The objective text is rendered
//! from the same tuple so card state and instructions never disagree.

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_CARDS, TARGET_SET_SIZE};
use crate::error::SampleError;
use crate::instructions::format_instructions;
use crate::properties::{CardProperties, sample_card_properties, sample_properties_except};
use crate::scenario::{CardId, Objective, Scenario};

/// Summary of one resolver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub target_card_ids: Vec<CardId>,
    pub target_properties: CardProperties,
    pub instructions: String,
    /// Ids of the cards left on the board, in board order.
    pub kept_card_ids: Vec<CardId>,
    /// Cards discarded by the board cap.
    pub dropped_cards: usize,
    /// Non-target cards whose properties collided with the target tuple.
    pub distractors_resampled: usize,
}

/// Keep at most [`MAX_CARDS`] cards, chosen uniformly without replacement.
/// Kept cards retain their relative order.
fn cap_cards<R: Rng>(scenario: &mut Scenario, rng: &mut R) -> usize {
    let total = scenario.prop_update.props.len();
    if total <= MAX_CARDS {
        return 0;
    }
    let mut keep = index::sample(rng, total, MAX_CARDS).into_vec();
    keep.sort_unstable();
    let cards = std::mem::take(&mut scenario.prop_update.props);
    scenario.prop_update.props = cards
        .into_iter()
        .enumerate()
        .filter(|(ix, _)| keep.binary_search(ix).is_ok())
        .map(|(_, card)| card)
        .collect();
    total - MAX_CARDS
}

/// Pick the target set, assign it shared properties, resolve distractor
/// collisions and write the matching objective text.
///
/// # Errors
///
/// Returns [`SampleError::NotEnoughCards`] if the scenario holds fewer than
/// three cards.
pub fn resample_scenario<R: Rng>(
    mut scenario: Scenario,
    rng: &mut R,
) -> Result<(Scenario, Resolution), SampleError> {
    let found = scenario.prop_update.props.len();
    if found < TARGET_SET_SIZE {
        return Err(SampleError::NotEnoughCards {
            found,
            required: TARGET_SET_SIZE,
        });
    }

    let dropped_cards = cap_cards(&mut scenario, rng);
    let cards = &mut scenario.prop_update.props;

    let target_ix = index::sample(rng, cards.len(), TARGET_SET_SIZE).into_vec();
    let mut target_card_ids: Vec<CardId> = target_ix.iter().map(|&ix| cards[ix].id).collect();
    target_card_ids.sort_unstable();

    let target_properties = sample_card_properties(rng);
    let mut distractors_resampled = 0;
    for (ix, card) in cards.iter_mut().enumerate() {
        if target_ix.contains(&ix) {
            card.card_init.reset_to(target_properties);
        } else if card.properties() == target_properties {
            let replacement = sample_properties_except(rng, target_properties);
            log::trace!(
                "card {} collided with target ({target_properties}); resampled to {replacement}",
                card.id
            );
            card.card_init.reset_to(replacement);
            distractors_resampled += 1;
        }
    }

    let instructions = format_instructions(target_properties)?;
    if scenario.objectives.is_empty() {
        scenario.objectives.push(Objective::blank());
    }
    scenario.objectives[0].text.clone_from(&instructions);
    scenario.target_card_ids.clone_from(&target_card_ids);
    let kept_card_ids = scenario.cards().iter().map(|card| card.id).collect();

    log::debug!(
        "targets {target_card_ids:?} -> {instructions} (dropped {dropped_cards}, resampled {distractors_resampled})"
    );

    Ok((
        scenario,
        Resolution {
            target_card_ids,
            target_properties,
            instructions,
            kept_card_ids,
            dropped_cards,
            distractors_resampled,
        },
    ))
}
