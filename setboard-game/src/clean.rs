//! Strips prior session state from a template scenario.

use crate::constants::{CLEAN_MOVES_REMAINING, CLEAN_TURN, CLEAN_TURNS_LEFT, NEUTRAL_LOCATION};
use crate::scenario::{HexLocation, Objective, Scenario};

/// Reset turn counters, objectives, card visibility and the primary actor's
/// location so the scenario starts from a fresh baseline.
///
/// Every touched field is overwritten, never incremented, so cleaning twice
/// yields the same document as cleaning once.
#[must_use]
pub fn clean_scenario(mut scenario: Scenario) -> Scenario {
    let turn_state = &mut scenario.turn_state;
    turn_state.turn = CLEAN_TURN;
    turn_state.moves_remaining = CLEAN_MOVES_REMAINING;
    turn_state.turns_left = CLEAN_TURNS_LEFT;

    scenario.objectives = vec![Objective::blank()];

    for card in &mut scenario.prop_update.props {
        card.card_init.hidden = true;
    }

    if let Some(actor) = scenario.actor_state.actors.first_mut() {
        let extra = std::mem::take(&mut actor.location.extra);
        actor.location = HexLocation {
            extra,
            ..HexLocation::new(NEUTRAL_LOCATION, NEUTRAL_LOCATION, NEUTRAL_LOCATION)
        };
    } else {
        log::warn!("scenario has no actors; skipping location reset");
    }

    scenario
}
