//! Typed model of a scenario document.
//!
//! Only the fields the sampler reads or rewrites are typed. Everything else is
//! captured in flattened `extra` maps so a template survives a load/save cycle
//! without losing actor, map or turn data the game engine relies on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::properties::CardProperties;

/// Identifier of a card within one scenario.
pub type CardId = i64;

/// Unknown fields carried through untouched.
pub type ExtraFields = Map<String, Value>;

/// Visual state of a card as stored under `card_init`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    pub color: u8,
    pub shape: u8,
    pub count: u8,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl CardState {
    /// Fresh, visible and unselected state carrying `properties`.
    #[must_use]
    pub fn fresh(properties: CardProperties) -> Self {
        Self {
            color: properties.color,
            shape: properties.shape,
            count: properties.count,
            selected: false,
            hidden: false,
            extra: ExtraFields::new(),
        }
    }

    #[must_use]
    pub const fn properties(&self) -> CardProperties {
        CardProperties {
            color: self.color,
            shape: self.shape,
            count: self.count,
        }
    }

    /// Replace properties and flags with a freshly sampled state, keeping any
    /// unknown fields the template stored alongside them.
    pub fn reset_to(&mut self, properties: CardProperties) {
        self.color = properties.color;
        self.shape = properties.shape;
        self.count = properties.count;
        self.selected = false;
        self.hidden = false;
    }
}

/// A card on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub card_init: CardState,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Card {
    #[must_use]
    pub const fn properties(&self) -> CardProperties {
        self.card_init.properties()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PropUpdate {
    #[serde(default)]
    pub props: Vec<Card>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Map parameters; the sampler only touches the fog range.
///
/// Fog distances keep the JSON number as written, so integer templates stay
/// integers on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSettings {
    #[serde(default = "zero_distance")]
    pub fog_start: Number,
    #[serde(default = "zero_distance")]
    pub fog_end: Number,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

fn zero_distance() -> Number {
    Number::from(0)
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            fog_start: zero_distance(),
            fog_end: zero_distance(),
            extra: ExtraFields::new(),
        }
    }
}

/// Instruction shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Objective {
    #[serde(default)]
    pub sender: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub feedback_text: String,
    #[serde(default)]
    pub pos_feedback: i64,
    #[serde(default)]
    pub neg_feedback: i64,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Objective {
    /// Blank, incomplete objective sent by the instruction giver.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            sender: crate::constants::OBJECTIVE_SENDER,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TurnState {
    #[serde(default)]
    pub turn: i64,
    #[serde(default)]
    pub moves_remaining: i64,
    #[serde(default)]
    pub turns_left: i64,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Axial hex coordinate (`a`, `r`, `c`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HexLocation {
    #[serde(default)]
    pub a: i64,
    #[serde(default)]
    pub r: i64,
    #[serde(default)]
    pub c: i64,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl HexLocation {
    #[must_use]
    pub fn new(a: i64, r: i64, c: i64) -> Self {
        Self {
            a,
            r,
            c,
            extra: ExtraFields::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Actor {
    #[serde(default)]
    pub location: HexLocation,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ActorState {
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One puzzle board instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Scenario {
    #[serde(default)]
    pub prop_update: PropUpdate,
    #[serde(default)]
    pub map: MapSettings,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub turn_state: TurnState,
    #[serde(default)]
    pub actor_state: ActorState,
    #[serde(default)]
    pub target_card_ids: Vec<CardId>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Scenario {
    /// Parse a scenario document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a scenario.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Render the scenario as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.prop_update.props
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.prop_update.props.iter().find(|card| card.id == id)
    }

    /// Cards listed in `target_card_ids`, in id order.
    pub fn target_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.target_card_ids.iter().filter_map(|id| self.card(*id))
    }

    /// Text of the active objective, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.objectives.first().map(|objective| objective.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template() -> Value {
        json!({
            "prop_update": {
                "props": [
                    {
                        "id": 4,
                        "prop_type": 2,
                        "card_init": {"color": 3, "shape": 5, "count": 2, "selected": true, "hidden": false, "border": 1}
                    }
                ],
                "frame": 9
            },
            "map": {"fog_start": 13, "fog_end": 20, "rows": 25, "cols": 25},
            "objectives": [],
            "turn_state": {"turn": 7, "moves_remaining": 3, "turns_left": 5, "sender": 1},
            "actor_state": {"actors": [{"actor_id": 21, "location": {"a": 0, "r": 4, "c": 11}}]},
            "live_feedback": [1, 2, 3]
        })
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let scenario: Scenario = serde_json::from_value(template()).unwrap();
        assert_eq!(scenario.cards().len(), 1);
        assert_eq!(scenario.cards()[0].card_init.extra["border"], json!(1));
        assert_eq!(scenario.extra["live_feedback"], json!([1, 2, 3]));

        let rendered = scenario.to_json_pretty().unwrap();
        let reparsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(reparsed["prop_update"]["frame"], json!(9));
        assert_eq!(reparsed["prop_update"]["props"][0]["prop_type"], json!(2));
        assert_eq!(reparsed["map"]["rows"], json!(25));
        assert_eq!(reparsed["turn_state"]["sender"], json!(1));
        assert_eq!(reparsed["actor_state"]["actors"][0]["actor_id"], json!(21));
        assert_eq!(Scenario::from_json(&rendered).unwrap(), scenario);
    }

    #[test]
    fn fog_numbers_keep_their_json_shape() {
        let scenario: Scenario = serde_json::from_value(template()).unwrap();
        assert_eq!(scenario.map.fog_start, Number::from(13));
        let rendered = scenario.to_json_pretty().unwrap();
        assert!(rendered.contains("\"fog_start\": 13,"), "{rendered}");
        assert!(!rendered.contains("13.0"));

        let mut fractional = template();
        fractional["map"]["fog_end"] = json!(20.5);
        let scenario: Scenario = serde_json::from_value(fractional).unwrap();
        assert_eq!(scenario.map.fog_end.as_f64(), Some(20.5));
    }

    #[test]
    fn missing_targets_default_to_empty() {
        let scenario: Scenario = serde_json::from_value(template()).unwrap();
        assert!(scenario.target_card_ids.is_empty());
        assert!(scenario.instructions().is_none());
    }

    #[test]
    fn reset_to_keeps_extra_fields() {
        let scenario: Scenario = serde_json::from_value(template()).unwrap();
        let mut state = scenario.cards()[0].card_init.clone();
        let props = CardProperties::new(1, 1, 1);
        state.reset_to(props);
        assert_eq!(state.properties(), props);
        assert!(!state.selected && !state.hidden);
        assert_eq!(state.extra["border"], json!(1));
    }
}
