//! Centralized constants for scenario resampling.
//!
//! Board limits, property domains and the vocabularies used to render
//! objectives live here so that the puzzle shape can only change through
//! reviewed code rather than through template files.

// Board limits -------------------------------------------------------------
/// Maximum number of cards kept on a generated board.
pub const MAX_CARDS: usize = 12;
/// Number of cards forming the solution set.
pub const TARGET_SET_SIZE: usize = 3;

// Property domains ---------------------------------------------------------
pub const COLOR_MIN: u8 = 1;
pub const COLOR_MAX: u8 = 7;
pub const SHAPE_MIN: u8 = 1;
pub const SHAPE_MAX: u8 = 7;
pub const COUNT_MIN: u8 = 1;
pub const COUNT_MAX: u8 = 3;

// Cleaned session state ----------------------------------------------------
pub(crate) const CLEAN_TURN: i64 = 1;
pub(crate) const CLEAN_MOVES_REMAINING: i64 = 10_000;
pub(crate) const CLEAN_TURNS_LEFT: i64 = 0;
pub(crate) const OBJECTIVE_SENDER: i64 = 2;
pub(crate) const NEUTRAL_LOCATION: i64 = 100;

// Fog presets --------------------------------------------------------------
pub(crate) const EASY_FOG_START: i64 = 30;
pub(crate) const EASY_FOG_END: i64 = 31;
pub(crate) const HARD_FOG_START: i64 = 2;
pub(crate) const HARD_FOG_END: i64 = 4;

// Vocabularies -------------------------------------------------------------
/// Colour words indexed by `color - 1`.
pub const COLOR_WORDS: [&str; 7] = ["black", "blue", "green", "orange", "pink", "red", "yellow"];

/// Singular and plural shape words indexed by `shape - 1`.
pub const SHAPE_WORDS: [(&str, &str); 7] = [
    ("plus", "plusses"),
    ("circle", "circles"),
    ("heart", "hearts"),
    ("diamond", "diamonds"),
    ("square", "squares"),
    ("star", "stars"),
    ("triangle", "triangles"),
];

/// Number words indexed by `count - 1`.
pub const NUMBER_WORDS: [&str; 3] = ["one", "two", "three"];

// File naming --------------------------------------------------------------
/// Prefix identifying template scenario files.
pub const TEMPLATE_PREFIX: &str = "scenario_state";
pub const DEFAULT_SOURCE_DIR: &str = "scenarios_src";
pub const DEFAULT_OUTPUT_DIR: &str = "scenarios_sampled";
