//! Game configuration types.
//!
//! Drivers configure a game at construction time by providing:
//! - `RulesConfig`: tunable rule constants (win score, bonuses, table size)
//! - `PlayerConfig`: one entry per seat, in turn order
//!
//! The rules config is copied into the `GameState`, so a persisted state
//! carries the rules it was created with.

use serde::{Deserialize, Serialize};

use super::player::{BotDifficulty, PlayerId};
use crate::error::ConfigError;

/// Rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    /// Total score that ends the game.
    pub win_score: u32,

    /// Minimum seats.
    pub min_players: usize,

    /// Maximum seats.
    pub max_players: usize,

    /// Distinct Number ranks that end the round immediately.
    pub turn_seven_unique: usize,

    /// Flat bonus for reaching `turn_seven_unique`.
    pub turn_seven_bonus: u32,

    /// Cards drawn by a TurnThree.
    pub turn_three_draws: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            win_score: 200,
            min_players: 2,
            max_players: 18,
            turn_seven_unique: 7,
            turn_seven_bonus: 15,
            turn_three_draws: 3,
        }
    }
}

impl RulesConfig {
    /// Create a config with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning total.
    #[must_use]
    pub fn with_win_score(mut self, score: u32) -> Self {
        self.win_score = score;
        self
    }

    /// Set the allowed seat range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the Turn-7 bonus.
    #[must_use]
    pub fn with_turn_seven_bonus(mut self, bonus: u32) -> Self {
        self.turn_seven_bonus = bonus;
        self
    }

    /// Set how many cards a TurnThree draws.
    #[must_use]
    pub fn with_turn_three_draws(mut self, draws: u8) -> Self {
        self.turn_three_draws = draws;
        self
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < 1 || self.min_players > self.max_players {
            return Err(ConfigError::InvalidRules("player range is empty"));
        }
        if self.win_score == 0 {
            return Err(ConfigError::InvalidRules("win score must be positive"));
        }
        if self.turn_seven_unique == 0 || self.turn_seven_unique > 13 {
            return Err(ConfigError::InvalidRules("turn seven count must be in 1..=13"));
        }
        if self.turn_three_draws == 0 {
            return Err(ConfigError::InvalidRules("turn three must draw at least one card"));
        }
        Ok(())
    }

    /// Check a seat count against the configured range.
    pub fn check_player_count(&self, count: usize) -> Result<(), ConfigError> {
        if (self.min_players..=self.max_players).contains(&count) {
            Ok(())
        } else {
            Err(ConfigError::PlayerCount {
                min: self.min_players,
                max: self.max_players,
                actual: count,
            })
        }
    }
}

/// Seat configuration supplied by the driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub bot_difficulty: Option<BotDifficulty>,
}

impl PlayerConfig {
    /// A human seat.
    pub fn human(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            is_bot: false,
            bot_difficulty: None,
        }
    }

    /// A bot seat.
    pub fn bot(id: impl Into<String>, name: impl Into<String>, difficulty: BotDifficulty) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            is_bot: true,
            bot_difficulty: Some(difficulty),
        }
    }

    /// Seats named after the given names, with ids `p1`, `p2`, ...
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Vec<Self> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Self::human(format!("p{}", i + 1), name.as_ref()))
            .collect()
    }
}
