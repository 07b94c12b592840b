//! Core engine types: players, state, intents, RNG, configuration.
//!
//! This module contains the plain-data building blocks every other module
//! mutates. Nothing here knows the rules of the game.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Intent;
pub use config::{PlayerConfig, RulesConfig};
pub use player::{BotDifficulty, Continuation, Player, PlayerId};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::{DealStatus, GamePhase, GameState, ResultType, RoundResult};
