//! # turn-seven
//!
//! A deterministic rules engine for Turn Seven, a push-your-luck card game
//! for 2 to 18 players.
//!
//! ## Design Principles
//!
//! 1. **One Transition Function**: Drivers hand a state and an [`Intent`] to
//!    [`perform_action`] and get the next state back. Invalid intents yield
//!    an unchanged copy; nothing panics and nothing returns `Err`.
//!
//! 2. **Plain Data**: `GameState` carries no closures or handles. It
//!    serializes to JSON or bincode and replays bit-for-bit, because the RNG
//!    position travels inside it.
//!
//! 3. **Bots Live Outside**: The engine never decides for a player.
//!    Decision providers are called by a driver ([`sim::Driver`]), which
//!    submits their choices as ordinary intents.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state clone via `im-rs`; a
//!   transition copies only the seats it touches.
//!
//! - **Explicit Continuations**: An interrupted TurnThree records its
//!   remaining draws next to the pending queue, and the dealing loop keeps
//!   its progress in `DealStatus`, so every pause point is data.
//!
//! ## Modules
//!
//! - `core`: Players, state, intents, RNG, configuration
//! - `cards`: Cards, the 94-card deck, shuffling
//! - `ledger`: Append-only action history
//! - `turn`: Drawing, dealing, turn order, HIT and STAY
//! - `resolver`: Lock, TurnThree and LifeSaver plays
//! - `scoring`: Hand scores, round lifecycle, card conservation
//! - `rules`: Entry points and the `RulesEngine` trait
//! - `view`, `bots`, `sim`: The decision-provider boundary and a game driver
//! - `persist`: JSON and binary snapshots

pub mod core;
pub mod cards;
pub mod ledger;
pub mod turn;
pub mod resolver;
pub mod scoring;
pub mod rules;
pub mod view;
pub mod bots;
pub mod sim;
pub mod persist;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    BotDifficulty, Continuation, DealStatus, GamePhase, GameRng, GameRngState, GameState,
    Intent, Player, PlayerConfig, PlayerId, RandomSource, ResultType, RoundResult, RulesConfig,
};

pub use crate::cards::{ActionKind, Card, CardId, CardKind, ModifierKind};

pub use crate::ledger::{Ledger, LedgerAction, LedgerEntry};

pub use crate::rules::{
    create_initial_state, create_initial_state_from_config, create_initial_state_with,
    perform_action, perform_action_with, reset_game, start_next_round, valid_targets,
    GameResult, RulesEngine, TurnSeven,
};

pub use crate::error::{ConfigError, IntegrityError, PersistError, Rejection};

pub use crate::bots::{DecisionProvider, Move, TargetRequest};
pub use crate::view::TableView;
