//! Entry points of the engine.
//!
//! Building a game ([`create_initial_state`] and friends), the transition
//! function ([`perform_action`]), round helpers, and the [`RulesEngine`]
//! trait for drivers that stay generic over the ruleset.
//!
//! Every function here is pure with respect to its input: the given state is
//! never modified and the returned state is a new value.

pub mod engine;
mod setup;
mod transition;

pub use engine::{GameResult, RulesEngine, TurnSeven};
pub use setup::{create_initial_state, create_initial_state_from_config, create_initial_state_with};
pub use transition::{perform_action, perform_action_with, reset_game, start_next_round};

pub use crate::resolver::valid_targets;
