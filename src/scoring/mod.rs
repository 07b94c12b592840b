//! Scoring and round lifecycle.
//!
//! - [`score`]: hand scoring
//! - [`lifecycle`]: round end, next round, reset
//! - [`integrity`]: card-conservation check run at round boundaries

pub mod integrity;
pub mod lifecycle;
pub mod score;

pub use lifecycle::{check_round_end, end_round, reset_game, start_next_round};
pub use score::{reached_turn_seven, result_type, score_hand};
