//! Decision providers.
//!
//! The engine never decides anything on a player's behalf. A driver asks a
//! [`DecisionProvider`] what a seat wants to do and submits the answer as an
//! ordinary intent, exactly as it would for a human.
//!
//! - `decide_move`: HIT or STAY for a seat with no pending action
//! - `decide_target`: who receives a pending action card

mod policies;

pub use policies::{RandomBot, ThresholdBot};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameRng, Player, PlayerId};
use crate::view::TableView;

/// A free turn choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Hit,
    Stay,
}

/// A pending action card waiting for a target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRequest {
    /// Legal targets; never empty when handed to a provider.
    pub valid_targets: Vec<PlayerId>,
    pub source_card: Card,
}

/// Chooses moves and targets for a seat.
pub trait DecisionProvider: Send + Sync {
    /// Pick HIT or STAY.
    fn decide_move(&self, player: &Player, view: &TableView, rng: &mut GameRng) -> Move;

    /// Pick a target from `request.valid_targets`.
    ///
    /// Returning `None` or a player outside the list makes the driver fall
    /// back to the first valid target.
    fn decide_target(
        &self,
        player: &Player,
        view: &TableView,
        request: &TargetRequest,
        rng: &mut GameRng,
    ) -> Option<PlayerId>;
}
