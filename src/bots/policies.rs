//! Reference decision providers.
//!
//! Neither of these tries to play well; they exist so a game can run to the
//! end without a human.

use super::{DecisionProvider, Move, TargetRequest};
use crate::cards::{ActionKind, CardKind};
use crate::core::{GameRng, Player, PlayerId};
use crate::view::TableView;

/// Coin-flip moves and uniform targets.
#[derive(Clone, Debug)]
pub struct RandomBot {
    /// Probability of choosing HIT.
    pub hit_probability: f64,
}

impl Default for RandomBot {
    fn default() -> Self {
        Self { hit_probability: 0.5 }
    }
}

impl DecisionProvider for RandomBot {
    fn decide_move(&self, _player: &Player, _view: &TableView, rng: &mut GameRng) -> Move {
        if rng.chance(self.hit_probability) {
            Move::Hit
        } else {
            Move::Stay
        }
    }

    fn decide_target(
        &self,
        _player: &Player,
        _view: &TableView,
        request: &TargetRequest,
        rng: &mut GameRng,
    ) -> Option<PlayerId> {
        rng.pick(&request.valid_targets).cloned()
    }
}

/// Hits until the hand is worth `stay_at` points.
///
/// Harmful cards (Lock, TurnThree) go to the leading opponent when
/// possible; a LifeSaver goes to the weakest one.
#[derive(Clone, Debug)]
pub struct ThresholdBot {
    pub stay_at: u32,
}

impl Default for ThresholdBot {
    fn default() -> Self {
        Self { stay_at: 20 }
    }
}

impl DecisionProvider for ThresholdBot {
    fn decide_move(&self, player: &Player, view: &TableView, _rng: &mut GameRng) -> Move {
        let projected = view.seat(&player.id).map_or(0, |s| s.projected_score);
        if projected >= self.stay_at {
            Move::Stay
        } else {
            Move::Hit
        }
    }

    fn decide_target(
        &self,
        player: &Player,
        view: &TableView,
        request: &TargetRequest,
        _rng: &mut GameRng,
    ) -> Option<PlayerId> {
        let others = request
            .valid_targets
            .iter()
            .filter(|id| **id != player.id)
            .filter_map(|id| view.seat(id));

        let chosen = match request.source_card.kind {
            CardKind::Action(ActionKind::LifeSaver) => others.min_by_key(|s| s.total_score),
            _ => others.max_by_key(|s| s.total_score + s.projected_score),
        };
        chosen
            .map(|s| s.id.clone())
            .or_else(|| request.valid_targets.first().cloned())
    }
}
