//! HIT and STAY.
//!
//! Both validate the intent first and only then touch the state, so a
//! rejection leaves nothing half-applied.

use tracing::debug;

use super::advance::advance_turn;
use super::draw::{draw_one, receive, Intake};
use crate::core::{GamePhase, GameState, Player, PlayerId, RandomSource};
use crate::error::Rejection;
use crate::ledger::LedgerAction;
use crate::scoring;

/// Common preconditions for HIT and STAY.
pub(crate) fn check_turn<'a>(
    state: &'a GameState,
    player_id: &PlayerId,
) -> Result<&'a Player, Rejection> {
    if state.game_phase != GamePhase::Playing {
        return Err(Rejection::PhaseClosed(state.game_phase));
    }
    if !state.is_current(player_id) {
        return Err(Rejection::NotCurrentPlayer(player_id.clone()));
    }
    let player = state
        .player(player_id)
        .ok_or_else(|| Rejection::UnknownPlayer(player_id.clone()))?;
    if !player.is_active {
        return Err(Rejection::Inactive(player_id.clone()));
    }
    Ok(player)
}

/// Draw one card for the current player.
///
/// With nothing left to draw the HIT becomes a STAY.
pub fn hit<R: RandomSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    player_id: &PlayerId,
) -> Result<(), Rejection> {
    if check_turn(state, player_id)?.has_pending() {
        return Err(Rejection::PendingActions(player_id.clone()));
    }

    let Some(card) = draw_one(state, rng) else {
        debug!(player = %player_id, "nothing to draw, hit becomes stay");
        return stay(state, player_id);
    };

    let label = card.kind.to_string();
    let intake = receive(state, player_id, card);
    debug!(player = %player_id, card = %label, ?intake, "hit");
    state.log(
        player_id,
        LedgerAction::Hit,
        None,
        format!("drew {label}{}", intake.describe()),
    );

    match intake {
        Intake::Queued(_) => {}
        Intake::TurnSeven => {
            scoring::end_round(state);
        }
        Intake::Added | Intake::Saved | Intake::Busted | Intake::Discarded => {
            advance_turn(state);
        }
    }
    Ok(())
}

/// Bank the hand and pass the turn.
pub fn stay(state: &mut GameState, player_id: &PlayerId) -> Result<(), Rejection> {
    if check_turn(state, player_id)?.has_pending() {
        return Err(Rejection::PendingActions(player_id.clone()));
    }

    if let Some(player) = state.player_mut(player_id) {
        player.stay();
    }
    state.log(player_id, LedgerAction::Stay, None, "stayed");
    advance_turn(state);
    Ok(())
}
