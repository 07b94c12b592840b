//! The dealing state machine.
//!
//! Every active seat gets one face-up card at the start of a round. Dealing
//! walks the table from the round starter, one card per empty-handed seat,
//! and pauses whenever a dealt action card has to be played first. The
//! progress lives in [`GameState::deal_status`], so the loop can be
//! re-entered after the action resolves.

use tracing::debug;

use super::advance::first_active_from;
use super::draw::{draw_one, receive};
use crate::core::{DealStatus, GameState, PlayerId, RandomSource};
use crate::ledger::LedgerAction;

/// Run dealing until it pauses or completes.
///
/// Returns the resulting status. A `Complete` deal leaves the turn with the
/// first active player at or after the round starter.
pub fn deal<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) -> DealStatus {
    if state.deal_status == DealStatus::Complete {
        return DealStatus::Complete;
    }

    loop {
        if let Some(holder) = pending_holder(state) {
            debug!(player = %holder, "dealing paused for pending action");
            state.current_player_id = Some(holder);
            state.deal_status = DealStatus::AwaitingPendingAction;
            return state.deal_status;
        }

        let Some(seat) = next_to_deal(state) else {
            break;
        };
        let Some(card) = draw_one(state, rng) else {
            debug!("deck exhausted during deal");
            break;
        };

        let label = card.kind.to_string();
        let intake = receive(state, &seat, card);
        state.log(
            &seat,
            LedgerAction::Deal,
            None,
            format!("dealt {label}{}", intake.describe()),
        );
    }

    finish(state);
    DealStatus::Complete
}

fn finish(state: &mut GameState) {
    let start = starter_seat(state);
    state.deal_status = DealStatus::Complete;
    state.turn_order_base_id = None;
    state.current_player_id = first_active_from(state, start);
    debug!(current = ?state.current_player_id, "deal complete");
}

fn starter_seat(state: &GameState) -> usize {
    state
        .round_starter_id
        .as_ref()
        .and_then(|id| state.seat_of(id))
        .unwrap_or(0)
}

/// Seats in deal order, starting at the round starter.
fn deal_order(state: &GameState) -> impl Iterator<Item = usize> {
    let n = state.player_count();
    let start = starter_seat(state);
    (0..n).map(move |offset| (start + offset) % n)
}

fn pending_holder(state: &GameState) -> Option<PlayerId> {
    deal_order(state)
        .filter_map(|idx| state.players.get(idx))
        .find(|p| p.has_pending())
        .map(|p| p.id.clone())
}

fn next_to_deal(state: &GameState) -> Option<PlayerId> {
    deal_order(state)
        .filter_map(|idx| state.players.get(idx))
        .find(|p| p.is_active && p.is_empty_handed())
        .map(|p| p.id.clone())
}
