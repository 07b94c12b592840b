//! Turn order.

use tracing::debug;

use crate::core::{GameState, PlayerId};
use crate::scoring;

/// First active seat at or after `seat`, wrapping around.
#[must_use]
pub fn first_active_from(state: &GameState, seat: usize) -> Option<PlayerId> {
    let n = state.player_count();
    (0..n)
        .map(|offset| (seat + offset) % n)
        .filter_map(|idx| state.players.get(idx))
        .find(|p| p.is_active)
        .map(|p| p.id.clone())
}

/// Next active seat strictly after `anchor`, wrapping around so that the
/// anchor itself is considered last.
#[must_use]
pub fn next_active_after(state: &GameState, anchor: Option<&PlayerId>) -> Option<PlayerId> {
    let n = state.player_count();
    if n == 0 {
        return None;
    }
    let start = anchor
        .and_then(|id| state.seat_of(id))
        .map_or(0, |seat| (seat + 1) % n);
    first_active_from(state, start)
}

/// First active seat still owing a pending action, scanning from the chain
/// anchor (inclusive) or else from the current player.
#[must_use]
pub fn pending_holder_from_anchor(state: &GameState) -> Option<PlayerId> {
    let n = state.player_count();
    let start = state
        .turn_order_base_id
        .as_ref()
        .or(state.current_player_id.as_ref())
        .and_then(|id| state.seat_of(id))
        .unwrap_or(0);
    (0..n)
        .map(|offset| (start + offset) % n)
        .filter_map(|idx| state.players.get(idx))
        .find(|p| p.is_active && p.has_pending())
        .map(|p| p.id.clone())
}

/// Hand the turn to the next active player.
///
/// Order resumes after `turn_order_base_id` when an action chain set one,
/// otherwise after the current player. The anchor is consumed. With no
/// active player left the round ends.
pub fn advance_turn(state: &mut GameState) {
    let anchor = state
        .turn_order_base_id
        .take()
        .or_else(|| state.current_player_id.clone());

    match next_active_after(state, anchor.as_ref()) {
        Some(next) => {
            debug!(from = ?anchor, to = %next, "advancing turn");
            state.current_player_id = Some(next);
        }
        None => {
            state.current_player_id = None;
            scoring::end_round(state);
        }
    }
}
