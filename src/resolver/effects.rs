//! Lock and LifeSaver.

use super::Resolution;
use crate::cards::Card;
use crate::core::{GameState, PlayerId};
use crate::ledger::LedgerAction;

/// Force the target to stay and shut them out of the round.
///
/// The Lock card lands in the target's hand; whatever the target still had
/// queued is discarded unplayed.
pub(super) fn lock(state: &mut GameState, actor: &PlayerId, target: &PlayerId, card: Card) -> Resolution {
    let dropped = match state.player_mut(target) {
        Some(locked) => {
            locked.has_stayed = true;
            locked.is_locked = true;
            locked.is_active = false;
            locked.hand.push(card);
            locked.drain_pending()
        }
        None => {
            state.discard(card);
            Vec::new()
        }
    };

    let result = if dropped.is_empty() {
        "played Lock".to_string()
    } else {
        format!("played Lock ({} pending discarded)", dropped.len())
    };
    state.discard_all(dropped);
    state.log(actor, LedgerAction::Action, Some(target), result);
    Resolution::Complete
}

/// Pass a surplus LifeSaver on.
///
/// A target that already holds one cannot take a second; the card is
/// discarded instead.
pub(super) fn give_life_saver(
    state: &mut GameState,
    actor: &PlayerId,
    target: &PlayerId,
    card: Card,
) -> Resolution {
    let rejected = match state.player_mut(target) {
        Some(receiver) if !receiver.has_life_saver => {
            receiver.keep_life_saver(card);
            None
        }
        _ => Some(card),
    };

    let result = match rejected {
        None => "gave Life Saver".to_string(),
        Some(card) => {
            state.discard(card);
            "gave Life Saver (already held, discarded)".to_string()
        }
    };
    state.log(actor, LedgerAction::Action, Some(target), result);
    Resolution::Complete
}
