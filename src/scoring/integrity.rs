//! Card conservation.
//!
//! Every card of the canonical deck sits in exactly one of: deck, discard
//! pile, some player's hand, some player's reserved actions. The single
//! exception is a card held in both the hand and the reserved actions of
//! the same player (pending or kept action cards).

use rustc_hash::FxHashSet;

use crate::cards::{Card, CardId, Composition, DECK_SIZE};
use crate::core::GameState;
use crate::error::IntegrityError;

/// Check that the state still holds exactly one canonical deck.
pub fn verify(state: &GameState) -> Result<(), IntegrityError> {
    let mut seen: FxHashSet<&CardId> = FxHashSet::default();
    let mut tracked: Vec<&Card> = Vec::with_capacity(DECK_SIZE);

    for card in state.deck.iter().chain(state.discard_pile.iter()) {
        claim(&mut seen, &mut tracked, card)?;
    }

    for player in &state.players {
        for card in &player.hand {
            claim(&mut seen, &mut tracked, card)?;
        }
        for card in &player.reserved_actions {
            if !player.hand.iter().any(|c| c.id == card.id) {
                claim(&mut seen, &mut tracked, card)?;
            }
        }
        for id in &player.pending_immediate_action_ids {
            let in_hand = player.hand.iter().any(|c| &c.id == id);
            if !in_hand || player.reserved(id).is_none() {
                return Err(IntegrityError::DanglingPending {
                    card: id.clone(),
                    player: player.id.to_string(),
                });
            }
        }
    }

    if tracked.len() != DECK_SIZE {
        return Err(IntegrityError::CardCount {
            expected: DECK_SIZE,
            actual: tracked.len(),
        });
    }

    let composition = Composition::of(tracked.iter().copied());
    if composition.times_two != 1 {
        return Err(IntegrityError::TimesTwoCount(composition.times_two));
    }
    if composition.fours != 4 {
        return Err(IntegrityError::FourCount(composition.fours));
    }
    if composition != Composition::canonical() {
        return Err(IntegrityError::Composition);
    }
    Ok(())
}

fn claim<'a>(
    seen: &mut FxHashSet<&'a CardId>,
    tracked: &mut Vec<&'a Card>,
    card: &'a Card,
) -> Result<(), IntegrityError> {
    if !seen.insert(&card.id) {
        return Err(IntegrityError::DuplicatedCard { card: card.id.clone() });
    }
    tracked.push(card);
    Ok(())
}
