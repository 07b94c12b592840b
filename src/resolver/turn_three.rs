//! TurnThree: the target draws up to three cards, one at a time.
//!
//! Each draw is checked in order for a bust, then Turn-7, then an action
//! card that interrupts the sequence.

use smallvec::SmallVec;
use tracing::debug;

use super::Resolution;
use crate::cards::Card;
use crate::core::{Continuation, GameState, PlayerId, RandomSource};
use crate::ledger::LedgerAction;
use crate::scoring;
use crate::turn::{draw_one, receive, Intake};

pub(super) fn resolve<R: RandomSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    actor: &PlayerId,
    target: &PlayerId,
    card: Card,
    draws: u8,
) -> Resolution {
    let mut drawn: SmallVec<[String; 3]> = SmallVec::new();

    for done in 1..=draws {
        let Some(next) = draw_one(state, rng) else {
            debug!(player = %target, "deck exhausted during Turn Three");
            break;
        };
        let label = next.kind.to_string();
        let intake = receive(state, target, next);
        drawn.push(format!("{label}{}", intake.describe()));

        match intake {
            Intake::Busted => {
                state.discard(card);
                let dropped = state
                    .player_mut(target)
                    .map(|p| p.drain_pending())
                    .unwrap_or_default();
                state.discard_all(dropped);
                log(state, actor, target, &drawn);
                return Resolution::Complete;
            }
            Intake::TurnSeven => {
                keep_in_hand(state, target, card);
                log(state, actor, target, &drawn);
                scoring::end_round(state);
                return Resolution::RoundOver;
            }
            Intake::Queued(kind) => {
                let remaining = draws - done;
                match state.player_mut(target) {
                    Some(holder) if remaining > 0 => {
                        holder.continuations.push(Continuation {
                            card_id: card.id.clone(),
                            remaining_draws: remaining,
                        });
                        holder.queue_pending(card);
                    }
                    Some(holder) => holder.hand.push(card),
                    None => state.discard(card),
                }
                debug!(player = %target, drew = ?kind, remaining, "Turn Three interrupted");
                log(state, actor, target, &drawn);
                state.current_player_id = Some(target.clone());
                if state.turn_order_base_id.is_none() {
                    state.turn_order_base_id = Some(actor.clone());
                }
                return Resolution::Interrupted(target.clone());
            }
            Intake::Added | Intake::Saved | Intake::Discarded => {}
        }
    }

    keep_in_hand(state, target, card);
    log(state, actor, target, &drawn);
    Resolution::Complete
}

fn keep_in_hand(state: &mut GameState, target: &PlayerId, card: Card) {
    match state.player_mut(target) {
        Some(p) => p.hand.push(card),
        None => state.discard(card),
    }
}

fn log(state: &mut GameState, actor: &PlayerId, target: &PlayerId, drawn: &[String]) {
    let result = if drawn.is_empty() {
        "played Turn Three: nothing to draw".to_string()
    } else {
        format!("played Turn Three: {}", drawn.join(", "))
    };
    state.log(actor, LedgerAction::Action, Some(target), result);
}
