//! Action resolver.
//!
//! Resolves an explicit PLAY_ACTION: a queued Lock, TurnThree or surplus
//! LifeSaver aimed at a target.
//!
//! ## Chains
//!
//! A TurnThree can draw another action card for its target. The draw
//! sequence then stops, the new card is queued for the target, and the
//! turn moves to the target while `turn_order_base_id` remembers who
//! started the chain. Unplayed draws are kept as a [`Continuation`] on the
//! interrupted TurnThree, which its new holder replays on themselves.
//! Play returns to whichever earlier link still owes a card, and only once
//! no pending action is left does play resume after the anchor.
//!
//! [`Continuation`]: crate::core::Continuation

mod effects;
mod turn_three;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{ActionKind, CardId};
use crate::core::{DealStatus, GamePhase, GameState, PlayerId, RandomSource};
use crate::error::Rejection;
use crate::turn;

/// Outcome of resolving one action card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The card is fully resolved.
    Complete,
    /// A drawn action card moved the turn to this player.
    Interrupted(PlayerId),
    /// The round ended during resolution.
    RoundOver,
}

/// A validated PLAY_ACTION.
struct Play {
    actor: PlayerId,
    card_id: CardId,
    kind: ActionKind,
    target: PlayerId,
    resume_draws: Option<u8>,
}

/// Play a pending action card from `actor` on `target`.
pub fn play_action<R: RandomSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    actor: &PlayerId,
    card_id: &CardId,
    target: &PlayerId,
) -> Result<Resolution, Rejection> {
    let play = validate(state, actor, card_id, target)?;

    let Some(card) = state
        .player_mut(&play.actor)
        .and_then(|p| p.take_card(&play.card_id))
    else {
        return Err(Rejection::CardNotHeld(play.card_id));
    };
    debug!(
        actor = %play.actor,
        on = %play.target,
        card = %play.card_id,
        resume = ?play.resume_draws,
        "playing action"
    );

    let resolution = match play.kind {
        ActionKind::Lock => effects::lock(state, &play.actor, &play.target, card),
        ActionKind::LifeSaver => effects::give_life_saver(state, &play.actor, &play.target, card),
        ActionKind::TurnThree => {
            let draws = play.resume_draws.unwrap_or(state.rules.turn_three_draws);
            turn_three::resolve(state, rng, &play.actor, &play.target, card, draws)
        }
    };

    if resolution == Resolution::Complete {
        after_resolution(state, rng, &play.actor);
    }
    Ok(resolution)
}

fn validate(
    state: &GameState,
    actor: &PlayerId,
    card_id: &CardId,
    target: &PlayerId,
) -> Result<Play, Rejection> {
    if state.game_phase != GamePhase::Playing {
        return Err(Rejection::PhaseClosed(state.game_phase));
    }
    if !state.is_current(actor) {
        return Err(Rejection::NotCurrentPlayer(actor.clone()));
    }
    let holder = state
        .player(actor)
        .ok_or_else(|| Rejection::UnknownPlayer(actor.clone()))?;
    let kind = holder
        .reserved(card_id)
        .and_then(|c| c.action_kind())
        .ok_or_else(|| Rejection::CardNotHeld(card_id.clone()))?;
    if !holder.is_pending(card_id) {
        return Err(Rejection::CardNotPending(card_id.clone()));
    }
    if holder.pending_immediate_action_ids.first() != Some(card_id) {
        return Err(Rejection::OutOfOrder(card_id.clone()));
    }

    let receiver = state
        .player(target)
        .ok_or_else(|| Rejection::UnknownPlayer(target.clone()))?;
    if !receiver.is_active {
        return Err(Rejection::Inactive(target.clone()));
    }
    if kind == ActionKind::LifeSaver && target == actor && has_other_active(state, actor) {
        return Err(Rejection::SelfLifeSaver);
    }

    let resume_draws = holder.continuation(card_id).map(|c| c.remaining_draws);
    if resume_draws.is_some() && target != actor {
        return Err(Rejection::ResumeTargetsHolder);
    }

    Ok(Play {
        actor: actor.clone(),
        card_id: card_id.clone(),
        kind,
        target: target.clone(),
        resume_draws,
    })
}

/// Decide who acts next once a card is fully resolved.
///
/// The holder keeps the turn while they still owe pending actions. An
/// unfinished deal resumes next. Any other link of the chain still owing
/// an action goes next, keeping the anchor. Only then does normal order
/// continue from the anchor.
fn after_resolution<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R, holder: &PlayerId) {
    if state.game_phase != GamePhase::Playing {
        return;
    }
    if state.player(holder).is_some_and(|p| p.has_pending()) {
        state.current_player_id = Some(holder.clone());
        return;
    }
    if state.deal_status != DealStatus::Complete {
        turn::deal(state, rng);
        return;
    }
    if let Some(owed) = turn::pending_holder_from_anchor(state) {
        debug!(player = %owed, anchor = ?state.turn_order_base_id, "chain resumes on pending holder");
        state.current_player_id = Some(owed);
        return;
    }
    turn::advance_turn(state);
}

/// Legal targets for playing `card_id` from `actor`'s pending queue.
///
/// Empty unless the card is at the head of the queue.
#[must_use]
pub fn valid_targets(state: &GameState, actor: &PlayerId, card_id: &CardId) -> Vec<PlayerId> {
    let Some(holder) = state.player(actor) else {
        return Vec::new();
    };
    if holder.pending_immediate_action_ids.first() != Some(card_id) {
        return Vec::new();
    }
    let Some(kind) = holder.reserved(card_id).and_then(|c| c.action_kind()) else {
        return Vec::new();
    };
    if holder.continuation(card_id).is_some() {
        return if holder.is_active {
            vec![actor.clone()]
        } else {
            Vec::new()
        };
    }
    if kind == ActionKind::LifeSaver && has_other_active(state, actor) {
        return state
            .active_players()
            .filter(|p| &p.id != actor)
            .map(|p| p.id.clone())
            .collect();
    }
    state.active_players().map(|p| p.id.clone()).collect()
}

/// A LifeSaver may only land on its holder when nobody else could take it.
fn has_other_active(state: &GameState, actor: &PlayerId) -> bool {
    state.active_players().any(|p| &p.id != actor)
}
