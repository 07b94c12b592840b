//! The transition function.
//!
//! `perform_action` is the only way a game moves forward. It never fails:
//! an intent that does not apply to the state yields an unchanged copy and a
//! `warn` log line with the reason.

use tracing::{debug, warn};

use crate::core::{BotDifficulty, GamePhase, GameRng, GameState, Intent, PlayerId, RandomSource};
use crate::error::Rejection;
use crate::ledger::LedgerAction;
use crate::{resolver, scoring, turn};

/// Apply `intent` and return the next state, using the RNG embedded in the
/// state.
#[must_use]
pub fn perform_action(state: &GameState, intent: &Intent) -> GameState {
    let mut rng = GameRng::from_state(&state.rng);
    let mut next = perform_action_with(state, intent, &mut rng);
    next.rng = rng.state();
    next
}

/// Apply `intent` drawing randomness from `rng`.
///
/// The state's embedded RNG position is left untouched.
#[must_use]
pub fn perform_action_with<R: RandomSource + ?Sized>(
    state: &GameState,
    intent: &Intent,
    rng: &mut R,
) -> GameState {
    let mut next = state.clone();
    match apply(&mut next, intent, rng) {
        Ok(()) => {
            if next.game_phase == GamePhase::Playing {
                scoring::check_round_end(&mut next);
            }
            next.previous_turn_log = next.ledger.last().map(|line| line.result.clone());
            debug!(
                intent = intent.name(),
                player = ?intent.player_id(),
                phase = ?next.game_phase,
                current = ?next.current_player_id,
                "intent applied"
            );
            next
        }
        Err(reason) => {
            warn!(
                intent = intent.name(),
                player = ?intent.player_id(),
                %reason,
                "intent ignored"
            );
            state.clone()
        }
    }
}

/// Start the next round (same as a NEXT_ROUND intent).
#[must_use]
pub fn start_next_round(state: &GameState) -> GameState {
    perform_action(state, &Intent::NextRound)
}

/// Start over at round 1 with the same seats.
#[must_use]
pub fn reset_game(state: &GameState) -> GameState {
    let mut rng = GameRng::from_state(&state.rng);
    let mut next = state.clone();
    scoring::reset_game(&mut next, &mut rng);
    next.rng = rng.state();
    next
}

fn apply<R: RandomSource + ?Sized>(
    state: &mut GameState,
    intent: &Intent,
    rng: &mut R,
) -> Result<(), Rejection> {
    match intent {
        Intent::Hit { player_id } => turn::hit(state, rng, player_id),
        Intent::Stay { player_id } => turn::stay(state, player_id),
        Intent::PlayAction {
            player_id,
            card_id,
            target_id,
        } => resolver::play_action(state, rng, player_id, card_id, target_id).map(|_| ()),
        Intent::NextRound => {
            if scoring::start_next_round(state, rng) {
                Ok(())
            } else {
                Err(Rejection::PhaseClosed(state.game_phase))
            }
        }
        Intent::ConvertToBot {
            player_id,
            difficulty,
        } => convert_to_bot(state, player_id, *difficulty),
    }
}

fn convert_to_bot(
    state: &mut GameState,
    player_id: &PlayerId,
    difficulty: Option<BotDifficulty>,
) -> Result<(), Rejection> {
    if state.game_phase != GamePhase::Playing {
        return Err(Rejection::PhaseClosed(state.game_phase));
    }
    let seat = state
        .player_mut(player_id)
        .ok_or_else(|| Rejection::UnknownPlayer(player_id.clone()))?;
    let already = seat.is_bot;
    seat.is_bot = true;
    seat.bot_difficulty = difficulty.or(seat.bot_difficulty).or(Some(BotDifficulty::default()));
    if !already {
        state.log(player_id, LedgerAction::System, None, "handed over to a bot");
    }
    Ok(())
}
