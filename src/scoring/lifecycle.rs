//! Round lifecycle: end detection, scoring, transition and reset.

use rustc_hash::FxHashSet;
use tracing::{debug, error, info};

use super::integrity;
use super::score::{reached_turn_seven, result_type, score_hand};
use crate::cards::{shuffled_deck, Card, CardId};
use crate::core::{DealStatus, GamePhase, GameState, Player, RandomSource, ResultType, RoundResult};
use crate::ledger::{Ledger, LedgerAction};
use crate::turn;

/// End the round if it is over.
///
/// A round is over when someone holds enough distinct ranks, or when nobody
/// is active. Returns `true` when the round is (now) not in play.
pub fn check_round_end(state: &mut GameState) -> bool {
    if state.game_phase != GamePhase::Playing {
        return true;
    }
    let turn_seven = state
        .players
        .iter()
        .any(|p| reached_turn_seven(p, &state.rules));
    if turn_seven || !state.any_active() {
        end_round(state);
        return true;
    }
    false
}

/// Score the round and move to `Ended` or `GameOver`.
///
/// Safe to call twice; only the first call scores.
pub fn end_round(state: &mut GameState) {
    if state.game_phase != GamePhase::Playing {
        return;
    }

    let rules = state.rules.clone();
    for idx in 0..state.players.len() {
        let Some(player) = state.players.get_mut(idx) else {
            continue;
        };
        player.round_score = score_hand(player, &rules);
        player.total_score += player.round_score;
    }

    let lines: Vec<_> = state
        .players
        .iter()
        .map(|p| {
            let outcome = match result_type(p, &rules) {
                ResultType::Bust => " (bust)",
                ResultType::TurnSeven => " (Turn Seven)",
                ResultType::Normal => "",
            };
            (p.id.clone(), format!("scored {}{outcome}, total {}", p.round_score, p.total_score))
        })
        .collect();
    for (id, line) in lines {
        state.log(&id, LedgerAction::RoundEnd, None, line);
    }

    state.current_player_id = None;
    state.turn_order_base_id = None;

    let leader = state
        .players
        .iter()
        .filter(|p| p.total_score >= rules.win_score)
        .fold(None::<&Player>, |best, p| match best {
            Some(b) if b.total_score >= p.total_score => Some(b),
            _ => Some(p),
        })
        .map(|p| p.id.clone());

    match leader {
        Some(winner) => {
            info!(round = state.round_number, winner = %winner, "game over");
            let name = state.name_of(&winner);
            state.log_system(format!("{name} wins the game"));
            state.winner_id = Some(winner);
            state.game_phase = GamePhase::GameOver;
        }
        None => {
            info!(round = state.round_number, "round ended");
            state.game_phase = GamePhase::Ended;
        }
    }
}

/// Start the next round from an `Ended` state.
///
/// Returns `false` (and changes nothing) in any other phase.
pub fn start_next_round<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) -> bool {
    if state.game_phase != GamePhase::Ended {
        return false;
    }

    let rules = state.rules.clone();
    state.previous_round_scores = state
        .players
        .iter()
        .map(|p| {
            let result = RoundResult {
                score: p.round_score,
                total: p.total_score,
                result_type: result_type(p, &rules),
            };
            (p.id.clone(), result)
        })
        .collect();

    collect_table(state);
    if state.deck.is_empty() && state.discard_pile.is_empty() {
        debug!("no cards left anywhere, building a fresh deck");
        state.deck = shuffled_deck(rng).into_iter().collect();
    }

    state.players = state.players.iter().map(|p| p.for_next_round()).collect();
    state.round_number += 1;
    let n = state.player_count();
    let starter_seat = (state.round_number as usize - 1) % n.max(1);
    state.round_starter_id = state.players.get(starter_seat).map(|p| p.id.clone());
    state.current_player_id = state.round_starter_id.clone();
    state.turn_order_base_id = None;
    state.winner_id = None;
    state.game_phase = GamePhase::Playing;
    state.deal_status = DealStatus::Dealing;

    info!(round = state.round_number, starter = ?state.round_starter_id, "round started");
    state.log_system(format!("Round {} begins", state.round_number));
    begin_round(state, rng);
    true
}

/// Back to round 1 with the same seats and zeroed totals.
pub fn reset_game<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    state.players = state
        .players
        .iter()
        .map(|p| {
            let mut fresh = p.for_next_round();
            fresh.total_score = 0;
            fresh
        })
        .collect();
    state.deck = shuffled_deck(rng).into_iter().collect();
    state.discard_pile = im::Vector::new();
    state.round_number = 1;
    state.round_starter_id = state.players.front().map(|p| p.id.clone());
    state.current_player_id = state.round_starter_id.clone();
    state.turn_order_base_id = None;
    state.winner_id = None;
    state.previous_round_scores = im::OrdMap::new();
    state.previous_turn_log = None;
    state.ledger = Ledger::new();
    state.game_phase = GamePhase::Playing;
    state.deal_status = DealStatus::Dealing;

    info!(players = state.player_count(), "game reset");
    state.log_system("Game reset");
    begin_round(state, rng);
}

/// Deal, settle an immediately finished round, and check card conservation.
pub(crate) fn begin_round<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    turn::deal(state, rng);
    check_round_end(state);
    if let Err(err) = integrity::verify(state) {
        error!(round = state.round_number, %err, "card integrity violated");
        debug_assert!(false, "card integrity violated: {err}");
    }
}

/// Move every hand and reserved card to the discard pile, each id once.
fn collect_table(state: &mut GameState) {
    let mut seen: FxHashSet<CardId> =
        state.discard_pile.iter().map(|c| c.id.clone()).collect();
    let mut collected: Vec<Card> = Vec::new();
    for player in &state.players {
        for card in player.hand.iter().chain(player.reserved_actions.iter()) {
            if seen.insert(card.id.clone()) {
                collected.push(card.clone());
            }
        }
    }
    debug!(cards = collected.len(), "collected table into discard");
    state.discard_all(collected);
}
