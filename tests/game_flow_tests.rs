//! Whole-turn behavior through the public transition function.

mod common;

use common::{id, init_tracing, table};
use turn_seven::scoring::integrity;
use turn_seven::{
    create_initial_state, perform_action, reset_game, start_next_round, CardKind, GamePhase,
    Intent, LedgerAction, ModifierKind, ResultType,
};

const X2: CardKind = CardKind::Modifier(ModifierKind::Times2);
const PLUS4: CardKind = CardKind::Modifier(ModifierKind::Plus4);

fn n(v: u8) -> CardKind {
    CardKind::Number(v)
}

#[test]
fn test_input_state_is_never_mutated() {
    init_tracing();
    let state = create_initial_state(&["Ada", "Bob", "Cy"], 1).unwrap();
    let before = state.clone();
    let current = state.current_player_id.clone().unwrap();

    let _ = perform_action(&state, &Intent::hit(current.clone()));
    let _ = perform_action(&state, &Intent::stay(current));
    assert_eq!(state, before);
}

#[test]
fn test_rejected_intent_returns_equal_state() {
    init_tracing();
    let state = table(3, &[&[n(3)], &[n(4)], &[n(5)]], &[n(6)]);

    let out_of_turn = perform_action(&state, &Intent::hit("p2"));
    assert_eq!(out_of_turn, state);

    let next_round_mid_play = perform_action(&state, &Intent::NextRound);
    assert_eq!(next_round_mid_play, state);

    let unknown = perform_action(&state, &Intent::stay("nobody"));
    assert_eq!(unknown, state);
}

#[test]
fn test_hit_then_stay_passes_turn_in_seat_order() {
    let state = table(3, &[&[n(3)], &[n(4)], &[n(5)]], &[n(6), n(7)]);

    let state = perform_action(&state, &Intent::hit("p1"));
    assert_eq!(state.current_player_id, Some(id("p2")));
    assert_eq!(state.previous_turn_log.as_deref(), Some("drew 6"));

    let state = perform_action(&state, &Intent::stay("p2"));
    assert_eq!(state.current_player_id, Some(id("p3")));
    assert!(state.player(&id("p2")).unwrap().has_stayed);

    let state = perform_action(&state, &Intent::hit("p3"));
    assert_eq!(state.current_player_id, Some(id("p1")));
    assert!(integrity::verify(&state).is_ok());
}

#[test]
fn test_last_stay_scores_the_round() {
    let state = table(2, &[&[n(5), n(7), X2, PLUS4], &[n(10)]], &[]);

    let state = perform_action(&state, &Intent::stay("p1"));
    assert_eq!(state.game_phase, GamePhase::Playing);
    let state = perform_action(&state, &Intent::stay("p2"));

    assert_eq!(state.game_phase, GamePhase::Ended);
    assert_eq!(state.current_player_id, None);
    assert_eq!(state.player(&id("p1")).unwrap().round_score, 28);
    assert_eq!(state.player(&id("p2")).unwrap().total_score, 10);
    assert_eq!(
        state.ledger.iter().filter(|e| e.action == LedgerAction::RoundEnd).count(),
        2
    );
}

#[test]
fn test_bust_scores_zero_and_keeps_card() {
    let state = table(2, &[&[n(9), n(3)], &[n(1)]], &[n(9)]);

    let state = perform_action(&state, &Intent::hit("p1"));
    let p1 = state.player(&id("p1")).unwrap();
    assert!(p1.has_busted);
    assert_eq!(p1.hand.len(), 3);

    let state = perform_action(&state, &Intent::stay("p2"));
    assert_eq!(state.game_phase, GamePhase::Ended);
    assert_eq!(state.player(&id("p1")).unwrap().round_score, 0);
}

#[test]
fn test_turn_seven_ends_round_immediately() {
    let state = table(3, &[&[n(1), n(2), n(3), n(4), n(5), n(6)], &[n(8)], &[n(9)]], &[n(7)]);

    let state = perform_action(&state, &Intent::hit("p1"));
    assert_eq!(state.game_phase, GamePhase::Ended);
    assert_eq!(state.player(&id("p1")).unwrap().round_score, 28 + 15);
    assert_eq!(state.player(&id("p2")).unwrap().round_score, 8);
}

#[test]
fn test_round_rotation_and_previous_scores() {
    let state = table(3, &[&[n(11)], &[n(2)], &[n(6)]], &[]);
    let state = perform_action(&state, &Intent::stay("p1"));
    let state = perform_action(&state, &Intent::stay("p2"));
    let state = perform_action(&state, &Intent::stay("p3"));
    assert_eq!(state.game_phase, GamePhase::Ended);

    let round2 = start_next_round(&state);
    assert_eq!(round2.round_number, 2);
    assert_eq!(round2.round_starter_id, Some(id("p2")));
    assert_eq!(round2.game_phase, GamePhase::Playing);
    let p1 = round2.previous_round_scores.get(&id("p1")).unwrap();
    assert_eq!((p1.score, p1.total, p1.result_type), (11, 11, ResultType::Normal));
    assert_eq!(round2.player(&id("p1")).unwrap().total_score, 11);
    assert!(integrity::verify(&round2).is_ok());

    let mut round3 = round2;
    for _ in 0..100 {
        if round3.game_phase != GamePhase::Playing {
            break;
        }
        let current = round3.current_player_id.clone().unwrap();
        let intent = if round3.current_player().unwrap().has_pending() {
            let card = round3.current_player().unwrap().pending_immediate_action_ids[0].clone();
            let target = turn_seven::valid_targets(&round3, &current, &card)[0].clone();
            Intent::play(current, card, target)
        } else {
            Intent::stay(current)
        };
        round3 = perform_action(&round3, &intent);
    }
    let round3 = start_next_round(&round3);
    assert_eq!(round3.round_number, 3);
    assert_eq!(round3.round_starter_id, Some(id("p3")));
}

#[test]
fn test_game_over_and_reset() {
    let mut state = table(2, &[&[n(12)], &[n(1)]], &[]);
    state.player_mut(&id("p1")).unwrap().total_score = 190;

    let state = perform_action(&state, &Intent::stay("p1"));
    let state = perform_action(&state, &Intent::stay("p2"));
    assert_eq!(state.game_phase, GamePhase::GameOver);
    assert_eq!(state.winner_id, Some(id("p1")));

    assert_eq!(perform_action(&state, &Intent::NextRound), state);

    let fresh = reset_game(&state);
    assert_eq!(fresh.round_number, 1);
    assert_eq!(fresh.game_phase, GamePhase::Playing);
    assert_eq!(fresh.winner_id, None);
    assert!(fresh.players.iter().all(|p| p.total_score == 0));
    assert!(integrity::verify(&fresh).is_ok());
}

#[test]
fn test_convert_to_bot_any_seat_idempotent() {
    let state = table(3, &[&[n(1)], &[n(2)], &[n(3)]], &[]);

    let once = perform_action(&state, &Intent::ConvertToBot { player_id: id("p3"), difficulty: None });
    let p3 = once.player(&id("p3")).unwrap();
    assert!(p3.is_bot);
    assert!(p3.bot_difficulty.is_some());
    assert_eq!(once.current_player_id, Some(id("p1")));

    let twice = perform_action(&once, &Intent::ConvertToBot { player_id: id("p3"), difficulty: None });
    assert_eq!(twice.ledger.len(), once.ledger.len());
}

#[test]
fn test_hit_with_empty_deck_becomes_stay() {
    let mut state = table(2, &[&[n(1)], &[n(2)]], &[]);
    state.deck.clear();

    let state = perform_action(&state, &Intent::hit("p1"));
    assert!(state.player(&id("p1")).unwrap().has_stayed);
    assert_eq!(state.current_player_id, Some(id("p2")));
}
