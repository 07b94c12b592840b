//! Shared fixtures for integration tests.

#![allow(dead_code)]

use turn_seven::cards::build_deck;
use turn_seven::{Card, CardKind, DealStatus, GameState, Player, PlayerId, RulesConfig};

/// Route engine logs to the test harness; `RUST_LOG=debug` shows them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn id(s: &str) -> PlayerId {
    PlayerId::new(s)
}

/// Remove the first card of `kind` from `cards`.
pub fn pull(cards: &mut Vec<Card>, kind: CardKind) -> Card {
    let pos = cards
        .iter()
        .position(|c| c.kind == kind)
        .unwrap_or_else(|| panic!("no {kind} left"));
    cards.remove(pos)
}

/// Table of `n` seats (`p1..pn`) past the deal, holding the full canonical
/// deck. `hands[i]` goes face up to seat `i`, and `top` is stacked so that
/// `top[0]` is the next card drawn.
pub fn table(n: usize, hands: &[&[CardKind]], top: &[CardKind]) -> GameState {
    let players = (1..=n)
        .map(|i| Player::new(PlayerId::new(format!("p{i}")), format!("P{i}")))
        .collect();
    let mut state = GameState::new(players, RulesConfig::default(), 77);
    let mut deck = build_deck();

    for (seat, kinds) in hands.iter().enumerate() {
        for kind in kinds.iter() {
            let card = pull(&mut deck, *kind).revealed();
            state.players[seat].hand.push(card);
        }
    }

    let stacked: Vec<Card> = top.iter().map(|k| pull(&mut deck, *k)).collect();
    deck.extend(stacked.into_iter().rev());
    state.deck = deck.into_iter().collect();
    state.deal_status = DealStatus::Complete;
    state
}

/// Head of a seat's pending queue.
pub fn head_pending(state: &GameState, player: &str) -> turn_seven::CardId {
    state.player(&id(player)).unwrap().pending_immediate_action_ids[0].clone()
}

/// Move a LifeSaver from the deck to `player` as bust protection.
pub fn keep_life_saver(state: &mut GameState, player: &str) {
    let pos = state
        .deck
        .iter()
        .position(|c| c.kind == CardKind::Action(turn_seven::ActionKind::LifeSaver))
        .expect("a Life Saver in the deck");
    let card = state.deck.remove(pos).revealed();
    state.player_mut(&id(player)).unwrap().keep_life_saver(card);
}
