//! What a decision provider gets to see.
//!
//! A [`TableView`] is a read-only snapshot of the public table: every
//! seat's face-up cards and flags, plus counts for the deck. Bots decide
//! from this rather than from `GameState`, so they cannot peek at the deck
//! order.

use serde::{Deserialize, Serialize};

use crate::cards::{CardKind, MAX_RANK};
use crate::core::{GamePhase, GameState, Player, PlayerId};
use crate::scoring::score_hand;

/// One seat as seen from the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<CardKind>,
    pub is_active: bool,
    pub has_stayed: bool,
    pub is_locked: bool,
    pub has_busted: bool,
    pub has_life_saver: bool,
    pub pending_actions: usize,
    /// Score if the round ended now.
    pub projected_score: u32,
    pub total_score: u32,
    pub is_bot: bool,
}

/// Public snapshot of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub round_number: u32,
    pub phase: GamePhase,
    pub current_player_id: Option<PlayerId>,
    pub seats: Vec<SeatView>,
    pub deck_remaining: usize,
    pub discard_size: usize,
    /// Copies of each Number rank not yet seen face up, indexed by rank.
    pub unseen_ranks: Vec<u8>,
    pub win_score: u32,
}

impl TableView {
    /// Snapshot `state`.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        let seats = state
            .players
            .iter()
            .map(|p| SeatView::of(p, state))
            .collect();

        let mut unseen = vec![0u8; usize::from(MAX_RANK) + 1];
        for card in state.deck.iter() {
            if let CardKind::Number(v) = card.kind {
                if let Some(slot) = unseen.get_mut(usize::from(v)) {
                    *slot += 1;
                }
            }
        }

        Self {
            round_number: state.round_number,
            phase: state.game_phase,
            current_player_id: state.current_player_id.clone(),
            seats,
            deck_remaining: state.deck.len(),
            discard_size: state.discard_pile.len(),
            unseen_ranks: unseen,
            win_score: state.rules.win_score,
        }
    }

    /// Look up a seat.
    #[must_use]
    pub fn seat(&self, id: &PlayerId) -> Option<&SeatView> {
        self.seats.iter().find(|s| &s.id == id)
    }

    /// Highest total among seats other than `me`.
    #[must_use]
    pub fn leading_opponent(&self, me: &PlayerId) -> Option<&SeatView> {
        self.seats
            .iter()
            .filter(|s| &s.id != me)
            .max_by_key(|s| s.total_score)
    }
}

impl SeatView {
    fn of(player: &Player, state: &GameState) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            hand: player.hand.iter().map(|c| c.kind).collect(),
            is_active: player.is_active,
            has_stayed: player.has_stayed,
            is_locked: player.is_locked,
            has_busted: player.has_busted,
            has_life_saver: player.has_life_saver,
            pending_actions: player.pending_immediate_action_ids.len(),
            projected_score: score_hand(player, &state.rules),
            total_score: player.total_score,
            is_bot: player.is_bot,
        }
    }

    /// Number ranks in hand.
    pub fn ranks(&self) -> impl Iterator<Item = u8> + '_ {
        self.hand.iter().filter_map(|k| match k {
            CardKind::Number(v) => Some(*v),
            _ => None,
        })
    }
}
