//! Game state: the root aggregate.
//!
//! `GameState` is plain data: no closures, no handles, nothing that cannot
//! round-trip through JSON. It owns every seat, the deck, the discard pile,
//! the ledger and the RNG position.
//!
//! ## Cloning
//!
//! Seats, deck, discard and ledger are `im` persistent vectors. Cloning a
//! state is O(1); mutating a seat through [`GameState::player_mut`] copies
//! only the chunk holding that seat.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::config::RulesConfig;
use super::player::{Player, PlayerId};
use super::rng::GameRngState;
use crate::cards::Card;
use crate::ledger::{Ledger, LedgerAction, LedgerEntry};

/// Top-level phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// A round is in progress.
    #[default]
    Playing,
    /// The round has been scored; NEXT_ROUND starts the next one.
    Ended,
    /// Someone reached the win score.
    GameOver,
}

/// Progress of the initial deal for the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealStatus {
    /// Seats still need their first card.
    #[default]
    Dealing,
    /// Dealing paused until a pending action card is played.
    AwaitingPendingAction,
    /// Every seat that could receive a card has one.
    Complete,
}

/// How a player's round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultType {
    Normal,
    Bust,
    TurnSeven,
}

/// Summary of one player's last round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    /// Points scored in the round.
    pub score: u32,
    /// Total before the next round started.
    pub total: u32,
    pub result_type: ResultType,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Seats in turn order.
    pub players: Vector<Player>,

    pub current_player_id: Option<PlayerId>,

    /// Player after whom play resumes once an action chain unwinds.
    pub turn_order_base_id: Option<PlayerId>,

    pub round_starter_id: Option<PlayerId>,

    /// Draw pile; the top is the back.
    pub deck: Vector<Card>,

    pub discard_pile: Vector<Card>,

    pub game_phase: GamePhase,

    pub deal_status: DealStatus,

    pub winner_id: Option<PlayerId>,

    pub round_number: u32,

    pub previous_turn_log: Option<String>,

    pub previous_round_scores: OrdMap<PlayerId, RoundResult>,

    pub ledger: Ledger,

    pub rules: RulesConfig,

    pub rng: GameRngState,
}

impl GameState {
    /// Empty table with the given seats. No cards are dealt.
    #[must_use]
    pub fn new(players: Vec<Player>, rules: RulesConfig, seed: u64) -> Self {
        let round_starter_id = players.first().map(|p| p.id.clone());
        Self {
            players: players.into_iter().collect(),
            current_player_id: round_starter_id.clone(),
            turn_order_base_id: None,
            round_starter_id,
            deck: Vector::new(),
            discard_pile: Vector::new(),
            game_phase: GamePhase::Playing,
            deal_status: DealStatus::Dealing,
            winner_id: None,
            round_number: 1,
            previous_turn_log: None,
            previous_round_scores: OrdMap::new(),
            ledger: Ledger::new(),
            rules,
            rng: GameRngState::seeded(seed),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    // === Seats ===

    /// Seat index of a player.
    #[must_use]
    pub fn seat_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    /// Look up a player.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Mutable access to one seat (copy-on-write).
    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        let seat = self.seat_of(id)?;
        self.players.get_mut(seat)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_player_id.as_ref().and_then(|id| self.player(id))
    }

    /// Is `id` the current player?
    #[must_use]
    pub fn is_current(&self, id: &PlayerId) -> bool {
        self.current_player_id.as_ref() == Some(id)
    }

    /// Players still drawing this round.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active)
    }

    /// Any seat still active?
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.players.iter().any(|p| p.is_active)
    }

    /// Display name for ledger lines; falls back to the id.
    #[must_use]
    pub fn name_of(&self, id: &PlayerId) -> String {
        self.player(id).map_or_else(|| id.to_string(), |p| p.name.clone())
    }

    // === Cards ===

    /// Cards left to draw, deck plus discard.
    #[must_use]
    pub fn cards_available(&self) -> usize {
        self.deck.len() + self.discard_pile.len()
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push_back(card);
    }

    /// Put several cards on the discard pile, in order.
    pub fn discard_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.discard(card);
        }
    }

    // === Ledger ===

    /// Append a ledger line for the current round.
    pub fn log(
        &mut self,
        player: &PlayerId,
        action: LedgerAction,
        target: Option<&PlayerId>,
        result: impl Into<String>,
    ) {
        let mut entry =
            LedgerEntry::new(self.round_number, self.name_of(player), action, result).by(player.clone());
        if let Some(target) = target {
            entry = entry.with_target(self.name_of(target));
        }
        self.ledger.record(entry);
    }

    /// Append a system ledger line.
    pub fn log_system(&mut self, result: impl Into<String>) {
        self.ledger
            .record(LedgerEntry::new(self.round_number, "System", LedgerAction::System, result));
    }

    // === Comparison ===

    /// Equality that ignores ledger timestamps.
    #[must_use]
    pub fn eq_ignoring_timestamps(&self, other: &Self) -> bool {
        let mut a = self.clone();
        let mut b = other.clone();
        a.ledger = a.ledger.without_timestamps();
        b.ledger = b.ledger.without_timestamps();
        a == b
    }
}
