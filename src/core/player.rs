//! Player identification and the per-seat record.
//!
//! ## PlayerId
//!
//! Opaque, driver-assigned identifier. The engine only compares ids for
//! equality; seat order comes from the position in `GameState::players`.
//!
//! ## Player
//!
//! Everything the engine tracks for one seat during a round, plus the few
//! fields (`total_score`, `is_bot`, `bot_difficulty`) that survive round
//! boundaries.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, Card, CardId, CardKind, ModifierKind};

/// Player identifier, unique within a game.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&PlayerId> for PlayerId {
    fn from(id: &PlayerId) -> Self {
        id.clone()
    }
}

/// Bot skill label. Opaque to the engine; decision providers read it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BotDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Resume point of a TurnThree that was interrupted by a drawn action card.
///
/// Stored next to the pending queue of the player holding the TurnThree card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Continuation {
    /// The interrupted TurnThree card.
    pub card_id: CardId,
    /// Draws still owed when the card is replayed.
    pub remaining_draws: u8,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    /// Cards in front of the player, in draw order.
    pub hand: Vec<Card>,

    /// Action cards held for deferred play. A pending card is also in `hand`.
    pub reserved_actions: Vec<Card>,

    /// Cards that must be played (PLAY_ACTION) before HIT or STAY, FIFO.
    pub pending_immediate_action_ids: Vec<CardId>,

    /// Interrupted TurnThree records, keyed by card id.
    #[serde(default)]
    pub continuations: Vec<Continuation>,

    pub has_stayed: bool,
    pub is_locked: bool,
    pub is_active: bool,
    pub has_busted: bool,
    pub has_life_saver: bool,

    pub round_score: u32,
    pub total_score: u32,

    pub is_bot: bool,
    pub bot_difficulty: Option<BotDifficulty>,
}

impl Player {
    /// Create a seat with empty round state.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            reserved_actions: Vec::new(),
            pending_immediate_action_ids: Vec::new(),
            continuations: Vec::new(),
            has_stayed: false,
            is_locked: false,
            is_active: true,
            has_busted: false,
            has_life_saver: false,
            round_score: 0,
            total_score: 0,
            is_bot: false,
            bot_difficulty: None,
        }
    }

    /// Mark this seat as bot-controlled.
    #[must_use]
    pub fn as_bot(mut self, difficulty: BotDifficulty) -> Self {
        self.is_bot = true;
        self.bot_difficulty = Some(difficulty);
        self
    }

    /// Fresh round record keeping identity, total score and bot settings.
    #[must_use]
    pub fn for_next_round(&self) -> Self {
        Self {
            total_score: self.total_score,
            is_bot: self.is_bot,
            bot_difficulty: self.bot_difficulty,
            ..Self::new(self.id.clone(), self.name.clone())
        }
    }

    // === Queries ===

    /// Does the player owe a PLAY_ACTION before HIT/STAY?
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending_immediate_action_ids.is_empty()
    }

    /// Holds neither a hand card nor a reserved action (needs a deal).
    #[must_use]
    pub fn is_empty_handed(&self) -> bool {
        self.hand.is_empty() && self.reserved_actions.is_empty()
    }

    /// Face values of Number cards in hand, draw order.
    pub fn number_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.hand.iter().filter_map(Card::number_value)
    }

    /// Is `value` already present as a Number card?
    #[must_use]
    pub fn holds_number(&self, value: u8) -> bool {
        self.number_values().any(|v| v == value)
    }

    /// Count of distinct Number ranks in hand.
    #[must_use]
    pub fn unique_number_count(&self) -> usize {
        let mut seen = [false; 13];
        for v in self.number_values() {
            if let Some(slot) = seen.get_mut(usize::from(v)) {
                *slot = true;
            }
        }
        seen.iter().filter(|s| **s).count()
    }

    /// Modifier cards in hand.
    pub fn modifiers(&self) -> impl Iterator<Item = ModifierKind> + '_ {
        self.hand.iter().filter_map(|c| match c.kind {
            CardKind::Modifier(m) => Some(m),
            _ => None,
        })
    }

    /// Is `card_id` queued as a pending action?
    #[must_use]
    pub fn is_pending(&self, card_id: &CardId) -> bool {
        self.pending_immediate_action_ids.contains(card_id)
    }

    /// Find a reserved action card.
    #[must_use]
    pub fn reserved(&self, card_id: &CardId) -> Option<&Card> {
        self.reserved_actions.iter().find(|c| &c.id == card_id)
    }

    /// Continuation attached to `card_id`, if the card was interrupted.
    #[must_use]
    pub fn continuation(&self, card_id: &CardId) -> Option<&Continuation> {
        self.continuations.iter().find(|c| &c.card_id == card_id)
    }

    // === Mutation ===

    /// Take a card out of both hand and reserved actions, dropping any
    /// pending entry and continuation for it.
    ///
    /// Returns the card if it was found in either container.
    pub fn take_card(&mut self, card_id: &CardId) -> Option<Card> {
        let from_hand = take_by_id(&mut self.hand, card_id);
        let from_reserved = take_by_id(&mut self.reserved_actions, card_id);
        self.pending_immediate_action_ids.retain(|id| id != card_id);
        self.continuations.retain(|c| &c.card_id != card_id);
        from_hand.or(from_reserved)
    }

    /// Put an action card in hand + reserved and queue it as pending.
    pub fn queue_pending(&mut self, card: Card) {
        self.pending_immediate_action_ids.push(card.id.clone());
        self.reserved_actions.push(card.clone());
        self.hand.push(card);
    }

    /// Keep a LifeSaver as bust protection, in hand + reserved but not
    /// pending.
    pub fn keep_life_saver(&mut self, card: Card) {
        self.has_life_saver = true;
        self.reserved_actions.push(card.clone());
        self.hand.push(card);
    }

    /// Remove every pending card (and continuation) and return the cards.
    pub fn drain_pending(&mut self) -> Vec<Card> {
        let ids = std::mem::take(&mut self.pending_immediate_action_ids);
        ids.iter().filter_map(|id| self.take_card(id)).collect()
    }

    /// Consume the held LifeSaver, returning its card for the discard.
    pub fn consume_life_saver(&mut self) -> Option<Card> {
        self.has_life_saver = false;
        let id = self
            .hand
            .iter()
            .chain(self.reserved_actions.iter())
            .find(|c| {
                c.kind == CardKind::Action(ActionKind::LifeSaver) && !self.is_pending(&c.id)
            })
            .map(|c| c.id.clone())?;
        self.take_card(&id)
    }

    /// Bust: out for the round with a forced zero.
    pub fn bust(&mut self) {
        self.has_busted = true;
        self.is_active = false;
    }

    /// Stay voluntarily.
    pub fn stay(&mut self) {
        self.has_stayed = true;
        self.is_active = false;
    }
}

fn take_by_id(cards: &mut Vec<Card>, card_id: &CardId) -> Option<Card> {
    let pos = cards.iter().position(|c| &c.id == card_id)?;
    Some(cards.remove(pos))
}
