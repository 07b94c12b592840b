//! Canonical deck composition and shuffling.
//!
//! The deck is a stack: index 0 is the bottom, the last element is the top,
//! and draws pop from the end.

use crate::core::RandomSource;

use super::card::{ActionKind, Card, CardKind, ModifierKind};

/// Cards in a full deck.
pub const DECK_SIZE: usize = 94;

/// Highest Number rank.
pub const MAX_RANK: u8 = 12;

/// Copies of each action kind.
pub const ACTION_COPIES: u8 = 3;

/// Build the canonical, unshuffled deck.
///
/// Ranks 12 down to 1 appear as many times as their face value, rank 0 once,
/// each modifier once and each action kind three times.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for value in (1..=MAX_RANK).rev() {
        for copy in 0..value {
            cards.push(Card::number(value, copy));
        }
    }
    cards.push(Card::number(0, 0));
    cards.extend(ModifierKind::ALL.iter().map(|&m| Card::modifier(m)));
    for &kind in &ActionKind::ALL {
        for copy in 0..ACTION_COPIES {
            cards.push(Card::action(kind, copy));
        }
    }
    cards
}

/// Fisher–Yates shuffle driven by an injectable source.
pub fn fisher_yates<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

/// A fresh canonical deck, shuffled.
#[must_use]
pub fn shuffled_deck<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = build_deck();
    fisher_yates(&mut cards, rng);
    cards
}

/// Per-kind tally of a card collection, used by integrity checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Composition {
    pub numbers: usize,
    pub zeros: usize,
    pub modifiers: usize,
    pub actions: usize,
    pub times_two: usize,
    pub fours: usize,
}

impl Composition {
    /// Tally the given cards.
    pub fn of<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut tally = Self::default();
        for card in cards {
            match card.kind {
                CardKind::Number(0) => tally.zeros += 1,
                CardKind::Number(v) => {
                    tally.numbers += 1;
                    if v == 4 {
                        tally.fours += 1;
                    }
                }
                CardKind::Modifier(m) => {
                    tally.modifiers += 1;
                    if m == ModifierKind::Times2 {
                        tally.times_two += 1;
                    }
                }
                CardKind::Action(_) => tally.actions += 1,
            }
        }
        tally
    }

    /// Total cards tallied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.numbers + self.zeros + self.modifiers + self.actions
    }

    /// Composition of a canonical deck.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            numbers: 78,
            zeros: 1,
            modifiers: 6,
            actions: 9,
            times_two: 1,
            fours: 4,
        }
    }
}
