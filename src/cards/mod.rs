//! Card system: card kinds and the fixed deck.
//!
//! ## Key Types
//!
//! - `CardId`: Stable string identifier of one physical card
//! - `CardKind`: `Number(0..=12) | Modifier(..) | Action(..)`
//! - `Card`: id + kind + face-up flag
//!
//! ## Deck
//!
//! `build_deck` produces the 94-card composition; `fisher_yates` shuffles
//! with any [`RandomSource`](crate::core::RandomSource).

pub mod card;
pub mod deck;

pub use card::{ActionKind, Card, CardId, CardKind, ModifierKind};
pub use deck::{build_deck, fisher_yates, shuffled_deck, Composition, DECK_SIZE, MAX_RANK};
