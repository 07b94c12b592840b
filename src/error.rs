//! Error types.
//!
//! State transitions never fail: invalid intents are silent no-ops. Errors
//! only exist at the edges: building a game from configuration, decoding a
//! persisted state, and the deck-integrity check that flags engine defects.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::{GamePhase, PlayerId};

/// Invalid game construction parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Need between {min} and {max} players, got {actual}")]
    PlayerCount { min: usize, max: usize, actual: usize },
    #[error("Duplicate player id: {0}")]
    DuplicatePlayerId(String),
    #[error("Player id must not be empty")]
    EmptyPlayerId,
    #[error("Player name must not be empty (player {0})")]
    EmptyPlayerName(String),
    #[error("Invalid rules configuration: {0}")]
    InvalidRules(&'static str),
}

/// Structural violation of the card-conservation invariant.
///
/// Seeing one of these means the engine has a bug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("Expected {expected} tracked cards, found {actual}")]
    CardCount { expected: usize, actual: usize },
    #[error("Expected exactly one x2 modifier, found {0}")]
    TimesTwoCount(usize),
    #[error("Expected four rank-4 cards, found {0}")]
    FourCount(usize),
    #[error("Deck composition differs from the canonical deck")]
    Composition,
    #[error("Card {card} is held in more than one place")]
    DuplicatedCard { card: CardId },
    #[error("Card {card} is pending for {player} but not in their hand and reserved actions")]
    DanglingPending { card: CardId, player: String },
}

/// Why an intent was ignored.
///
/// Never returned to callers of `perform_action`; the transition hands back
/// the unchanged state and logs this at `warn`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("phase {0:?} does not accept this intent")]
    PhaseClosed(GamePhase),
    #[error("{0} is not the current player")]
    NotCurrentPlayer(PlayerId),
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("{0} is no longer active this round")]
    Inactive(PlayerId),
    #[error("{0} must play pending action cards first")]
    PendingActions(PlayerId),
    #[error("card {0} is not among the actor's reserved actions")]
    CardNotHeld(CardId),
    #[error("card {0} is not pending")]
    CardNotPending(CardId),
    #[error("card {0} is queued behind another pending card")]
    OutOfOrder(CardId),
    #[error("a Life Saver cannot be given to its holder")]
    SelfLifeSaver,
    #[error("a resumed Turn Three must target its holder")]
    ResumeTargetsHolder,
}

/// Failure to encode or decode a persisted state.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),
}
