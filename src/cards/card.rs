//! Card representation.
//!
//! A card is an id plus a tagged kind. The kind never changes after the deck
//! is built; only `face_up` and the container holding the card do.

use serde::{Deserialize, Serialize};

/// Stable, unique card identifier (e.g. `num-12-3`, `mod-x2`, `act-lock-1`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Score modifiers. `Times2` doubles the Number sum; the rest add after doubling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    Plus2,
    Plus4,
    Plus6,
    Plus8,
    Plus10,
    Times2,
}

impl ModifierKind {
    /// All modifiers, one copy each in the deck.
    pub const ALL: [ModifierKind; 6] = [
        ModifierKind::Plus2,
        ModifierKind::Plus4,
        ModifierKind::Plus6,
        ModifierKind::Plus8,
        ModifierKind::Plus10,
        ModifierKind::Times2,
    ];

    /// Flat bonus for `+N` modifiers, `None` for `x2`.
    #[must_use]
    pub const fn bonus(self) -> Option<u32> {
        match self {
            ModifierKind::Plus2 => Some(2),
            ModifierKind::Plus4 => Some(4),
            ModifierKind::Plus6 => Some(6),
            ModifierKind::Plus8 => Some(8),
            ModifierKind::Plus10 => Some(10),
            ModifierKind::Times2 => None,
        }
    }

    /// Short label used in card ids and ledger text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ModifierKind::Plus2 => "+2",
            ModifierKind::Plus4 => "+4",
            ModifierKind::Plus6 => "+6",
            ModifierKind::Plus8 => "+8",
            ModifierKind::Plus10 => "+10",
            ModifierKind::Times2 => "x2",
        }
    }
}

/// Action cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Target stays and is locked out of the round.
    Lock,
    /// Target draws up to three cards.
    TurnThree,
    /// Absorbs one duplicate-Number bust.
    LifeSaver,
}

impl ActionKind {
    /// All action kinds, three copies each in the deck.
    pub const ALL: [ActionKind; 3] = [ActionKind::Lock, ActionKind::TurnThree, ActionKind::LifeSaver];

    /// Label used in ledger text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::Lock => "Lock",
            ActionKind::TurnThree => "Turn Three",
            ActionKind::LifeSaver => "Life Saver",
        }
    }

    const fn slug(self) -> &'static str {
        match self {
            ActionKind::Lock => "lock",
            ActionKind::TurnThree => "turn-three",
            ActionKind::LifeSaver => "life-saver",
        }
    }
}

/// What a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Face value 0..=12.
    Number(u8),
    Modifier(ModifierKind),
    Action(ActionKind),
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Number(v) => write!(f, "{v}"),
            CardKind::Modifier(m) => f.write_str(m.label()),
            CardKind::Action(a) => f.write_str(a.label()),
        }
    }
}

/// A physical card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, kind: CardKind) -> Self {
        Self {
            id,
            kind,
            face_up: false,
        }
    }

    /// Number card with its canonical id (`num-<value>-<copy>`).
    #[must_use]
    pub fn number(value: u8, copy: u8) -> Self {
        Self::new(CardId(format!("num-{value}-{copy}")), CardKind::Number(value))
    }

    /// Modifier card with its canonical id (`mod-<label>`).
    #[must_use]
    pub fn modifier(kind: ModifierKind) -> Self {
        Self::new(CardId(format!("mod-{}", kind.label())), CardKind::Modifier(kind))
    }

    /// Action card with its canonical id (`act-<slug>-<copy>`).
    #[must_use]
    pub fn action(kind: ActionKind, copy: u8) -> Self {
        Self::new(CardId(format!("act-{}-{copy}", kind.slug())), CardKind::Action(kind))
    }

    /// Same card, face up.
    #[must_use]
    pub fn revealed(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Face value if this is a Number card.
    #[must_use]
    pub fn number_value(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number(v) => Some(v),
            _ => None,
        }
    }

    /// Action kind if this is an Action card.
    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.kind {
            CardKind::Action(a) => Some(a),
            _ => None,
        }
    }
}
