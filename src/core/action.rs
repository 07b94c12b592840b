//! Intents: what a driver asks the engine to do.
//!
//! An intent names the acting seat explicitly; the engine checks it against
//! `current_player_id` and ignores intents from anyone else. The JSON form is
//! `{"type": "HIT", "payload": {"playerId": "p1"}}`.

use serde::{Deserialize, Serialize};

use super::player::{BotDifficulty, PlayerId};
use crate::cards::CardId;

/// A requested state transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Draw one card.
    #[serde(rename_all = "camelCase")]
    Hit { player_id: PlayerId },

    /// Stop drawing for the round.
    #[serde(rename_all = "camelCase")]
    Stay { player_id: PlayerId },

    /// Play a pending action card on a target.
    #[serde(rename_all = "camelCase")]
    PlayAction {
        player_id: PlayerId,
        card_id: CardId,
        target_id: PlayerId,
    },

    /// Start the next round after a round has ended.
    NextRound,

    /// Hand a seat over to a bot.
    #[serde(rename_all = "camelCase")]
    ConvertToBot {
        player_id: PlayerId,
        #[serde(default)]
        difficulty: Option<BotDifficulty>,
    },
}

impl Intent {
    /// HIT for `player`.
    pub fn hit(player: impl Into<PlayerId>) -> Self {
        Intent::Hit { player_id: player.into() }
    }

    /// STAY for `player`.
    pub fn stay(player: impl Into<PlayerId>) -> Self {
        Intent::Stay { player_id: player.into() }
    }

    /// PLAY_ACTION of `card` by `player` on `target`.
    pub fn play(player: impl Into<PlayerId>, card: CardId, target: impl Into<PlayerId>) -> Self {
        Intent::PlayAction {
            player_id: player.into(),
            card_id: card,
            target_id: target.into(),
        }
    }

    /// Short name for logs and ledger lines.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Hit { .. } => "HIT",
            Intent::Stay { .. } => "STAY",
            Intent::PlayAction { .. } => "PLAY_ACTION",
            Intent::NextRound => "NEXT_ROUND",
            Intent::ConvertToBot { .. } => "CONVERT_TO_BOT",
        }
    }

    /// The seat the intent is issued for, if any.
    #[must_use]
    pub fn player_id(&self) -> Option<&PlayerId> {
        match self {
            Intent::Hit { player_id }
            | Intent::Stay { player_id }
            | Intent::PlayAction { player_id, .. }
            | Intent::ConvertToBot { player_id, .. } => Some(player_id),
            Intent::NextRound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Intent::hit("p1"), Intent::Hit { player_id: PlayerId::new("p1") });
        assert_eq!(Intent::stay("p2").player_id(), Some(&PlayerId::new("p2")));
        assert_eq!(Intent::NextRound.player_id(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Intent::hit("p1").name(), "HIT");
        assert_eq!(Intent::play("p1", CardId::new("c"), "p2").name(), "PLAY_ACTION");
        assert_eq!(Intent::NextRound.name(), "NEXT_ROUND");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Intent::hit("p1")).unwrap();
        assert_eq!(json, r#"{"type":"HIT","payload":{"playerId":"p1"}}"#);

        let play: Intent = serde_json::from_str(
            r#"{"type":"PLAY_ACTION","payload":{"playerId":"p1","cardId":"act-lock-0","targetId":"p2"}}"#,
        )
        .unwrap();
        assert_eq!(play, Intent::play("p1", CardId::new("act-lock-0"), "p2"));

        let next: Intent = serde_json::from_str(r#"{"type":"NEXT_ROUND"}"#).unwrap();
        assert_eq!(next, Intent::NextRound);
    }

    #[test]
    fn test_convert_to_bot_default_difficulty() {
        let intent: Intent =
            serde_json::from_str(r#"{"type":"CONVERT_TO_BOT","payload":{"playerId":"p3"}}"#).unwrap();
        assert_eq!(
            intent,
            Intent::ConvertToBot { player_id: PlayerId::new("p3"), difficulty: None }
        );
    }
}
