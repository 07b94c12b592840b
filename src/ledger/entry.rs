//! Ledger lines.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Kind of ledger line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerAction {
    Deal,
    Hit,
    Stay,
    Action,
    RoundEnd,
    System,
}

/// One human-readable history line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub round_number: u32,
    /// Seat that produced the line; `None` for system lines.
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    pub player_name: String,
    pub action: LedgerAction,
    pub target_name: Option<String>,
    pub result: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl LedgerEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        round_number: u32,
        player_name: impl Into<String>,
        action: LedgerAction,
        result: impl Into<String>,
    ) -> Self {
        Self {
            round_number,
            player_id: None,
            player_name: player_name.into(),
            action,
            target_name: None,
            result: result.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Attribute the line to a seat.
    #[must_use]
    pub fn by(mut self, player: PlayerId) -> Self {
        self.player_id = Some(player);
        self
    }

    /// Attach a target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target_name = Some(target.into());
        self
    }

    /// Can `next` be folded into this line?
    ///
    /// Only an Action line directly following a Hit by the same seat in
    /// the same round. Display names may repeat, so the seat id decides.
    #[must_use]
    pub fn absorbs(&self, next: &LedgerEntry) -> bool {
        self.action == LedgerAction::Hit
            && next.action == LedgerAction::Action
            && self.player_id == next.player_id
            && self.player_name == next.player_name
            && self.round_number == next.round_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_timestamp() {
        let entry = LedgerEntry::new(1, "Ada", LedgerAction::Hit, "drew 5");
        assert!(entry.timestamp > 0);
        assert_eq!(entry.target_name, None);
    }

    #[test]
    fn test_absorbs_rules() {
        let hit = LedgerEntry::new(1, "Ada", LedgerAction::Hit, "drew Lock");
        let action = LedgerEntry::new(1, "Ada", LedgerAction::Action, "locked Bob");
        let other = LedgerEntry::new(1, "Bob", LedgerAction::Action, "locked Ada");
        let later = LedgerEntry::new(2, "Ada", LedgerAction::Action, "locked Bob");

        assert!(hit.absorbs(&action));
        assert!(!hit.absorbs(&other));
        assert!(!hit.absorbs(&later));
        assert!(!action.absorbs(&hit));
    }

    #[test]
    fn test_absorbs_tells_namesakes_apart() {
        let hit = LedgerEntry::new(1, "Sam", LedgerAction::Hit, "drew Lock").by(PlayerId::new("p1"));
        let own = LedgerEntry::new(1, "Sam", LedgerAction::Action, "played Lock").by(PlayerId::new("p1"));
        let namesake =
            LedgerEntry::new(1, "Sam", LedgerAction::Action, "played Lock").by(PlayerId::new("p2"));

        assert!(hit.absorbs(&own));
        assert!(!hit.absorbs(&namesake));
    }
}
