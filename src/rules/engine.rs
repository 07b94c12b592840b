//! Rules engine trait and the Turn Seven implementation.
//!
//! Drivers that want to stay generic over the ruleset (simulation loops,
//! benches) talk to `RulesEngine`. The trait answers three questions:
//! - Which intents are legal for a player right now
//! - What state an intent leads to
//! - Whether the game is over

use serde::{Deserialize, Serialize};

use super::setup::create_initial_state_from_config;
use super::transition::perform_action;
use crate::core::{GamePhase, GameState, Intent, PlayerConfig, PlayerId, RulesConfig};
use crate::error::ConfigError;
use crate::resolver::valid_targets;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub winner: PlayerId,
    /// Final totals in seat order.
    pub standings: Vec<(PlayerId, u32)>,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &PlayerId) -> bool {
        &self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_intents`: Return empty vec if the player can't act
/// - `apply_intent`: Must be deterministic for replays
/// - `is_terminal`: Return None if the game continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Legal intents for a player.
    fn legal_intents(&self, state: &GameState, player: &PlayerId) -> Vec<Intent>;

    /// Apply an intent, returning the next state.
    fn apply_intent(&self, state: &GameState, intent: &Intent) -> GameState;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Is `intent` legal in `state`?
    fn is_legal(&self, state: &GameState, intent: &Intent) -> bool {
        match intent.player_id() {
            Some(player) => self.legal_intents(state, player).contains(intent),
            None => state
                .players
                .front()
                .is_some_and(|p| self.legal_intents(state, &p.id).contains(intent)),
        }
    }
}

/// The standard Turn Seven ruleset.
#[derive(Clone, Debug, Default)]
pub struct TurnSeven {
    config: RulesConfig,
}

impl TurnSeven {
    /// Ruleset with the given constants.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Create and deal a game under this ruleset.
    pub fn create_game(&self, players: &[PlayerConfig], seed: u64) -> Result<GameState, ConfigError> {
        create_initial_state_from_config(players, self.config.clone(), seed)
    }
}

impl RulesEngine for TurnSeven {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn legal_intents(&self, state: &GameState, player: &PlayerId) -> Vec<Intent> {
        match state.game_phase {
            GamePhase::GameOver => Vec::new(),
            GamePhase::Ended => vec![Intent::NextRound],
            GamePhase::Playing => {
                if !state.is_current(player) {
                    return Vec::new();
                }
                let Some(seat) = state.player(player).filter(|p| p.is_active) else {
                    return Vec::new();
                };
                match seat.pending_immediate_action_ids.first() {
                    Some(card_id) => valid_targets(state, player, card_id)
                        .into_iter()
                        .map(|target| Intent::play(player, card_id.clone(), target))
                        .collect(),
                    None => vec![Intent::hit(player), Intent::stay(player)],
                }
            }
        }
    }

    fn apply_intent(&self, state: &GameState, intent: &Intent) -> GameState {
        perform_action(state, intent)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.game_phase != GamePhase::GameOver {
            return None;
        }
        let winner = state.winner_id.clone()?;
        Some(GameResult {
            winner,
            standings: state
                .players
                .iter()
                .map(|p| (p.id.clone(), p.total_score))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionKind, Card};

    fn engine() -> TurnSeven {
        TurnSeven::default()
    }

    fn game() -> GameState {
        engine()
            .create_game(&PlayerConfig::from_names(&["Ada", "Bob", "Cy"]), 21)
            .unwrap()
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult {
            winner: PlayerId::new("p2"),
            standings: vec![(PlayerId::new("p1"), 100), (PlayerId::new("p2"), 210)],
        };
        assert!(result.is_winner(&PlayerId::new("p2")));
        assert!(!result.is_winner(&PlayerId::new("p1")));
    }

    #[test]
    fn test_only_current_player_has_moves() {
        let state = game();
        let current = state.current_player_id.clone().unwrap();
        assert!(!engine().legal_intents(&state, &current).is_empty());
        for p in state.players.iter().filter(|p| p.id != current) {
            assert!(engine().legal_intents(&state, &p.id).is_empty());
        }
    }

    #[test]
    fn test_pending_card_forces_play() {
        let mut state = game();
        let current = state.current_player_id.clone().unwrap();
        let lock = Card::action(ActionKind::Lock, 2);
        state.player_mut(&current).unwrap().pending_immediate_action_ids.insert(0, lock.id.clone());
        state.player_mut(&current).unwrap().hand.push(lock.clone());
        state.player_mut(&current).unwrap().reserved_actions.push(lock.clone());

        let intents = engine().legal_intents(&state, &current);
        assert!(!intents.is_empty());
        assert!(intents
            .iter()
            .all(|i| matches!(i, Intent::PlayAction { card_id, .. } if *card_id == lock.id)));
        assert!(!engine().is_legal(&state, &Intent::hit(current)));
    }

    #[test]
    fn test_ended_round_offers_next_round() {
        let mut state = game();
        state.game_phase = GamePhase::Ended;
        assert_eq!(engine().legal_intents(&state, &PlayerId::new("p2")), vec![Intent::NextRound]);
        assert!(engine().is_legal(&state, &Intent::NextRound));
    }

    #[test]
    fn test_terminal_only_at_game_over() {
        let mut state = game();
        assert_eq!(engine().is_terminal(&state), None);

        state.game_phase = GamePhase::GameOver;
        state.winner_id = Some(PlayerId::new("p3"));
        let result = engine().is_terminal(&state).unwrap();
        assert_eq!(result.winner, PlayerId::new("p3"));
        assert_eq!(result.standings.len(), 3);
    }
}
