//! Building a game.

use rustc_hash::FxHashSet;
use tracing::info;

use crate::cards::shuffled_deck;
use crate::core::{GameRng, GameState, Player, PlayerConfig, RandomSource, RulesConfig};
use crate::error::ConfigError;
use crate::scoring::lifecycle::begin_round;

/// Standard-rules game for the given names, seats `p1..pN`.
///
/// ```
/// use turn_seven::rules::create_initial_state;
///
/// let state = create_initial_state(&["Ada", "Bob", "Cy"], 42).unwrap();
/// assert_eq!(state.round_number, 1);
/// assert_eq!(state.player_count(), 3);
/// ```
pub fn create_initial_state<S: AsRef<str>>(names: &[S], seed: u64) -> Result<GameState, ConfigError> {
    create_initial_state_from_config(&PlayerConfig::from_names(names), RulesConfig::default(), seed)
}

/// Game from explicit seat configs, shuffled and dealt with a seeded RNG.
///
/// The RNG position after dealing is stored in the state, so every later
/// transition replays identically from the same seed.
pub fn create_initial_state_from_config(
    players: &[PlayerConfig],
    rules: RulesConfig,
    seed: u64,
) -> Result<GameState, ConfigError> {
    let mut rng = GameRng::new(seed);
    let mut state = create_initial_state_with(players, rules, seed, &mut rng)?;
    state.rng = rng.state();
    Ok(state)
}

/// Game from explicit seat configs using an injected random source.
///
/// `seed` only initializes the state's embedded RNG position for later
/// [`perform_action`](super::perform_action) calls.
pub fn create_initial_state_with<R: RandomSource + ?Sized>(
    players: &[PlayerConfig],
    rules: RulesConfig,
    seed: u64,
    rng: &mut R,
) -> Result<GameState, ConfigError> {
    rules.validate()?;
    rules.check_player_count(players.len())?;

    let mut ids = FxHashSet::default();
    for seat in players {
        if seat.id.as_str().is_empty() {
            return Err(ConfigError::EmptyPlayerId);
        }
        if seat.name.trim().is_empty() {
            return Err(ConfigError::EmptyPlayerName(seat.id.to_string()));
        }
        if !ids.insert(&seat.id) {
            return Err(ConfigError::DuplicatePlayerId(seat.id.to_string()));
        }
    }

    let seats = players
        .iter()
        .map(|seat| {
            let mut player = Player::new(seat.id.clone(), seat.name.clone());
            if seat.is_bot {
                player = player.as_bot(seat.bot_difficulty.unwrap_or_default());
            }
            player
        })
        .collect();

    let mut state = GameState::new(seats, rules, seed);
    state.deck = shuffled_deck(rng).into_iter().collect();
    info!(players = state.player_count(), seed, "game created");
    state.log_system(format!("Game started with {} players", state.player_count()));
    begin_round(&mut state, rng);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BotDifficulty, DealStatus, GamePhase, PlayerId};
    use crate::scoring::integrity;

    #[test]
    fn test_initial_state_is_dealt() {
        let state = create_initial_state(&["Ada", "Bob", "Cy", "Dee"], 7).unwrap();
        assert_eq!(state.round_number, 1);
        assert_eq!(state.game_phase, GamePhase::Playing);
        assert_eq!(state.round_starter_id, Some(PlayerId::new("p1")));
        assert!(integrity::verify(&state).is_ok());
        match state.deal_status {
            DealStatus::Complete => assert!(state
                .active_players()
                .all(|p| !p.is_empty_handed())),
            DealStatus::AwaitingPendingAction => {
                assert!(state.current_player().is_some_and(|p| p.has_pending()));
            }
            DealStatus::Dealing => panic!("deal left unfinished"),
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = create_initial_state(&["Ada", "Bob"], 99).unwrap();
        let b = create_initial_state(&["Ada", "Bob"], 99).unwrap();
        assert!(a.eq_ignoring_timestamps(&b));
        assert_eq!(a.rng, b.rng);
    }

    #[test]
    fn test_player_count_enforced() {
        assert_eq!(
            create_initial_state(&["Solo"], 1).unwrap_err(),
            ConfigError::PlayerCount { min: 2, max: 18, actual: 1 }
        );
        let crowd: Vec<String> = (0..19).map(|i| format!("P{i}")).collect();
        assert!(create_initial_state(&crowd, 1).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let seats = vec![PlayerConfig::human("x", "Ada"), PlayerConfig::human("x", "Bob")];
        assert_eq!(
            create_initial_state_from_config(&seats, RulesConfig::default(), 1).unwrap_err(),
            ConfigError::DuplicatePlayerId("x".into())
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let seats = vec![PlayerConfig::human("a", "Ada"), PlayerConfig::human("b", "  ")];
        assert_eq!(
            create_initial_state_from_config(&seats, RulesConfig::default(), 1).unwrap_err(),
            ConfigError::EmptyPlayerName("b".into())
        );
    }

    #[test]
    fn test_bot_seats_carry_difficulty() {
        let seats = vec![
            PlayerConfig::human("a", "Ada"),
            PlayerConfig::bot("b", "Bot", BotDifficulty::Hard),
        ];
        let state = create_initial_state_from_config(&seats, RulesConfig::default(), 3).unwrap();
        let bot = state.player(&PlayerId::new("b")).unwrap();
        assert!(bot.is_bot);
        assert_eq!(bot.bot_difficulty, Some(BotDifficulty::Hard));
    }

    #[test]
    fn test_custom_rules_stored() {
        let rules = RulesConfig::default().with_win_score(50);
        let state =
            create_initial_state_from_config(&PlayerConfig::from_names(&["A", "B"]), rules, 3).unwrap();
        assert_eq!(state.rules.win_score, 50);
    }
}
