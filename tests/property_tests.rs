//! Randomized whole-game properties.

mod common;

use proptest::prelude::*;
use turn_seven::bots::{RandomBot, ThresholdBot};
use turn_seven::persist;
use turn_seven::scoring::integrity;
use turn_seven::sim::Driver;
use turn_seven::{
    create_initial_state, create_initial_state_from_config, perform_action, GamePhase, Intent,
    PlayerConfig, RulesConfig, TurnSeven,
};

fn names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Player {i}")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Every card of the deck is accounted for after every transition.
    #[test]
    fn prop_cards_conserved(seed in any::<u64>(), players in 2usize..9, hit in 0.2f64..0.9) {
        common::init_tracing();
        let rules = RulesConfig::default().with_win_score(120);
        let state = create_initial_state_from_config(
            &PlayerConfig::from_names(&names(players)),
            rules.clone(),
            seed,
        ).unwrap();
        prop_assert!(integrity::verify(&state).is_ok());

        let mut violations = Vec::new();
        let mut driver = Driver::new(TurnSeven::new(rules), RandomBot { hit_probability: hit }, seed);
        let report = driver.run_with(state, |intent, next| {
            if let Err(err) = integrity::verify(next) {
                violations.push(format!("{}: {err}", intent.name()));
            }
        });

        prop_assert!(violations.is_empty(), "violations: {:?}", violations);
        prop_assert!(report.result.is_some());
    }

    /// Same seed, same decisions, same game.
    #[test]
    fn prop_seeded_games_replay(seed in any::<u64>(), players in 2usize..6) {
        let play = || {
            let state = create_initial_state(&names(players), seed).unwrap();
            Driver::new(TurnSeven::default(), ThresholdBot::default(), seed).run(state)
        };
        let a = play();
        let b = play();
        prop_assert_eq!(a.steps, b.steps);
        prop_assert!(a.state.eq_ignoring_timestamps(&b.state));
    }

    /// At most one seat acts, and only while the round is in play.
    #[test]
    fn prop_current_player_is_active(seed in any::<u64>(), players in 2usize..7) {
        let state = create_initial_state(&names(players), seed).unwrap();
        let mut bad = 0usize;
        Driver::new(TurnSeven::default(), RandomBot::default(), seed).run_with(state, |_, next| {
            let ok = match next.game_phase {
                GamePhase::Playing => next.current_player().is_some_and(|p| p.is_active),
                GamePhase::Ended | GamePhase::GameOver => next.current_player_id.is_none(),
            };
            if !ok {
                bad += 1;
            }
        });
        prop_assert_eq!(bad, 0);
    }

    /// Snapshots decode to states that continue identically.
    #[test]
    fn prop_snapshots_are_playable(seed in any::<u64>(), steps in 0usize..60) {
        let state = create_initial_state(&names(3), seed).unwrap();
        let mut driver = Driver::new(TurnSeven::default(), ThresholdBot::default(), seed)
            .with_max_steps(steps);
        let mid = driver.run(state).state;

        let from_json = persist::from_json(&persist::to_json(&mid).unwrap()).unwrap();
        let from_bytes = persist::from_bytes(&persist::to_bytes(&mid).unwrap()).unwrap();
        prop_assert_eq!(&from_json, &mid);
        prop_assert_eq!(&from_bytes, &mid);

        if let Some(id) = mid.current_player_id.clone() {
            let intent = Intent::stay(id);
            let a = perform_action(&mid, &intent);
            let b = perform_action(&from_bytes, &intent);
            prop_assert!(a.eq_ignoring_timestamps(&b));
        }
    }
}
