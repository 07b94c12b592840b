//! Driving a game with decision providers.
//!
//! The [`Driver`] plays the part of the table host: it looks at the state,
//! asks the right provider for a decision, and submits the matching intent
//! through the rules engine. It is the only place providers are called.
//!
//! ```
//! use turn_seven::bots::ThresholdBot;
//! use turn_seven::rules::{create_initial_state, TurnSeven};
//! use turn_seven::sim::Driver;
//!
//! let state = create_initial_state(&["Ada", "Bob", "Cy"], 7).unwrap();
//! let mut driver = Driver::new(TurnSeven::default(), ThresholdBot::default(), 7);
//! let report = driver.run(state);
//! assert!(report.result.is_some());
//! ```

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::bots::{DecisionProvider, Move, TargetRequest};
use crate::core::{GamePhase, GameRng, GameState, Intent, PlayerId};
use crate::resolver::valid_targets;
use crate::rules::{GameResult, RulesEngine};
use crate::view::TableView;

/// Default cap on intents per game.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Summary of a driven game.
#[derive(Clone, Debug)]
pub struct DriverReport {
    pub state: GameState,
    /// Intents submitted.
    pub steps: usize,
    /// Rounds started, including the first.
    pub rounds: u32,
    /// `None` if the step cap was hit or the game stalled.
    pub result: Option<GameResult>,
}

/// Runs games against a rules engine.
pub struct Driver<E: RulesEngine> {
    engine: E,
    fallback: Box<dyn DecisionProvider>,
    seats: FxHashMap<PlayerId, Box<dyn DecisionProvider>>,
    rng: GameRng,
    max_steps: usize,
}

impl<E: RulesEngine> Driver<E> {
    /// Driver where every seat uses `fallback`.
    pub fn new(engine: E, fallback: impl DecisionProvider + 'static, seed: u64) -> Self {
        Self {
            engine,
            fallback: Box::new(fallback),
            seats: FxHashMap::default(),
            rng: GameRng::new(seed),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Use `provider` for one seat.
    #[must_use]
    pub fn with_provider(
        mut self,
        player: impl Into<PlayerId>,
        provider: impl DecisionProvider + 'static,
    ) -> Self {
        self.seats.insert(player.into(), Box::new(provider));
        self
    }

    /// Set the step cap.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// The engine being driven.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The intent the table would submit next, if any.
    pub fn next_intent(&mut self, state: &GameState) -> Option<Intent> {
        match state.game_phase {
            GamePhase::GameOver => None,
            GamePhase::Ended => Some(Intent::NextRound),
            GamePhase::Playing => {
                let player = state.current_player()?;
                let view = TableView::of(state);

                if let Some(card_id) = player.pending_immediate_action_ids.first() {
                    let source_card = player.reserved(card_id)?.clone();
                    let targets = valid_targets(state, &player.id, card_id);
                    let fallback = targets.first()?.clone();
                    let request = TargetRequest {
                        valid_targets: targets,
                        source_card,
                    };
                    let provider = provider_for(&self.seats, &*self.fallback, &player.id);
                    let target = provider
                        .decide_target(player, &view, &request, &mut self.rng)
                        .filter(|t| request.valid_targets.contains(t))
                        .unwrap_or(fallback);
                    return Some(Intent::play(&player.id, card_id.clone(), target));
                }

                let provider = provider_for(&self.seats, &*self.fallback, &player.id);
                Some(match provider.decide_move(player, &view, &mut self.rng) {
                    Move::Hit => Intent::hit(&player.id),
                    Move::Stay => Intent::stay(&player.id),
                })
            }
        }
    }

    /// Submit one intent. `None` when the game cannot continue.
    pub fn step(&mut self, state: &GameState) -> Option<(Intent, GameState)> {
        let intent = self.next_intent(state)?;
        let next = self.engine.apply_intent(state, &intent);
        Some((intent, next))
    }

    /// Play to the end.
    pub fn run(&mut self, state: GameState) -> DriverReport {
        self.run_with(state, |_, _| {})
    }

    /// Play to the end, calling `observe` after every intent.
    pub fn run_with(
        &mut self,
        mut state: GameState,
        mut observe: impl FnMut(&Intent, &GameState),
    ) -> DriverReport {
        let mut steps = 0;
        let mut rounds = 1;

        while steps < self.max_steps {
            let Some((intent, next)) = self.step(&state) else {
                break;
            };
            if next == state {
                warn!(intent = intent.name(), "driver intent had no effect, stopping");
                break;
            }
            if intent == Intent::NextRound {
                rounds += 1;
            }
            steps += 1;
            observe(&intent, &next);
            state = next;
        }

        let result = self.engine.is_terminal(&state);
        debug!(steps, rounds, finished = result.is_some(), "driver stopped");
        DriverReport {
            state,
            steps,
            rounds,
            result,
        }
    }
}

fn provider_for<'a>(
    seats: &'a FxHashMap<PlayerId, Box<dyn DecisionProvider>>,
    fallback: &'a dyn DecisionProvider,
    player: &PlayerId,
) -> &'a dyn DecisionProvider {
    seats.get(player).map_or(fallback, |p| &**p)
}
