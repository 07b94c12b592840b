//! Hand scoring.
//!
//! ```text
//! busted         -> 0
//! otherwise      -> sum(numbers) * 2^(x2 count) + sum(+N) + turn-seven bonus
//! ```

use crate::core::{Player, ResultType, RulesConfig};

/// Score a hand under `rules`.
#[must_use]
pub fn score_hand(player: &Player, rules: &RulesConfig) -> u32 {
    if player.has_busted {
        return 0;
    }

    let numbers: u32 = player.number_values().map(u32::from).sum();
    let (doublings, flat) = player
        .modifiers()
        .fold((0u32, 0u32), |(d, f), m| match m.bonus() {
            Some(bonus) => (d, f + bonus),
            None => (d + 1, f),
        });

    let mut score = numbers.saturating_mul(2u32.saturating_pow(doublings)) + flat;
    if reached_turn_seven(player, rules) {
        score += rules.turn_seven_bonus;
    }
    score
}

/// Does the hand hold enough distinct ranks for the Turn-7 bonus?
#[must_use]
pub fn reached_turn_seven(player: &Player, rules: &RulesConfig) -> bool {
    player.unique_number_count() >= rules.turn_seven_unique
}

/// Classify how the player's round went.
#[must_use]
pub fn result_type(player: &Player, rules: &RulesConfig) -> ResultType {
    if player.has_busted {
        ResultType::Bust
    } else if reached_turn_seven(player, rules) {
        ResultType::TurnSeven
    } else {
        ResultType::Normal
    }
}
