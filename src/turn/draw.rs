//! Drawing and card intake.
//!
//! `draw_one` is the only way a card leaves the deck. `receive` places a
//! drawn card with a player and reports what happened, so dealing, HIT and
//! TurnThree all apply the same duplicate, LifeSaver and action-card rules.

use tracing::debug;

use crate::cards::{fisher_yates, ActionKind, Card, CardKind};
use crate::core::{GameState, PlayerId, RandomSource};

/// Pop the top card, reshuffling the discard pile into the deck if needed.
///
/// Returns `None` when both piles are empty; callers treat that as a normal
/// outcome.
pub fn draw_one<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) -> Option<Card> {
    if state.deck.is_empty() {
        if state.discard_pile.is_empty() {
            return None;
        }
        reshuffle_discard(state, rng);
    }
    state.deck.pop_back().map(Card::revealed)
}

fn reshuffle_discard<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    let mut cards: Vec<Card> = std::mem::take(&mut state.discard_pile)
        .into_iter()
        .map(|mut c| {
            c.face_up = false;
            c
        })
        .collect();
    fisher_yates(&mut cards, rng);
    debug!(cards = cards.len(), "reshuffled discard pile into deck");
    state.deck = cards.into_iter().collect();
}

/// What happened to a received card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intake {
    /// Added to the hand (Number, Modifier or a kept LifeSaver).
    Added,
    /// Duplicate Number absorbed by the player's LifeSaver.
    Saved,
    /// Duplicate Number without a LifeSaver.
    Busted,
    /// Added, and the hand now has enough distinct ranks to end the round.
    TurnSeven,
    /// Action card queued; the player must play it before HIT/STAY.
    Queued(ActionKind),
    /// Surplus LifeSaver with nobody to pass it to.
    Discarded,
}

impl Intake {
    /// Short ledger suffix.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Intake::Added => "",
            Intake::Saved => " (saved by Life Saver)",
            Intake::Busted => " (bust)",
            Intake::TurnSeven => " (Turn Seven!)",
            Intake::Queued(_) => " (must be played)",
            Intake::Discarded => " (discarded, nobody can take it)",
        }
    }

    /// Did intake hand control to a pending action?
    #[must_use]
    pub fn is_queued(self) -> bool {
        matches!(self, Intake::Queued(_))
    }
}

/// Could a surplus LifeSaver held by `holder` go to someone else?
#[must_use]
pub fn has_life_saver_recipient(state: &GameState, holder: &PlayerId) -> bool {
    state
        .players
        .iter()
        .any(|p| &p.id != holder && p.is_active && !p.has_life_saver)
}

/// Give `card` to `player_id` under the drawing rules.
///
/// A card for an unknown player goes to the discard pile.
pub fn receive(state: &mut GameState, player_id: &PlayerId, card: Card) -> Intake {
    let unique_target = state.rules.turn_seven_unique;
    let recipient_exists = has_life_saver_recipient(state, player_id);
    let Some(player) = state.player_mut(player_id) else {
        state.discard(card);
        return Intake::Discarded;
    };

    match card.kind {
        CardKind::Number(value) if player.holds_number(value) => {
            if player.has_life_saver {
                let life_saver = player.consume_life_saver();
                state.discard(card);
                state.discard_all(life_saver);
                Intake::Saved
            } else {
                player.hand.push(card);
                player.bust();
                Intake::Busted
            }
        }
        CardKind::Number(_) => {
            player.hand.push(card);
            if player.unique_number_count() >= unique_target {
                Intake::TurnSeven
            } else {
                Intake::Added
            }
        }
        CardKind::Modifier(_) => {
            player.hand.push(card);
            Intake::Added
        }
        CardKind::Action(ActionKind::LifeSaver) if !player.has_life_saver => {
            player.keep_life_saver(card);
            Intake::Added
        }
        CardKind::Action(ActionKind::LifeSaver) if !recipient_exists => {
            state.discard(card);
            Intake::Discarded
        }
        CardKind::Action(kind) => {
            player.queue_pending(card);
            Intake::Queued(kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ModifierKind;
    use crate::core::{GameRng, Player, RulesConfig};

    fn table() -> GameState {
        let players = vec![
            Player::new(PlayerId::new("a"), "Ada"),
            Player::new(PlayerId::new("b"), "Bob"),
        ];
        GameState::new(players, RulesConfig::default(), 1)
    }

    fn a() -> PlayerId {
        PlayerId::new("a")
    }

    #[test]
    fn test_draw_pops_top_face_up() {
        let mut state = table();
        state.deck.push_back(Card::number(1, 0));
        state.deck.push_back(Card::number(2, 0));

        let card = draw_one(&mut state, &mut GameRng::new(0)).unwrap();
        assert_eq!(card.number_value(), Some(2));
        assert!(card.face_up);
        assert_eq!(state.deck.len(), 1);
    }

    #[test]
    fn test_draw_reshuffles_discard() {
        let mut state = table();
        state.discard(Card::number(3, 0).revealed());
        state.discard(Card::number(4, 0).revealed());

        let card = draw_one(&mut state, &mut GameRng::new(0));
        assert!(card.is_some());
        assert!(state.discard_pile.is_empty());
        assert_eq!(state.deck.len(), 1);
        assert!(!state.deck[0].face_up);
    }

    #[test]
    fn test_draw_from_nothing() {
        let mut state = table();
        assert_eq!(draw_one(&mut state, &mut GameRng::new(0)), None);
    }

    #[test]
    fn test_receive_duplicate_busts() {
        let mut state = table();
        receive(&mut state, &a(), Card::number(5, 0));
        let intake = receive(&mut state, &a(), Card::number(5, 1));

        assert_eq!(intake, Intake::Busted);
        let ada = state.player(&a()).unwrap();
        assert!(ada.has_busted);
        assert!(!ada.is_active);
        assert_eq!(ada.hand.len(), 2);
    }

    #[test]
    fn test_receive_duplicate_with_life_saver() {
        let mut state = table();
        receive(&mut state, &a(), Card::number(5, 0));
        assert_eq!(receive(&mut state, &a(), Card::action(ActionKind::LifeSaver, 0)), Intake::Added);
        assert!(state.player(&a()).unwrap().has_life_saver);

        let intake = receive(&mut state, &a(), Card::number(5, 1));
        assert_eq!(intake, Intake::Saved);

        let ada = state.player(&a()).unwrap();
        assert!(!ada.has_busted);
        assert!(!ada.has_life_saver);
        assert_eq!(ada.hand, vec![Card::number(5, 0)]);
        assert!(ada.reserved_actions.is_empty());
        assert_eq!(state.discard_pile.len(), 2);
    }

    #[test]
    fn test_receive_turn_seven() {
        let mut state = table();
        for v in 1..=6 {
            assert_eq!(receive(&mut state, &a(), Card::number(v, 0)), Intake::Added);
        }
        assert_eq!(receive(&mut state, &a(), Card::number(7, 0)), Intake::TurnSeven);
    }

    #[test]
    fn test_receive_modifier() {
        let mut state = table();
        let intake = receive(&mut state, &a(), Card::modifier(ModifierKind::Times2));
        assert_eq!(intake, Intake::Added);
        assert_eq!(state.player(&a()).unwrap().hand.len(), 1);
    }

    #[test]
    fn test_receive_lock_queues() {
        let mut state = table();
        let lock = Card::action(ActionKind::Lock, 0);
        let intake = receive(&mut state, &a(), lock.clone());

        assert_eq!(intake, Intake::Queued(ActionKind::Lock));
        let ada = state.player(&a()).unwrap();
        assert!(ada.is_pending(&lock.id));
        assert!(ada.hand.contains(&lock));
        assert!(ada.reserved_actions.contains(&lock));
    }

    #[test]
    fn test_surplus_life_saver_queues_when_recipient_exists() {
        let mut state = table();
        receive(&mut state, &a(), Card::action(ActionKind::LifeSaver, 0));
        let intake = receive(&mut state, &a(), Card::action(ActionKind::LifeSaver, 1));
        assert_eq!(intake, Intake::Queued(ActionKind::LifeSaver));
    }

    #[test]
    fn test_surplus_life_saver_discarded_without_recipient() {
        let mut state = table();
        state.player_mut(&PlayerId::new("b")).unwrap().stay();
        receive(&mut state, &a(), Card::action(ActionKind::LifeSaver, 0));
        let intake = receive(&mut state, &a(), Card::action(ActionKind::LifeSaver, 1));

        assert_eq!(intake, Intake::Discarded);
        assert_eq!(state.discard_pile.len(), 1);
    }
}
