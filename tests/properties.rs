//! Property tests for deck handling and card conservation.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rulecards::card::{build_deck, shuffle};
use rulecards::{Challenge, Color, DECK_SIZE, Game, GameOptions, Goal, Level, Rule};

#[derive(Debug, Clone, Copy)]
enum Action {
    Draw,
    Play(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Draw), any::<usize>().prop_map(Action::Play)]
}

fn rule() -> impl Strategy<Value = Rule> {
    prop_oneof![
        Just(Rule::BaseMatchSuitOrRank),
        Just(Rule::ForbidSameSuitAsPrevious),
        (1..=13_u8).prop_map(|after_rank| Rule::AfterRankRequireColor {
            after_rank,
            required_color: Color::Red,
        }),
        (1..=13_u8).prop_map(|forbidden_rank| Rule::ForbidRankOnColor {
            forbidden_rank,
            on_color: Color::Black,
        }),
        Just(Rule::Unknown),
    ]
}

fn assert_conserved(game: &Game) {
    assert_eq!(game.cards_in_play(), DECK_SIZE);

    let ids: HashSet<u8> = game
        .deck
        .iter()
        .chain(&game.hand)
        .chain(&game.discard)
        .map(|card| card.id)
        .collect();
    assert_eq!(ids.len(), DECK_SIZE);
}

proptest! {
    #[test]
    fn shuffle_keeps_cards_and_input(seed in any::<u64>()) {
        let deck = build_deck();
        let before = deck.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut shuffled = shuffle(&deck, &mut rng);

        prop_assert_eq!(&deck, &before);
        prop_assert_eq!(shuffled.len(), DECK_SIZE);
        shuffled.sort_by_key(|card| card.id);
        prop_assert_eq!(shuffled, before);
    }

    #[test]
    fn cards_are_conserved(
        seed in any::<u64>(),
        rules in prop::collection::vec(rule(), 0..4),
        actions in prop::collection::vec(action(), 0..200),
    ) {
        let challenge = Challenge::new("prop", Level::Hard)
            .with_rules(rules)
            .with_goal(Goal::EmptyHandTarget { max_penalties: 20 });
        let mut game = Game::new(GameOptions::default(), seed);
        game.start(challenge).unwrap();
        assert_conserved(&game);

        for action in actions {
            match action {
                Action::Draw => {
                    let _ = game.draw();
                }
                Action::Play(index) => {
                    if !game.hand().is_empty() {
                        let _ = game.play(index % game.hand().len());
                    }
                }
            }
            assert_conserved(&game);

            if game.check_outcome().is_some() {
                prop_assert!(game.state().is_settled());
            }
        }
    }
}
