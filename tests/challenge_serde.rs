//! Loading challenge definitions through serde.

#![cfg(feature = "serde")]

use rulecards::{
    Challenge, ChallengeError, Color, Game, GameOptions, Goal, Level, Rule, StartError,
};

const KINGS_WANT_RED: &str = r#"{
    "id": "kings-want-red",
    "level": 2,
    "rules": [
        { "type": "BaseMatchSuitOrRank" },
        { "type": "AfterRankRequireColor", "afterRank": 13, "requiredColor": "red" },
        { "type": "ForbidRankOnColor", "forbiddenRank": 7, "onColor": "black" },
        { "type": "SwapHandsWithDealer", "everyTurns": 3 }
    ],
    "goal": { "type": "LegalPlaysTarget", "count": 8, "maxPenalties": 3 }
}"#;

#[test]
fn challenge_loads_from_json() {
    let challenge: Challenge = serde_json::from_str(KINGS_WANT_RED).unwrap();

    assert_eq!(challenge.id, "kings-want-red");
    assert_eq!(challenge.level, Level::Medium);
    assert_eq!(
        challenge.rules(),
        &[
            Rule::BaseMatchSuitOrRank,
            Rule::AfterRankRequireColor {
                after_rank: 13,
                required_color: Color::Red,
            },
            Rule::ForbidRankOnColor {
                forbidden_rank: 7,
                on_color: Color::Black,
            },
            Rule::Unknown,
        ]
    );
    assert_eq!(
        challenge.goal(),
        Some(&Goal::LegalPlaysTarget {
            count: 8,
            max_penalties: 3,
        })
    );
    assert!(challenge.validate().is_ok());
}

#[test]
fn challenge_survives_serialization() {
    let challenge = Challenge::new("empty-hand", Level::Hard)
        .with_rules([Rule::ForbidSameSuitAsPrevious])
        .with_goal(Goal::EmptyHandTarget { max_penalties: 1 });

    let json = serde_json::to_string(&challenge).unwrap();
    assert!(json.contains(r#""type":"EmptyHandTarget""#));
    assert!(json.contains(r#""maxPenalties":1"#));
    assert!(json.contains(r#""level":3"#));

    let back: Challenge = serde_json::from_str(&json).unwrap();
    assert_eq!(back, challenge);
}

#[test]
fn out_of_range_level_is_rejected() {
    let json = r#"{ "id": "bad", "level": 4, "rules": [], "goal": { "type": "EmptyHandTarget", "maxPenalties": 0 } }"#;
    let err = serde_json::from_str::<Challenge>(json).unwrap_err();
    assert!(err.to_string().contains("invalid challenge level 4"));
}

#[test]
fn incomplete_challenge_loads_but_cannot_start() {
    let json = r#"{ "id": "unfinished", "level": 1, "rules": [] }"#;
    let challenge: Challenge = serde_json::from_str(json).unwrap();
    assert_eq!(challenge.validate(), Err(ChallengeError::MissingGoal));

    let mut game = Game::new(GameOptions::default(), 9);
    assert_eq!(
        game.start(challenge).unwrap_err(),
        StartError::InvalidChallenge(ChallengeError::MissingGoal)
    );
}
