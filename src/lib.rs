//! A single-player card game engine built around configurable legality rules.
//!
//! Each [`Challenge`] carries an ordered list of [`Rule`]s and a [`Goal`].
//! The [`Game`] type owns the deck, hand, and discard pile, checks every
//! play with [`rules::evaluate_play`], charges penalties for illegal plays,
//! and reports the challenge [`Outcome`].
//!
//! # Example
//!
//! ```
//! use rulecards::{Challenge, Game, GameOptions, Goal, Level, Rule};
//!
//! let challenge = Challenge::new("follow-suit-or-rank", Level::Easy)
//!     .with_rules([Rule::BaseMatchSuitOrRank])
//!     .with_goal(Goal::EmptyHandTarget { max_penalties: 5 });
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start(challenge).unwrap();
//! assert_eq!(game.hand().len(), 7);
//!
//! let _ = game.play(0).unwrap();
//! let _ = game.check_outcome();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod challenge;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod rules;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Suit};
pub use challenge::{Challenge, Goal, Level};
pub use error::{ChallengeError, DrawError, PlayError, StartError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use result::{Outcome, PlayOutcome, PlayResult};
pub use rules::{LegalResult, Rule, evaluate_play};
