//! Error types for game operations.
//!
//! Illegal plays and an exhausted deck are regular game events and never
//! show up here.

use thiserror::Error;

/// Errors in a challenge definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChallengeError {
    /// The rule list is missing.
    #[error("challenge has no rule list")]
    MissingRules,
    /// The goal is missing.
    #[error("challenge has no goal")]
    MissingGoal,
    /// The level is outside 1..=3.
    #[error("invalid challenge level {0}, expected 1, 2 or 3")]
    InvalidLevel(u8),
}

/// Errors that can occur when starting a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The challenge definition is malformed.
    #[error("invalid challenge: {0}")]
    InvalidChallenge(#[from] ChallengeError),
    /// The configured hand size leaves no card for the discard pile.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No challenge is in progress.
    #[error("invalid game state for playing")]
    InvalidState,
    /// The hand index does not point at a card.
    #[error("hand index {index} out of range for hand of {len} cards")]
    HandIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Hand size at the time of the call.
        len: usize,
    },
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No challenge is in progress.
    #[error("invalid game state for drawing")]
    InvalidState,
}
