//! Result types for plays and challenge outcomes.

use alloc::vec::Vec;

use crate::card::Card;

/// Message returned for every accepted play.
pub const LEGAL_PLAY_MESSAGE: &str = "Legal play.";

/// Message returned for every rejected play, whatever rule was broken.
pub const ILLEGAL_PLAY_MESSAGE: &str = "Illegal play. Penalty applied.";

/// Whether a play was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card moved to the discard pile.
    Accepted,
    /// The card stayed in hand and a penalty was charged.
    Penalized,
}

/// Result of a single play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    /// Whether the play was accepted.
    pub outcome: PlayOutcome,
    /// The card that was played or attempted.
    pub card: Card,
    /// Cards drawn as a penalty (empty on acceptance or when nothing is left).
    pub drawn: Vec<Card>,
    /// Fixed player-facing message.
    pub message: &'static str,
}

impl PlayResult {
    /// Returns whether the play was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self.outcome, PlayOutcome::Accepted)
    }
}

/// Final result of a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was reached within the penalty budget.
    Won,
    /// The penalty budget was exceeded.
    Lost,
}
