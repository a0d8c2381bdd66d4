//! Legality rules and the play evaluator.
//!
//! A challenge carries an ordered list of [`Rule`]s. [`evaluate_play`] checks
//! a candidate card against the top of the discard pile rule by rule and
//! stops at the first rule that applies, so list order sets precedence.
//! Evaluation is a pure function of its inputs and can be called from any
//! thread.

use alloc::format;
use alloc::string::String;

use crate::card::{Card, Color, rank_label};

/// Outcome of checking a play against one or more rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegalResult {
    /// The play is allowed.
    Legal,
    /// The play is forbidden.
    Illegal {
        /// Human-readable description of the violated rule.
        reason: String,
    },
}

impl LegalResult {
    /// Returns whether the play is allowed.
    #[must_use]
    pub const fn is_legal(&self) -> bool {
        matches!(self, Self::Legal)
    }

    /// Returns the violation reason, if the play is forbidden.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Legal => None,
            Self::Illegal { reason } => Some(reason),
        }
    }

    fn illegal(reason: String) -> Self {
        Self::Illegal { reason }
    }
}

/// A single legality rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all_fields = "camelCase")
)]
#[non_exhaustive]
pub enum Rule {
    /// The candidate must share the top card's suit or rank.
    BaseMatchSuitOrRank,
    /// After a card of `after_rank`, the next card must be `required_color`.
    AfterRankRequireColor {
        /// Rank that triggers the rule.
        after_rank: u8,
        /// Color the following card must have.
        required_color: Color,
    },
    /// The candidate may not share the top card's suit.
    ForbidSameSuitAsPrevious,
    /// A card of `forbidden_rank` may not be played on an `on_color` card.
    ForbidRankOnColor {
        /// Rank that may not be played.
        forbidden_rank: u8,
        /// Color of the top card that forbids the rank.
        on_color: Color,
    },
    /// A rule type this engine does not know. Never applies.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl Rule {
    /// Checks `candidate` against `top` for this rule alone.
    ///
    /// Returns `None` when the rule has nothing to say about this pair of
    /// cards, so that the next rule in the list decides.
    #[must_use]
    pub fn check(&self, candidate: &Card, top: &Card) -> Option<LegalResult> {
        match *self {
            Self::BaseMatchSuitOrRank => {
                if candidate.suit == top.suit || candidate.rank == top.rank {
                    Some(LegalResult::Legal)
                } else {
                    Some(LegalResult::illegal(format!(
                        "{candidate} matches neither the suit nor the rank of {top}"
                    )))
                }
            }
            Self::AfterRankRequireColor {
                after_rank,
                required_color,
            } => {
                if top.rank != after_rank {
                    None
                } else if candidate.color() == required_color {
                    Some(LegalResult::Legal)
                } else {
                    Some(LegalResult::illegal(format!(
                        "after a {} the next card must be {required_color}",
                        rank_label(after_rank)
                    )))
                }
            }
            Self::ForbidSameSuitAsPrevious => (candidate.suit == top.suit).then(|| {
                LegalResult::illegal(format!("{} cannot follow {}", candidate.suit, top.suit))
            }),
            Self::ForbidRankOnColor {
                forbidden_rank,
                on_color,
            } => (candidate.rank == forbidden_rank && top.color() == on_color).then(|| {
                LegalResult::illegal(format!(
                    "a {} cannot be played on a {on_color} card",
                    rank_label(forbidden_rank)
                ))
            }),
            Self::Unknown => None,
        }
    }
}

/// Decides whether `candidate` may be played on `top`.
///
/// Rules are checked in order and the first rule that applies decides; later
/// rules are not evaluated. The play is legal if no rule applies, if the
/// rule list is empty, or if there is no top card.
///
/// ```
/// use rulecards::card::{Card, Suit};
/// use rulecards::rules::{Rule, evaluate_play};
///
/// let top = Card::new(0, Suit::Spades, 5);
/// let candidate = Card::new(1, Suit::Diamonds, 5);
/// let rules = [Rule::ForbidSameSuitAsPrevious, Rule::BaseMatchSuitOrRank];
/// assert!(evaluate_play(&candidate, Some(&top), &rules).is_legal());
/// ```
#[must_use]
pub fn evaluate_play(candidate: &Card, top: Option<&Card>, rules: &[Rule]) -> LegalResult {
    let Some(top) = top else {
        return LegalResult::Legal;
    };

    rules
        .iter()
        .find_map(|rule| rule.check(candidate, top))
        .unwrap_or(LegalResult::Legal)
}
