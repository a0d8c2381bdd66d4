//! Challenge definitions.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::ChallengeError;
use crate::rules::Rule;

/// Challenge difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum Level {
    /// Level 1.
    Easy = 1,
    /// Level 2.
    Medium = 2,
    /// Level 3.
    Hard = 3,
}

impl Level {
    /// Returns the lowercase difficulty label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = ChallengeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            other => Err(ChallengeError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as Self
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Win condition of a challenge.
///
/// Both variants carry the number of penalties the player may take; one
/// more than that loses the challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all_fields = "camelCase")
)]
pub enum Goal {
    /// Win after `count` legal plays.
    LegalPlaysTarget {
        /// Legal plays required.
        count: u32,
        /// Penalties allowed.
        max_penalties: u32,
    },
    /// Win by emptying the hand.
    EmptyHandTarget {
        /// Penalties allowed.
        max_penalties: u32,
    },
}

impl Goal {
    /// Returns the penalty budget.
    #[must_use]
    pub const fn max_penalties(&self) -> u32 {
        match *self {
            Self::LegalPlaysTarget { max_penalties, .. }
            | Self::EmptyHandTarget { max_penalties } => max_penalties,
        }
    }
}

/// A playable scenario: an ordered rule list and a goal.
///
/// Rules and goal are optional so that incomplete definitions from an
/// external feed can be represented; [`Challenge::validate`] rejects them.
///
/// ```
/// use rulecards::{Challenge, Goal, Level, Rule};
///
/// let challenge = Challenge::new("suit-or-rank", Level::Easy)
///     .with_rules([Rule::BaseMatchSuitOrRank])
///     .with_goal(Goal::LegalPlaysTarget { count: 5, max_penalties: 3 });
/// assert!(challenge.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Challenge {
    /// Challenge identifier.
    pub id: String,
    /// Difficulty.
    pub level: Level,
    /// Rules in evaluation order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: Option<Vec<Rule>>,
    /// Win condition.
    #[cfg_attr(feature = "serde", serde(default))]
    pub goal: Option<Goal>,
}

impl Challenge {
    /// Creates a challenge with no rules and no goal.
    #[must_use]
    pub fn new(id: impl Into<String>, level: Level) -> Self {
        Self {
            id: id.into(),
            level,
            rules: None,
            goal: None,
        }
    }

    /// Sets the rule list. An empty list is valid and allows every play.
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules = Some(rules.into_iter().collect());
        self
    }

    /// Sets the goal.
    #[must_use]
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Returns the rules in evaluation order (empty if none were set).
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        self.rules.as_deref().unwrap_or_default()
    }

    /// Returns the goal, if set.
    #[must_use]
    pub const fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    /// Checks that the challenge can be played.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule list or the goal is missing.
    pub const fn validate(&self) -> Result<(), ChallengeError> {
        if self.rules.is_none() {
            return Err(ChallengeError::MissingRules);
        }
        if self.goal.is_none() {
            return Err(ChallengeError::MissingGoal);
        }
        Ok(())
    }
}
