use crate::challenge::Goal;
use crate::result::Outcome;

use super::{Game, GameState};

impl Game {
    /// Evaluates the goal against the current counters.
    ///
    /// The penalty budget is checked first, so exceeding it loses the
    /// challenge even if the same play also reached the goal.
    fn evaluate_goal(&self, goal: &Goal) -> Option<Outcome> {
        if self.penalties > goal.max_penalties() {
            return Some(Outcome::Lost);
        }

        let reached = match *goal {
            Goal::LegalPlaysTarget { count, .. } => self.legal_plays >= count,
            Goal::EmptyHandTarget { .. } => self.hand.is_empty(),
        };

        reached.then_some(Outcome::Won)
    }

    /// Checks whether the challenge has been won or lost.
    ///
    /// Returns `None` while the game continues or before a challenge is
    /// started. Once an outcome is produced the session moves to
    /// [`GameState::Won`] or [`GameState::Lost`], further plays and draws are
    /// rejected, and later calls return the same outcome.
    ///
    /// Outcomes are not pushed; call this after every play or draw.
    pub fn check_outcome(&mut self) -> Option<Outcome> {
        match self.state {
            GameState::NotStarted => return None,
            GameState::Won => return Some(Outcome::Won),
            GameState::Lost => return Some(Outcome::Lost),
            GameState::InProgress => {}
        }

        let goal = *self.challenge.as_ref()?.goal()?;
        let outcome = self.evaluate_goal(&goal)?;

        self.state = match outcome {
            Outcome::Won => GameState::Won,
            Outcome::Lost => GameState::Lost,
        };
        log::debug!(
            "challenge settled as {outcome:?} after {} legal plays and {} penalties",
            self.legal_plays,
            self.penalties
        );

        Some(outcome)
    }
}
