use alloc::vec::Vec;

use crate::card::{Card, shuffle};
use crate::challenge::Challenge;
use crate::error::{DrawError, PlayError};
use crate::result::{ILLEGAL_PLAY_MESSAGE, LEGAL_PLAY_MESSAGE, PlayOutcome, PlayResult};
use crate::rules::evaluate_play;

use super::{Game, GameState};

impl Game {
    /// Shuffles every card under the top of the discard pile back into the deck.
    fn recycle_discard(&mut self) {
        let Some(top) = self.discard.pop() else {
            return;
        };

        self.deck = shuffle(&self.discard, &mut self.rng);
        self.discard.clear();
        self.discard.push(top);

        log::trace!("recycled {} cards from the discard pile", self.deck.len());
    }

    /// Draws one card into the hand, recycling the discard pile if the deck
    /// is empty. Returns `None` when no card is available.
    fn draw_card(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            self.recycle_discard();
        }

        let card = self.deck.pop()?;
        self.hand.push(card);
        log::trace!("drew {card}, {} left in deck", self.deck.len());
        Some(card)
    }

    /// Draws a card into the hand.
    ///
    /// When the deck is empty, the discard pile minus its top card is
    /// shuffled into a new deck first. Returns `Ok(None)` if there is still
    /// nothing to draw.
    ///
    /// # Errors
    ///
    /// Returns an error if no challenge is in progress.
    pub fn draw(&mut self) -> Result<Option<Card>, DrawError> {
        if self.state != GameState::InProgress {
            return Err(DrawError::InvalidState);
        }

        Ok(self.draw_card())
    }

    /// Plays the card at `hand_index` onto the discard pile.
    ///
    /// A legal play moves the card to the discard pile and counts towards
    /// the goal. An illegal play leaves the card in hand, adds a penalty, and
    /// draws `penalty_draws` cards. Either way the result carries a fixed
    /// message; the broken rule is not disclosed.
    ///
    /// Call [`Game::check_outcome`] after every play.
    ///
    /// # Errors
    ///
    /// Returns an error if no challenge is in progress or `hand_index` is
    /// out of range.
    pub fn play(&mut self, hand_index: usize) -> Result<PlayResult, PlayError> {
        if self.state != GameState::InProgress {
            return Err(PlayError::InvalidState);
        }

        let card = *self
            .hand
            .get(hand_index)
            .ok_or(PlayError::HandIndexOutOfRange {
                index: hand_index,
                len: self.hand.len(),
            })?;

        let rules = self
            .challenge
            .as_ref()
            .map(Challenge::rules)
            .unwrap_or_default();
        let verdict = evaluate_play(&card, self.discard.last(), rules);

        if verdict.is_legal() {
            self.hand.remove(hand_index);
            self.discard.push(card);
            self.legal_plays += 1;
            log::debug!("played {card}, {} legal plays", self.legal_plays);

            return Ok(PlayResult {
                outcome: PlayOutcome::Accepted,
                card,
                drawn: Vec::new(),
                message: LEGAL_PLAY_MESSAGE,
            });
        }

        self.penalties += 1;
        log::debug!("rejected {card}, {} penalties", self.penalties);

        let mut drawn = Vec::new();
        for _ in 0..self.options.penalty_draws {
            match self.draw_card() {
                Some(extra) => drawn.push(extra),
                None => break,
            }
        }

        Ok(PlayResult {
            outcome: PlayOutcome::Penalized,
            card,
            drawn,
            message: ILLEGAL_PLAY_MESSAGE,
        })
    }
}
