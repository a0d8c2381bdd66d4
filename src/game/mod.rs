//! Game session and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, build_deck, shuffle};
use crate::challenge::Challenge;
use crate::error::StartError;
use crate::options::GameOptions;

mod actions;
mod outcome;
pub mod state;

pub use state::GameState;

/// A single-player challenge session.
///
/// The session owns the deck, the hand, and the discard pile. Each player
/// needs their own `Game`; nothing is shared between sessions.
pub struct Game {
    /// Cards left to draw. The last card is drawn first.
    pub deck: Vec<Card>,
    /// Cards held by the player, in the order they were received.
    pub hand: Vec<Card>,
    /// Played cards. The last card is the top of the pile.
    pub discard: Vec<Card>,
    /// Game options.
    pub options: GameOptions,
    /// Challenge being played.
    challenge: Option<Challenge>,
    /// Current game state.
    state: GameState,
    /// Legal plays made in this challenge.
    legal_plays: u32,
    /// Penalties taken in this challenge.
    penalties: u32,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use rulecards::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            deck: Vec::new(),
            hand: Vec::new(),
            discard: Vec::new(),
            options,
            challenge: None,
            state: GameState::NotStarted,
            legal_plays: 0,
            penalties: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts `challenge`, discarding everything from the previous one.
    ///
    /// A fresh deck is shuffled, `hand_size` cards are dealt into the hand,
    /// and one more card opens the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the challenge has no rules or no goal, or if the
    /// hand size leaves no card for the discard pile. The session is left
    /// unchanged in that case.
    pub fn start(&mut self, challenge: Challenge) -> Result<(), StartError> {
        challenge.validate()?;
        if self.options.hand_size >= DECK_SIZE {
            return Err(StartError::NotEnoughCards);
        }

        let mut deck = shuffle(&build_deck(), &mut self.rng);
        let mut hand = Vec::with_capacity(self.options.hand_size);
        for _ in 0..self.options.hand_size {
            hand.extend(deck.pop());
        }
        let discard: Vec<Card> = deck.pop().into_iter().collect();

        if let Some(top) = discard.last() {
            log::debug!(
                "starting challenge {} ({}), {} cards dealt, top card {top}",
                challenge.id,
                challenge.level,
                hand.len()
            );
        }

        self.deck = deck;
        self.hand = hand;
        self.discard = discard;
        self.legal_plays = 0;
        self.penalties = 0;
        self.challenge = Some(challenge);
        self.state = GameState::InProgress;

        Ok(())
    }

    /// Abandons the current challenge and returns to `NotStarted`.
    pub fn abandon(&mut self) {
        if let Some(challenge) = self.challenge.take() {
            log::debug!("abandoning challenge {}", challenge.id);
        }
        self.deck.clear();
        self.hand.clear();
        self.discard.clear();
        self.legal_plays = 0;
        self.penalties = 0;
        self.state = GameState::NotStarted;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the challenge being played.
    #[must_use]
    pub const fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    /// Returns the cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the top of the discard pile.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard.last()
    }

    /// Returns the whole discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of legal plays made in this challenge.
    #[must_use]
    pub const fn legal_plays(&self) -> u32 {
        self.legal_plays
    }

    /// Returns the number of penalties taken in this challenge.
    #[must_use]
    pub const fn penalties(&self) -> u32 {
        self.penalties
    }

    /// Returns the number of cards across deck, hand, and discard pile.
    ///
    /// This is [`DECK_SIZE`] for any started session.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }
}
