//! Game configuration options.

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use rulecards::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(5)
///     .with_penalty_draws(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt into the hand when a challenge starts.
    pub hand_size: usize,
    /// Number of cards drawn as the penalty for an illegal play.
    pub penalty_draws: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 7,
            penalty_draws: 1,
        }
    }
}

impl GameOptions {
    /// Sets the starting hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use rulecards::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(10);
    /// assert_eq!(options.hand_size, 10);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets how many cards an illegal play costs.
    ///
    /// # Example
    ///
    /// ```
    /// use rulecards::GameOptions;
    ///
    /// let options = GameOptions::default().with_penalty_draws(0);
    /// assert_eq!(options.penalty_draws, 0);
    /// ```
    #[must_use]
    pub const fn with_penalty_draws(mut self, draws: u8) -> Self {
        self.penalty_draws = draws;
        self
    }
}
