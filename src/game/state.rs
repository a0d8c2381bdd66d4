//! Game state types.

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No challenge has been started.
    NotStarted,
    /// A challenge is being played.
    InProgress,
    /// The challenge goal was reached.
    Won,
    /// The penalty budget was exceeded.
    Lost,
}

impl GameState {
    /// Returns whether the session has reached a final outcome.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
