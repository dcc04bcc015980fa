//! Game configuration options.

use crate::hand::HAND_SIZE;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use fivecard::GameOptions;
///
/// let options = GameOptions::default().with_hand_size(3);
/// assert_eq!(options.hand_size, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of cards dealt to each player.
    pub hand_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}
