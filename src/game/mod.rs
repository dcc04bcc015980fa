//! Game engine that deals hands and picks the winners.

use crate::deck::{CardSource, Deck};
use crate::options::GameOptions;

mod deal;

/// A poker game engine that deals one hand per player and resolves the
/// winners.
///
/// The game owns its card source. [`Game::new`] uses a seeded [`Deck`],
/// [`Game::with_source`] accepts any [`CardSource`].
#[derive(Debug, Clone)]
pub struct Game<S = Deck> {
    /// Cards to deal from.
    source: S,
    /// Game options.
    options: GameOptions,
}

impl Game<Deck> {
    /// Creates a new game dealing from a deck shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// let result = game.play(["Joe", "Bob", "Sally"]).unwrap();
    /// assert_eq!(result.hands.len(), 3);
    /// assert!(!result.winners.is_empty());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, Deck::new(seed))
    }
}

impl<S: CardSource> Game<S> {
    /// Creates a new game dealing from the given card source.
    #[must_use]
    pub const fn with_source(options: GameOptions, source: S) -> Self {
        Self { source, options }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the card source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the game and returns its card source.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }
}
