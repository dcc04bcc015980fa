//! Error types for hand evaluation and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while building or classifying a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluateError {
    /// The hand has no cards.
    #[error("can't play with an empty hand")]
    EmptyHand,
    /// The same card was given twice for one hand.
    #[error("card {0} appears more than once in the hand")]
    DuplicateCard(Card),
}

/// Errors that can occur while resolving the winners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Fewer than two hands were given.
    #[error("need at least 2 players")]
    InsufficientPlayers,
    /// Hands do not all have the same number of cards.
    #[error("hands should be of equal size")]
    MismatchedHandSize,
    /// A card appears in more than one hand.
    #[error("card {0} was dealt more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur while dealing from a card source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The card source ran out of cards.
    #[error("not enough cards in the deck")]
    DeckExhausted,
    /// The card source returned the same card twice.
    #[error("deck returned card {0} twice")]
    DuplicateCard(Card),
}

/// Errors that can abort a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A dealt hand could not be evaluated.
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
    /// The winners could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
