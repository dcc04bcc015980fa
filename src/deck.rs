//! Card sources for dealing hands.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A source of unique cards.
///
/// [`Game`](crate::Game) draws every hand through this trait, so a fixed
/// sequence of cards can stand in for a shuffled deck.
pub trait CardSource {
    /// Draws one card, removing it from the source.
    ///
    /// Returns `None` when no cards are left.
    fn draw(&mut self) -> Option<Card>;

    /// Restores the source to a full set of cards.
    fn reset(&mut self);
}

/// A shuffled 52-card deck.
///
/// The order of the cards is fully determined by the seed.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left in the deck, the next card to draw is last.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use fivecard::{CardSource, DECK_SIZE, Deck};
    ///
    /// let mut deck = Deck::new(42);
    /// assert_eq!(deck.remaining(), DECK_SIZE);
    /// assert!(deck.draw().is_some());
    /// assert_eq!(deck.remaining(), DECK_SIZE - 1);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_deck(&mut rng);

        Self { cards, rng }
    }

    /// Creates and shuffles every rank of every suit.
    fn create_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardSource for Deck {
    fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn reset(&mut self) {
        self.cards = Self::create_deck(&mut self.rng);
    }
}
