//! Player hand representation.

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;
use crate::compare::compare;
use crate::error::EvaluateError;
use crate::eval::classify;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 5;

/// Hand category, from the weakest to the strongest.
///
/// Only these four categories exist: four of a kind counts as
/// [`ThreeOfAKind`](Self::ThreeOfAKind) and two pairs count as
/// [`OnePair`](Self::OnePair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No repeated rank.
    HighCard,
    /// At least one pair of cards with the same rank.
    OnePair,
    /// Three or more cards with the same rank.
    ThreeOfAKind,
    /// All cards share one suit.
    Flush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HighCard => "HighCard",
            Self::OnePair => "OnePair",
            Self::ThreeOfAKind => "ThreeOfAKind",
            Self::Flush => "Flush",
        };
        f.write_str(name)
    }
}

/// A player's hand.
///
/// The category is computed from the cards when the hand is built and the
/// hand never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, lowest first.
    cards: BTreeSet<Card>,
    /// Category of the cards.
    category: HandCategory,
    /// Player holding the hand.
    player_id: String,
}

impl Hand {
    /// Creates a hand by classifying the given cards.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use fivecard::{Card, Hand, HandCategory, Rank, Suit};
    ///
    /// let cards = BTreeSet::from([
    ///     Card::new(Suit::Hearts, Rank::Two),
    ///     Card::new(Suit::Hearts, Rank::Five),
    ///     Card::new(Suit::Hearts, Rank::Nine),
    ///     Card::new(Suit::Hearts, Rank::Jack),
    ///     Card::new(Suit::Hearts, Rank::King),
    /// ]);
    /// let hand = Hand::new(cards, "Joe").unwrap();
    /// assert_eq!(hand.category(), HandCategory::Flush);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::EmptyHand`] if `cards` is empty.
    pub fn new(
        cards: BTreeSet<Card>,
        player_id: impl Into<String>,
    ) -> Result<Self, EvaluateError> {
        let category = classify(&cards)?;
        Ok(Self {
            cards,
            category,
            player_id: player_id.into(),
        })
    }

    /// Creates a hand from a slice of cards.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::DuplicateCard`] if a card is repeated and
    /// [`EvaluateError::EmptyHand`] if `cards` is empty.
    pub fn from_cards(
        cards: &[Card],
        player_id: impl Into<String>,
    ) -> Result<Self, EvaluateError> {
        let mut set = BTreeSet::new();
        for &card in cards {
            if !set.insert(card) {
                return Err(EvaluateError::DuplicateCard(card));
            }
        }

        Self::new(set, player_id)
    }

    /// Returns the cards in the hand, lowest rank first.
    #[must_use]
    pub const fn cards(&self) -> &BTreeSet<Card> {
        &self.cards
    }

    /// Returns the category of the hand.
    #[must_use]
    pub const fn category(&self) -> HandCategory {
        self.category
    }

    /// Returns the player holding the hand.
    #[must_use]
    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Compares the strength of two hands.
    ///
    /// Hands holding the same ranks compare equal even if their suits
    /// differ, see [`compare`](crate::compare::compare).
    #[must_use]
    pub fn strength_cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.player_id)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, " ({})", self.category)
    }
}
