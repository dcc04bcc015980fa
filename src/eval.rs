//! Hand classification.

extern crate alloc;

use alloc::collections::BTreeSet;

use crate::card::{Card, Rank};
use crate::error::EvaluateError;
use crate::hand::HandCategory;

/// Counts the cards of each rank, indexed by [`Rank::index`].
pub(crate) fn rank_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> [u8; Rank::ALL.len()] {
    let mut counts = [0; Rank::ALL.len()];
    for card in cards {
        counts[card.rank.index()] += 1;
    }
    counts
}

/// Classifies a set of cards.
///
/// The checks run in priority order and the first match wins:
///
/// 1. all cards share a suit: [`HandCategory::Flush`]
/// 2. three or more cards share a rank: [`HandCategory::ThreeOfAKind`]
/// 3. two cards share a rank: [`HandCategory::OnePair`]
/// 4. otherwise: [`HandCategory::HighCard`]
///
/// Four of a kind is reported as three of a kind and two pairs as one pair.
/// The cards are assumed to come from a valid deck.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use fivecard::{Card, HandCategory, Rank, Suit, classify};
///
/// let cards = BTreeSet::from([
///     Card::new(Suit::Hearts, Rank::Eight),
///     Card::new(Suit::Clubs, Rank::Eight),
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Queen),
///     Card::new(Suit::Diamonds, Rank::Jack),
/// ]);
/// assert_eq!(classify(&cards), Ok(HandCategory::OnePair));
/// ```
///
/// # Errors
///
/// Returns [`EvaluateError::EmptyHand`] if `cards` is empty.
pub fn classify(cards: &BTreeSet<Card>) -> Result<HandCategory, EvaluateError> {
    let Some(first) = cards.first() else {
        return Err(EvaluateError::EmptyHand);
    };

    // Flush short-circuits the grouping.
    if cards.iter().all(|card| card.suit == first.suit) {
        return Ok(HandCategory::Flush);
    }

    let counts = rank_counts(cards);

    if counts.iter().any(|&count| count >= 3) {
        Ok(HandCategory::ThreeOfAKind)
    } else if counts.contains(&2) {
        Ok(HandCategory::OnePair)
    } else {
        Ok(HandCategory::HighCard)
    }
}
