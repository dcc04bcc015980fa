//! Hand comparison and tie-break rules.

extern crate alloc;

use alloc::collections::BTreeSet;
use core::cmp::{Ordering, Reverse};

use crate::card::{Card, Rank};
use crate::eval::rank_counts;
use crate::hand::{Hand, HandCategory};

/// Compares two hands by category only.
#[must_use]
pub fn compare_category(a: &Hand, b: &Hand) -> Ordering {
    a.category().cmp(&b.category())
}

/// Compares two card sets by rank, highest card first.
///
/// The first pair of cards with different ranks decides. Suits are
/// ignored, so sets holding the same ranks are equal.
#[must_use]
pub fn compare_high_cards(a: &BTreeSet<Card>, b: &BTreeSet<Card>) -> Ordering {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .map(|(x, y)| x.rank.cmp(&y.rank))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Returns the rank held by the most cards.
///
/// When several ranks share the largest count the lowest of them is
/// returned. Returns `None` for an empty set.
#[must_use]
pub fn dominant_rank(cards: &BTreeSet<Card>) -> Option<Rank> {
    let counts = rank_counts(cards);
    Rank::ALL
        .into_iter()
        .filter(|rank| counts[rank.index()] > 0)
        .min_by_key(|rank| Reverse(counts[rank.index()]))
}

/// Compares two card sets by the rank of their dominant group.
#[must_use]
pub fn compare_dominant_group(a: &BTreeSet<Card>, b: &BTreeSet<Card>) -> Ordering {
    dominant_rank(a).cmp(&dominant_rank(b))
}

/// Compares the strength of two hands.
///
/// - Different categories: the higher category wins.
/// - [`HandCategory::HighCard`] and [`HandCategory::Flush`]: the highest
///   card decides, then the next highest and so on.
/// - [`HandCategory::OnePair`] and [`HandCategory::ThreeOfAKind`]: the
///   rank of the dominant group decides, then all cards are compared as for
///   a high card hand, grouped cards included.
///
/// Suits never take part, two hands with the same ranks are
/// [`Ordering::Equal`] and split the pot. Both hands are expected to hold
/// the same number of cards.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use fivecard::{Card, Hand, Rank, Suit, compare};
///
/// let fives = Hand::from_cards(
///     &[
///         Card::new(Suit::Hearts, Rank::Five),
///         Card::new(Suit::Clubs, Rank::Five),
///         Card::new(Suit::Spades, Rank::Two),
///         Card::new(Suit::Hearts, Rank::Seven),
///         Card::new(Suit::Diamonds, Rank::Nine),
///     ],
///     "Joe",
/// )
/// .unwrap();
/// let fours = Hand::from_cards(
///     &[
///         Card::new(Suit::Hearts, Rank::Four),
///         Card::new(Suit::Clubs, Rank::Four),
///         Card::new(Suit::Spades, Rank::Ace),
///         Card::new(Suit::Hearts, Rank::King),
///         Card::new(Suit::Diamonds, Rank::Queen),
///     ],
///     "Bob",
/// )
/// .unwrap();
///
/// assert_eq!(compare(&fives, &fours), Ordering::Greater);
/// ```
#[must_use]
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    compare_category(a, b).then_with(|| match a.category() {
        HandCategory::HighCard | HandCategory::Flush => compare_high_cards(a.cards(), b.cards()),
        HandCategory::OnePair | HandCategory::ThreeOfAKind => {
            compare_dominant_group(a.cards(), b.cards())
                .then_with(|| compare_high_cards(a.cards(), b.cards()))
        }
    })
}
