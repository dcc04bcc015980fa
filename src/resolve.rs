//! Winner resolution.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cmp::Ordering;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::compare::compare;
use crate::error::ResolveError;
use crate::hand::{Hand, HandCategory};

/// Checks that the hands can be compared with each other.
fn validate(hands: &[Hand]) -> Result<(), ResolveError> {
    let [first, rest @ ..] = hands else {
        return Err(ResolveError::InsufficientPlayers);
    };
    if rest.is_empty() {
        return Err(ResolveError::InsufficientPlayers);
    }

    let hand_size = first.len();
    if rest.iter().any(|hand| hand.len() != hand_size) {
        return Err(ResolveError::MismatchedHandSize);
    }

    let mut seen = HashSet::with_capacity(hand_size * hands.len());
    for &card in hands.iter().flat_map(Hand::cards) {
        if !seen.insert(card) {
            return Err(ResolveError::DuplicateCard(card));
        }
    }

    Ok(())
}

/// Returns the positions of the winning hands, in input order.
///
/// Hands are grouped by category and only the highest group competes. A
/// single hand in that group wins alone, otherwise every hand that compares
/// equal to the strongest one shares the win.
///
/// # Errors
///
/// Returns [`ResolveError::InsufficientPlayers`] for fewer than two hands,
/// [`ResolveError::MismatchedHandSize`] if the hands hold different numbers
/// of cards, and [`ResolveError::DuplicateCard`] for the first card found in
/// more than one place.
pub fn winning_indices(hands: &[Hand]) -> Result<Vec<usize>, ResolveError> {
    validate(hands)?;

    let mut groups: BTreeMap<HandCategory, Vec<usize>> = BTreeMap::new();
    for (index, hand) in hands.iter().enumerate() {
        groups.entry(hand.category()).or_default().push(index);
    }

    let Some((_, group)) = groups.pop_last() else {
        return Err(ResolveError::InsufficientPlayers);
    };

    if group.len() == 1 {
        return Ok(group);
    }

    let best = group.iter().copied().fold(group[0], |best, index| {
        if compare(&hands[index], &hands[best]) == Ordering::Greater {
            index
        } else {
            best
        }
    });

    Ok(group
        .into_iter()
        .filter(|&index| compare(&hands[index], &hands[best]) == Ordering::Equal)
        .collect())
}

/// Returns the winning hands, in input order.
///
/// More than one hand is returned when the best hands tie.
///
/// # Example
///
/// ```
/// use fivecard::{Card, Hand, Rank, Suit, resolve};
///
/// let joe = Hand::from_cards(
///     &[
///         Card::new(Suit::Hearts, Rank::Eight),
///         Card::new(Suit::Clubs, Rank::Eight),
///         Card::new(Suit::Spades, Rank::Ace),
///         Card::new(Suit::Hearts, Rank::Queen),
///         Card::new(Suit::Diamonds, Rank::Jack),
///     ],
///     "Joe",
/// )
/// .unwrap();
/// let bob = Hand::from_cards(
///     &[
///         Card::new(Suit::Spades, Rank::King),
///         Card::new(Suit::Clubs, Rank::Two),
///         Card::new(Suit::Diamonds, Rank::Five),
///         Card::new(Suit::Hearts, Rank::Seven),
///         Card::new(Suit::Spades, Rank::Nine),
///     ],
///     "Bob",
/// )
/// .unwrap();
///
/// let hands = [joe, bob];
/// let winners = resolve(&hands).unwrap();
/// assert_eq!(winners.len(), 1);
/// assert_eq!(winners[0].player_id(), "Joe");
/// ```
///
/// # Errors
///
/// See [`winning_indices`].
pub fn resolve(hands: &[Hand]) -> Result<Vec<&Hand>, ResolveError> {
    Ok(winning_indices(hands)?
        .into_iter()
        .map(|index| &hands[index])
        .collect())
}
