//! Game result types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::hand::Hand;

/// Result of a complete game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Hands dealt to each player, in seating order.
    pub hands: Vec<Hand>,
    /// Positions in `hands` of the winning hands.
    pub winners: Vec<usize>,
}

impl GameResult {
    /// Returns the winning hands.
    pub fn winning_hands(&self) -> impl Iterator<Item = &Hand> {
        self.winners.iter().map(|&index| &self.hands[index])
    }

    /// Returns the ids of the winning players.
    #[must_use]
    pub fn winner_ids(&self) -> Vec<&str> {
        self.winning_hands().map(Hand::player_id).collect()
    }

    /// Returns whether more than one player won.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, hand) in self.winning_hands().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(hand.player_id())?;
        }
        Ok(())
    }
}
