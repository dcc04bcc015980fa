use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use log::{debug, error, info};

use crate::deck::CardSource;
use crate::error::{DealError, GameError};
use crate::hand::Hand;
use crate::resolve::winning_indices;
use crate::result::GameResult;

use super::Game;

impl<S: CardSource> Game<S> {
    /// Draws one hand for the given player.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if the source runs out of cards,
    /// [`DealError::DuplicateCard`] if it returns a card already in the hand,
    /// and an evaluation error if the hand size is zero.
    pub fn deal_hand(&mut self, player_id: &str) -> Result<Hand, GameError> {
        let mut cards = BTreeSet::new();

        for _ in 0..self.options.hand_size {
            let card = self.source.draw().ok_or(DealError::DeckExhausted)?;
            if !cards.insert(card) {
                return Err(DealError::DuplicateCard(card).into());
            }
        }

        Ok(Hand::new(cards, player_id)?)
    }

    /// Plays a full game.
    ///
    /// The card source is reset, each player is dealt a hand in order, and
    /// the winners are resolved. Any failure aborts the game.
    ///
    /// # Errors
    ///
    /// Returns a [`GameError`] if dealing fails, a hand can't be evaluated,
    /// or the winners can't be resolved (for example with fewer than two
    /// players).
    pub fn play<I, P>(&mut self, players: I) -> Result<GameResult, GameError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        self.play_round(players)
            .inspect_err(|err| error!("Game aborted: {err}"))
    }

    fn play_round<I, P>(&mut self, players: I) -> Result<GameResult, GameError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        self.source.reset();
        debug!("Card source reset");

        let mut hands = Vec::new();
        for player in players {
            let hand = self.deal_hand(player.as_ref())?;
            info!("{hand}");
            hands.push(hand);
        }

        let winners = winning_indices(&hands)?;
        let result = GameResult { hands, winners };
        info!("Winners: {result}");

        Ok(result)
    }
}
