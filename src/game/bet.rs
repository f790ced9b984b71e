use tracing::debug;

use crate::error::{BetError, DealError};
use crate::wallet::Wallet;

use super::{Game, Round, RoundState};

impl Game {
    /// Places a bet against `wallet` and opens a round on a freshly shuffled
    /// deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero or exceeds the wallet balance.
    pub fn start_round(&mut self, wallet: &Wallet, amount: usize) -> Result<Round, BetError> {
        let bet = wallet.place_bet(amount)?;
        let deck = self.shuffled_deck();
        debug!(bet, balance = wallet.balance(), "round opened");
        Ok(Round::new(bet, deck, self.options.dealer_policy()))
    }
}

impl Round {
    /// Deals two cards each, alternating player and dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting state or the deck
    /// holds fewer than the four cards needed. The round is left untouched in
    /// either case.
    pub fn deal(&mut self) -> Result<(), DealError> {
        const CARDS_NEEDED: usize = 4;

        if self.state != RoundState::Betting {
            return Err(DealError::InvalidState);
        }
        if self.deck.len() < CARDS_NEEDED {
            return Err(DealError::NoCards);
        }
        self.state = RoundState::Dealing;

        for _ in 0..2 {
            self.player.add_card(self.deck.deal()?);
            self.dealer.add_card(self.deck.deal()?);
        }

        debug!(
            player_total = self.player.total(),
            up_card = ?self.dealer.up_card(),
            "initial deal"
        );

        self.state = RoundState::PlayerTurn;
        Ok(())
    }
}
