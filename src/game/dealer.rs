extern crate alloc;

use alloc::vec::Vec;

use tracing::info;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{RoundOutcome, RoundResult};
use crate::wallet::Wallet;

use super::{Round, RoundState};

impl Round {
    /// Dealer plays their hand according to the dealer policy.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer turn or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let drawn = self.policy.play(&mut self.dealer, &mut self.deck)?;
        self.state = RoundState::Showdown;
        Ok(drawn)
    }

    /// Settles the bet against `wallet` and closes the round.
    ///
    /// # Errors
    ///
    /// Returns an error unless the player has busted or the dealer has
    /// finished playing.
    pub fn settle(&mut self, wallet: &mut Wallet) -> Result<RoundResult, ShowdownError> {
        if !matches!(self.state, RoundState::PlayerBust | RoundState::Showdown) {
            return Err(ShowdownError::InvalidState);
        }

        let outcome = RoundOutcome::decide(&self.player, &self.dealer);
        wallet.settle(outcome.is_win(), self.bet);
        self.state = RoundState::Settled;

        let player_total = self.player.total();
        let dealer_total = self.dealer.total();
        let dealer_draws = self.dealer.cards().get(2..).unwrap_or_default().to_vec();
        // The hole card stays face down when the dealer never played.
        let dealer = if outcome == RoundOutcome::PlayerBust {
            self.dealer.render_partial()
        } else {
            self.dealer.render_full()
        };

        info!(
            ?outcome,
            bet = self.bet,
            player_total,
            dealer_total,
            balance = wallet.balance(),
            "round settled"
        );

        Ok(RoundResult {
            outcome,
            bet: self.bet,
            player_total,
            dealer_total,
            dealer_bust: self.dealer.is_bust(),
            tie: outcome != RoundOutcome::PlayerBust && player_total == dealer_total,
            dealer_draws,
            player: self.player.render_full(),
            dealer,
            balance: wallet.balance(),
        })
    }
}
