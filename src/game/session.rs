use tracing::{debug, info};

use crate::error::RoundError;
use crate::input::{Decision, PlayerInput, Wager};
use crate::result::{RoundResult, SessionSummary};
use crate::wallet::Wallet;

use super::{Game, Round, RoundState};

impl Game {
    /// Plays one full round, asking `input` for every decision.
    ///
    /// The player is asked for a bet until they stake chips, depositing more
    /// whenever they ask to top up first. Returns `None` if the player leaves
    /// instead of betting.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` hands back an invalid deposit or stake,
    /// or if the deck runs out mid-round.
    pub fn play_round<P: PlayerInput + ?Sized>(
        &mut self,
        wallet: &mut Wallet,
        input: &mut P,
    ) -> Result<Option<RoundResult>, RoundError> {
        let amount = loop {
            match input.wager(wallet.balance()) {
                Wager::Stake(amount) => break amount,
                Wager::TopUp => {
                    let Some(amount) = input.deposit_amount() else {
                        continue;
                    };
                    let balance = wallet.deposit(amount)?;
                    debug!(balance, "chips deposited");
                }
                Wager::Leave => {
                    debug!("player left the table");
                    return Ok(None);
                }
            }
        };

        let mut round = self.start_round(wallet, amount)?;
        round.deal()?;
        round.play_out(wallet, input).map(Some)
    }

    /// Plays rounds until `input` declines to play again or leaves at the
    /// wager prompt.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Game::play_round`].
    pub fn play_session<P: PlayerInput + ?Sized>(
        &mut self,
        wallet: &mut Wallet,
        input: &mut P,
    ) -> Result<SessionSummary, RoundError> {
        let mut summary = SessionSummary {
            rounds: 0,
            wins: 0,
            losses: 0,
            starting_balance: wallet.balance(),
            balance: wallet.balance(),
        };

        loop {
            let Some(result) = self.play_round(wallet, input)? else {
                break;
            };
            summary.rounds += 1;
            if result.outcome.is_win() {
                summary.wins += 1;
            } else {
                summary.losses += 1;
            }
            summary.balance = result.balance;
            input.round_finished(&result);

            if !input.play_again() {
                break;
            }
        }

        info!(
            rounds = summary.rounds,
            wins = summary.wins,
            losses = summary.losses,
            balance = summary.balance,
            "session finished"
        );
        Ok(summary)
    }
}

impl Round {
    /// Runs a dealt round to completion: the player's turn, the dealer's
    /// turn unless the player busted, and settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been dealt or the deck runs out.
    pub fn play_out<P: PlayerInput + ?Sized>(
        &mut self,
        wallet: &mut Wallet,
        input: &mut P,
    ) -> Result<RoundResult, RoundError> {
        while self.state == RoundState::PlayerTurn {
            match input.hit_or_stay(&self.table()) {
                Decision::Hit => {
                    self.hit()?;
                }
                Decision::Stay => self.stand()?,
            }
        }

        if self.state == RoundState::DealerTurn {
            self.dealer_play()?;
        }

        Ok(self.settle(wallet)?)
    }
}
