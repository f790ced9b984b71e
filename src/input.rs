//! Decisions the engine asks the player for.

use crate::hand::HandView;
use crate::result::RoundResult;

/// The player's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

/// The player's answer when asked for a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wager {
    /// Bet this many chips.
    Stake(usize),
    /// Deposit more chips before betting.
    TopUp,
    /// Leave the table without playing another round.
    Leave,
}

/// What the player sees while deciding to hit or stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// The player's hand.
    pub player: HandView,
    /// The dealer's hand; partial until the dealer has played.
    pub dealer: HandView,
    /// The bet riding on the round.
    pub bet: usize,
}

/// Source of player decisions, such as a terminal or a scripted bot.
///
/// Implementations are expected to validate input themselves: the engine
/// treats a stake outside `1..=balance` or a zero deposit as an error.
pub trait PlayerInput {
    /// Asks for a bet against `balance`.
    fn wager(&mut self, balance: usize) -> Wager;

    /// Asks how many chips to deposit. `None` cancels the top-up.
    fn deposit_amount(&mut self) -> Option<usize>;

    /// Asks whether to hit or stay.
    fn hit_or_stay(&mut self, table: &TableView) -> Decision;

    /// Asks whether to play another round.
    fn play_again(&mut self) -> bool;

    /// Called once a round has been settled.
    fn round_finished(&mut self, result: &RoundResult) {
        let _ = result;
    }
}
