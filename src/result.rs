//! Round and session result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{Hand, HandView};

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player went over 21 and lost the bet; the dealer did not play.
    PlayerBust,
    /// Player wins the bet (dealer busted, or player total at least the
    /// dealer's).
    PlayerWin,
    /// Dealer total beats the player's.
    DealerWin,
}

impl RoundOutcome {
    /// Decides the outcome for two finished hands.
    ///
    /// A tie goes to the player.
    ///
    /// ```
    /// use bjsolo::{Card, Hand, Rank, RoundOutcome, Suit};
    ///
    /// let mut player = Hand::new();
    /// player.add_card(Card::new(Rank::King, Suit::Spades));
    /// player.add_card(Card::new(Rank::Queen, Suit::Hearts));
    /// let dealer = player.clone();
    /// assert_eq!(RoundOutcome::decide(&player, &dealer), RoundOutcome::PlayerWin);
    /// ```
    #[must_use]
    pub const fn decide(player: &Hand, dealer: &Hand) -> Self {
        if player.is_bust() {
            Self::PlayerBust
        } else if dealer.is_bust() || player.total() >= dealer.total() {
            Self::PlayerWin
        } else {
            Self::DealerWin
        }
    }

    /// Returns whether the player collects the bet.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::PlayerWin)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: RoundOutcome,
    /// The bet that was settled.
    pub bet: usize,
    /// The player's final total.
    pub player_total: u32,
    /// The dealer's final total.
    pub dealer_total: u32,
    /// Whether the dealer went over 21.
    pub dealer_bust: bool,
    /// Whether the totals were equal (settled as a player win).
    pub tie: bool,
    /// Cards the dealer drew after the initial deal.
    pub dealer_draws: Vec<Card>,
    /// The player's hand, fully revealed.
    pub player: HandView,
    /// The dealer's hand: fully revealed after a showdown, up card only
    /// after a player bust.
    pub dealer: HandView,
    /// Wallet balance after settlement.
    pub balance: usize,
}

/// Totals for a sequence of rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played.
    pub rounds: usize,
    /// Rounds won by the player.
    pub wins: usize,
    /// Rounds lost by the player, busts included.
    pub losses: usize,
    /// Balance when the session began.
    pub starting_balance: usize,
    /// Balance when the session ended.
    pub balance: usize,
}

impl SessionSummary {
    /// Returns the chips won (positive) or lost (negative) over the session.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "balances fit in isize")]
    pub const fn net(&self) -> isize {
        self.balance as isize - self.starting_balance as isize
    }
}
