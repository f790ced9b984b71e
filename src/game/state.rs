//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Bet recorded, no cards dealt yet.
    Betting,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// Player went over 21; the round only needs settling.
    PlayerBust,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Dealer has finished; the round awaits settlement.
    Showdown,
    /// Wallet has been updated; the round is over.
    Settled,
}

impl RoundState {
    /// Returns whether the dealer's hole card is still face down.
    #[must_use]
    pub const fn hides_dealer(self) -> bool {
        matches!(
            self,
            Self::Betting | Self::Dealing | Self::PlayerTurn | Self::PlayerBust | Self::DealerTurn
        )
    }
}
