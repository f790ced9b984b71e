//! Error types for game operations.

use thiserror::Error;

/// The deck had no cards left when a deal was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct DeckExhausted;

/// Errors that can occur when depositing chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DepositError {
    /// Deposit amount is below one chip.
    #[error("deposit amount must be at least 1")]
    InvalidAmount,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the wallet balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NoCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for showdown.
    #[error("invalid round state for showdown")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Any error that can end a round played through [`crate::Game::play_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Deposit rejected.
    #[error(transparent)]
    Deposit(#[from] DepositError),
    /// Bet rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Initial deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play or settlement failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}

impl From<DeckExhausted> for DealError {
    fn from(_: DeckExhausted) -> Self {
        Self::NoCards
    }
}

impl From<DeckExhausted> for ActionError {
    fn from(_: DeckExhausted) -> Self {
        Self::NoCards
    }
}

impl From<DeckExhausted> for ShowdownError {
    fn from(_: DeckExhausted) -> Self {
        Self::NoCards
    }
}
