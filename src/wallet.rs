//! The player's chip balance.

use crate::error::{BetError, DepositError};

/// Chips available to the player for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    balance: usize,
}

impl Wallet {
    /// Creates an empty wallet.
    #[must_use]
    pub const fn new() -> Self {
        Self { balance: 0 }
    }

    /// Creates a wallet funded with an opening deposit.
    ///
    /// # Errors
    ///
    /// Returns [`DepositError::InvalidAmount`] if `amount` is zero.
    pub fn with_deposit(amount: usize) -> Result<Self, DepositError> {
        let mut wallet = Self::new();
        wallet.deposit(amount)?;
        Ok(wallet)
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Adds chips and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns [`DepositError::InvalidAmount`] if `amount` is zero.
    pub const fn deposit(&mut self, amount: usize) -> Result<usize, DepositError> {
        if amount == 0 {
            return Err(DepositError::InvalidAmount);
        }
        self.balance = self.balance.saturating_add(amount);
        Ok(self.balance)
    }

    /// Commits a bet of `amount` chips.
    ///
    /// The balance is left untouched until the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is zero or larger than the balance.
    ///
    /// ```
    /// use bjsolo::{BetError, Wallet};
    ///
    /// let wallet = Wallet::with_deposit(50).unwrap();
    /// assert_eq!(wallet.place_bet(50), Ok(50));
    /// assert_eq!(wallet.place_bet(51), Err(BetError::InsufficientFunds));
    /// ```
    pub const fn place_bet(&self, amount: usize) -> Result<usize, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.balance {
            return Err(BetError::InsufficientFunds);
        }
        Ok(amount)
    }

    /// Applies a round result: a win adds `bet`, a loss removes it.
    ///
    /// `bet` must have been accepted by [`Wallet::place_bet`]; a losing bet
    /// larger than the balance trips a debug assertion.
    pub const fn settle(&mut self, won: bool, bet: usize) {
        debug_assert!(won || bet <= self.balance, "bet exceeds balance");
        self.balance = if won {
            self.balance.saturating_add(bet)
        } else {
            self.balance.saturating_sub(bet)
        };
    }
}
