//! Game configuration options.

use crate::policy::DealerPolicy;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default().with_dealer_stands_on(18);
/// assert_eq!(options.dealer_stands_on, 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Total at which the dealer stops drawing.
    pub dealer_stands_on: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
        }
    }
}

impl GameOptions {
    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(17);
    /// assert_eq!(options.dealer_policy().stand_on(), 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Returns the dealer policy these options describe.
    #[must_use]
    pub const fn dealer_policy(&self) -> DealerPolicy {
        DealerPolicy::new(self.dealer_stands_on)
    }
}
