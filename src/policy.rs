//! The dealer's fixed drawing rule.

extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckExhausted;
use crate::hand::Hand;

/// Where the dealer's hand stands with respect to the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// Total is below the stand threshold; the dealer must draw.
    Drawing,
    /// Total is between the stand threshold and 21.
    Standing,
    /// Total is over 21.
    Busted,
}

/// The dealer draws while the hand total is below `stand_on`.
///
/// ```
/// use bjsolo::DealerPolicy;
///
/// let policy = DealerPolicy::default();
/// assert!(policy.should_draw(16));
/// assert!(!policy.should_draw(17));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealerPolicy {
    stand_on: u8,
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(17)
    }
}

impl DealerPolicy {
    /// Creates a policy that stands once the total reaches `stand_on`.
    #[must_use]
    pub const fn new(stand_on: u8) -> Self {
        Self { stand_on }
    }

    /// Returns the stand threshold.
    #[must_use]
    pub const fn stand_on(&self) -> u8 {
        self.stand_on
    }

    /// Returns whether a dealer holding `total` must take another card.
    #[must_use]
    pub fn should_draw(&self, total: u32) -> bool {
        total < u32::from(self.stand_on)
    }

    /// Classifies a dealer hand.
    #[must_use]
    pub fn state(&self, hand: &Hand) -> DealerState {
        if hand.is_bust() {
            DealerState::Busted
        } else if self.should_draw(hand.total()) {
            DealerState::Drawing
        } else {
            DealerState::Standing
        }
    }

    /// Draws cards into `hand` until it stands or busts.
    ///
    /// Returns the cards drawn, in order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if the deck runs out while the dealer must
    /// still draw.
    pub fn play(&self, hand: &mut Hand, deck: &mut Deck) -> Result<Vec<Card>, DeckExhausted> {
        let mut drawn = Vec::new();

        while self.state(hand) == DealerState::Drawing {
            let card = deck.deal()?;
            hand.add_card(card);
            debug!(%card, total = hand.total(), "dealer draws");
            drawn.push(card);
        }

        Ok(drawn)
    }
}
