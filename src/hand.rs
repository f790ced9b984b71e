//! Hand totals and display views.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u32 = 21;

/// Returns `(total, aces)` for `cards`, counting each Ace as 1 instead of 11
/// for as long as the total would otherwise bust.
fn evaluate_cards(cards: &[Card]) -> (u32, u32) {
    let mut total: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += u32::from(card.value());
    }

    let mut soft_aces = aces;
    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    (total, aces)
}

/// The cards dealt to one party during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    aces: u32,
    total: u32,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            aces: 0,
            total: 0,
        }
    }

    /// Adds a card and recomputes the total from the full card list.
    ///
    /// ```
    /// use bjsolo::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::Ace, Suit::Spades));
    /// hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
    /// hand.add_card(Card::new(Rank::Nine, Suit::Clubs));
    /// assert_eq!(hand.total(), 21);
    /// ```
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        let (total, aces) = evaluate_cards(&self.cards);
        self.total = total;
        self.aces = aces;
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the normalized total.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Returns the number of Aces held, whatever they currently count as.
    #[must_use]
    pub const fn aces(&self) -> u32 {
        self.aces
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns whether an Ace is still counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        let hard: u32 = self
            .cards
            .iter()
            .map(|card| if card.is_ace() { 1 } else { u32::from(card.value()) })
            .sum();
        self.aces > 0 && self.total != hard
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the dealer's face-up card: the second card dealt, or the
    /// first if only one has been dealt.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1).or_else(|| self.cards.first())
    }

    /// Renders every card and the full total.
    #[must_use]
    pub fn render_full(&self) -> HandView {
        HandView {
            cards: self.cards.clone(),
            total: self.total,
            hidden: 0,
        }
    }

    /// Renders only the up card and its value.
    #[must_use]
    pub fn render_partial(&self) -> HandView {
        let Some(up) = self.up_card() else {
            return HandView::default();
        };
        HandView {
            cards: alloc::vec![*up],
            total: u32::from(up.value()),
            hidden: self.cards.len() - 1,
        }
    }
}

/// A display snapshot of a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandView {
    /// Visible cards, in deal order.
    pub cards: Vec<Card>,
    /// Total of the visible cards.
    pub total: u32,
    /// Number of face-down cards.
    pub hidden: usize,
}

impl HandView {
    /// Returns whether any card is face down.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        self.hidden > 0
    }
}

impl fmt::Display for HandView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("(no cards)");
        }
        for _ in 0..self.hidden {
            f.write_str("?? | ")?;
        }
        for card in &self.cards {
            write!(f, "{card} | ")?;
        }
        write!(f, "(value {})", self.total)
    }
}
