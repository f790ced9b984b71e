//! Round engine and session driver.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::input::TableView;
use crate::options::GameOptions;
use crate::policy::DealerPolicy;

mod actions;
mod bet;
mod dealer;
mod session;
pub mod state;

pub use state::RoundState;

/// Owns the table rules and the shuffling RNG, and starts rounds.
///
/// The wallet is owned by the caller and lent to the game for each round.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Random number generator used to shuffle each fresh deck.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.options.dealer_stands_on, 17);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds and shuffles a fresh 52-card deck.
    pub fn shuffled_deck(&mut self) -> Deck {
        Deck::new(&mut self.rng)
    }
}

/// One hand of play between the player and the dealer.
///
/// A round moves through [`RoundState`] one step at a time: [`Round::deal`],
/// then [`Round::hit`] / [`Round::stand`], then [`Round::dealer_play`], and
/// finally [`Round::settle`].
#[derive(Debug, Clone)]
pub struct Round {
    state: RoundState,
    bet: usize,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    policy: DealerPolicy,
}

impl Round {
    /// Creates a round in the betting state with `bet` already committed.
    ///
    /// `bet` is not checked here: it must have come from
    /// [`Wallet::place_bet`](crate::Wallet::place_bet) on the wallet that
    /// will settle the round. [`Game::start_round`] does this for you.
    #[must_use]
    pub const fn new(bet: usize, deck: Deck, policy: DealerPolicy) -> Self {
        Self {
            state: RoundState::Betting,
            bet,
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            policy,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the bet riding on the round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer policy in effect.
    #[must_use]
    pub const fn policy(&self) -> DealerPolicy {
        self.policy
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns what the player can see: their own hand, the dealer's up card
    /// (or the whole dealer hand once the dealer has played), and the bet.
    #[must_use]
    pub fn table(&self) -> TableView {
        let dealer = if self.state.hides_dealer() {
            self.dealer.render_partial()
        } else {
            self.dealer.render_full()
        };
        TableView {
            player: self.player.render_full(),
            dealer,
            bet: self.bet,
        }
    }
}
