//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that opens rounds on a freshly shuffled
//! deck, and a [`Round`] type that steps through the deal, the player's turn,
//! the dealer's turn, and settlement against a caller-owned [`Wallet`].
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameOptions, Wallet};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut wallet = Wallet::with_deposit(100).unwrap();
//!
//! let mut round = game.start_round(&wallet, 20).unwrap();
//! round.deal().unwrap();
//! round.stand().unwrap();
//! round.dealer_play().unwrap();
//! let result = round.settle(&mut wallet).unwrap();
//! assert_eq!(result.balance, wallet.balance());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod policy;
pub mod result;
pub mod wallet;

// Re-export main types
pub use card::{ACE_VALUE, Card, DECK_SIZE, RANKS, Rank, SUITS, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DeckExhausted, DepositError, RoundError, ShowdownError,
};
pub use game::{Game, Round, RoundState};
pub use hand::{BLACKJACK, Hand, HandView};
pub use input::{Decision, PlayerInput, TableView, Wager};
pub use options::GameOptions;
pub use policy::{DealerPolicy, DealerState};
pub use result::{RoundOutcome, RoundResult, SessionSummary};
pub use wallet::Wallet;
