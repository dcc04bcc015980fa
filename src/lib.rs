//! A simplified five-card poker hand evaluator with optional `no_std` support.
//!
//! Hands fall into one of four categories, from the weakest to the
//! strongest: high card, one pair, three of a kind and flush. The crate
//! classifies card sets with [`classify`], orders hands with [`compare()`],
//! and picks the winners of a showdown with [`resolve()`], ties included.
//!
//! A [`Game`] deals one hand per player from a seeded [`Deck`] and reports
//! the winners.
//!
//! # Example
//!
//! ```no_run
//! use fivecard::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let result = game.play(["Joe", "Bob", "Sally"]).unwrap();
//! println!("{result} Wins!");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod compare;
pub mod deck;
pub mod error;
pub mod eval;
pub mod game;
pub mod hand;
pub mod options;
pub mod resolve;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use compare::compare;
pub use deck::{CardSource, Deck};
pub use error::{DealError, EvaluateError, GameError, ResolveError};
pub use eval::classify;
pub use game::Game;
pub use hand::{HAND_SIZE, Hand, HandCategory};
pub use options::GameOptions;
pub use resolve::{resolve, winning_indices};
pub use result::GameResult;
