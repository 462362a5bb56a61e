// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em hand classifier.
//!
//! Classifies a set of cards, usually 2 hole cards and up to 5 board cards,
//! into the strongest poker hand category and returns the cards that justify
//! the category together with the kickers that complete a 5 cards hand.
//!
//! To classify cards use [evaluate_hand_rank] or [Hand::eval]:
//!
//! ```
//! # use holdem_eval::*;
//! let cards = ["KC", "TC", "AC", "QC", "8S", "2H", "JC"]
//!     .iter()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let hand = Hand::eval(&cards);
//! assert_eq!(hand.category(), HandCategory::RoyalFlush);
//! assert_eq!(hand.rank_relevant_cards().len(), 5);
//! ```
//!
//! Evaluation never fails, cards that don't make any category, including an
//! empty set of cards, are classified as [HandCategory::HighCard].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{detect, evaluate_hand_rank};

mod hand;
pub use hand::{Hand, HandCategory};

// Reexport cards types.
pub use holdem_cards::{Card, Dealer, Deck, ParseCardError, Rank, Suit};
