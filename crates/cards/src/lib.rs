// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use holdem_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! a [Deck] type for shuffling and dealing cards, and a [Dealer] that owns a
//! random generator seeded once and builds canonical or shuffled decks:
//!
//! ```
//! # use holdem_cards::{Dealer, Deck};
//! let mut dealer = Dealer::with_seed(42);
//! let canonical = dealer.build_deck(false);
//! let shuffled = dealer.build_deck(true);
//! assert_eq!(canonical.len(), Deck::SIZE);
//! assert_eq!(shuffled.len(), Deck::SIZE);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseCardError, Rank, Suit};

mod deck;
pub use deck::{Dealer, Deck, shuffle};
