// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Texas Hold'em hand classifier CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::io;

use holdem_eval::{Card, Dealer, Deck, Hand};

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates the given cards, for example `holdem eval AS KD 5C 5H 2S`.
    Eval {
        /// The cards to evaluate.
        #[clap(required_unless_present = "stdin")]
        cards: Vec<Card>,
        /// Read a JSON array of cards from stdin.
        #[clap(long, conflicts_with = "cards")]
        stdin: bool,
    },
    /// Deals two hole cards and the board cards from a shuffled deck and
    /// evaluates them.
    Deal {
        /// Seed for a reproducible shuffle.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Number of board cards.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=5))]
        board: u8,
    },
    /// Prints a deck of cards.
    Deck {
        /// Shuffle the deck.
        #[clap(long)]
        shuffle: bool,
        /// Seed for a reproducible shuffle.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Eval { cards, stdin } => {
            let cards = if stdin {
                serde_json::from_reader(io::stdin().lock()).context("Invalid cards JSON")?
            } else {
                cards
            };

            warn_duplicates(&cards);
            print_hand(&Hand::eval(&cards), cli.json)?;
        }
        Command::Deal { seed, board } => {
            let mut deck = new_dealer(seed).new_deck();
            let hole = deal(&mut deck, 2)?;
            let board = deal(&mut deck, board as usize)?;

            if !cli.json {
                println!("Hole:          {}", format_cards(&hole));
                println!("Board:         {}", format_cards(&board));
            }

            let cards = [hole, board].concat();
            print_hand(&Hand::eval(&cards), cli.json)?;
        }
        Command::Deck { shuffle, seed } => {
            let deck = new_dealer(seed).build_deck(shuffle);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&deck)?);
            } else {
                println!("{}", format_cards(&deck));
            }
        }
    }

    Ok(())
}

fn new_dealer(seed: Option<u64>) -> Dealer {
    match seed {
        Some(seed) => Dealer::with_seed(seed),
        None => Dealer::new(),
    }
}

fn deal(deck: &mut Deck, count: usize) -> Result<Vec<Card>> {
    (0..count)
        .map(|_| deck.deal().context("No cards left in the deck"))
        .collect()
}

fn warn_duplicates(cards: &[Card]) {
    for (idx, card) in cards.iter().enumerate() {
        if cards[..idx].contains(card) {
            warn!("Duplicate card {card}");
        }
    }
}

fn print_hand(hand: &Hand, json: bool) -> Result<()> {
    info!("Evaluated {} cards", hand.cards().len());

    if json {
        println!("{}", serde_json::to_string_pretty(hand)?);
    } else {
        println!("Category:      {}", hand.category());
        println!("Cards:         {}", format_cards(hand.cards()));
        println!("Rank relevant: {}", format_cards(hand.rank_relevant_cards()));
    }

    Ok(())
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
