// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release -p holdem-eval --example sample_hands -- --hands 1000000
// ```
//
// Samples random 7 cards deals and prints how many hands fall in each
// category.
use clap::Parser;
use std::time::Instant;

use holdem_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of hands to sample.
    #[clap(long, default_value_t = 100_000)]
    hands: usize,
    /// Number of cards per hand.
    #[clap(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=52))]
    cards: u8,
    /// Seed for reproducible deals.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    let mut dealer = match cli.seed {
        Some(seed) => Dealer::with_seed(seed),
        None => Dealer::new(),
    };

    let now = Instant::now();
    let mut counts = [0usize; 11];

    for _ in 0..cli.hands {
        let deck = dealer.new_deck();
        let cards = deck.into_iter().take(cli.cards as usize).collect::<Vec<_>>();
        let hand = evaluate_hand_rank(&cards);
        counts[hand.category() as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Total hands      {}", cli.hands);
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", cli.hands as f64 / elapsed);

    use HandCategory::*;
    for category in [
        HighCard,
        OnePair,
        TwoPair,
        ThreeOfAKind,
        Straight,
        Flush,
        FullHouse,
        FourOfAKind,
        StraightFlush,
        RoyalFlush,
    ] {
        println!("{:<16} {}", format!("{category}:"), counts[category as usize]);
    }
}
