// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck and dealer.
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Card, Rank, Suit};

/// Shuffles items in place using the Fisher-Yates algorithm.
///
/// Walks the slice from the last index down to 1 swapping each item with an
/// item at a uniformly random index in `[0, i]`, given a well seeded `rng`
/// all permutations are equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// A cards Deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// The cards left in the deck, the last card is the next to be dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    /// A deck in canonical order: ranks from Two to Ace and for each rank the
    /// suits in [Suit::suits] order.
    fn default() -> Self {
        let cards = Rank::ranks()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

/// Builds and shuffles decks.
///
/// A dealer owns one random generator seeded when the dealer is created, so
/// that shuffles done in quick succession are independent. A dealer is `Send`
/// and can be moved to another thread, to shuffle from many threads give each
/// thread its own dealer.
#[derive(Debug)]
pub struct Dealer {
    rng: StdRng,
}

impl Dealer {
    /// Creates a dealer with a generator seeded from the OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a dealer with a seeded generator for reproducible decks.
    pub fn with_seed(seed: u64) -> Self {
        debug!("Creating dealer with seed {seed}");
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a dealer with the given generator.
    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Builds a 52 cards deck, in canonical order if `shuffle` is false.
    pub fn build_deck(&mut self, shuffle: bool) -> Vec<Card> {
        let deck = Vec::from(Deck::default());
        if shuffle {
            self.shuffle_deck(deck)
        } else {
            deck
        }
    }

    /// Shuffles the given cards.
    pub fn shuffle_deck(&mut self, mut deck: Vec<Card>) -> Vec<Card> {
        shuffle(&mut deck, &mut self.rng);
        deck
    }

    /// Creates a new shuffled deck for dealing.
    pub fn new_deck(&mut self) -> Deck {
        Deck::new_and_shuffled(&mut self.rng)
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::{HashMap, HashSet};

    #[test]
    fn canonical_deck() {
        let deck = Dealer::with_seed(1).build_deck(false);
        assert_eq!(deck.len(), Deck::SIZE);

        // One card per rank and suit.
        let cards = deck.iter().copied().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);

        // Rank major, suit minor.
        assert_eq!(deck[0], Card::new(Rank::Two, Suit::Clubs));
        assert_eq!(deck[1], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(deck[2], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(deck[3], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(deck[4], Card::new(Rank::Three, Suit::Clubs));
        assert_eq!(deck[51], Card::new(Rank::Ace, Suit::Spades));

        // Same order for every call and every dealer.
        assert_eq!(deck, Dealer::new().build_deck(false));
        assert_eq!(deck, Vec::from(Deck::default()));
    }

    #[test]
    fn shuffled_deck_is_permutation() {
        let mut dealer = Dealer::with_seed(7);
        let canonical = dealer.build_deck(false);
        let shuffled = dealer.build_deck(true);

        assert_eq!(shuffled.len(), Deck::SIZE);
        assert_ne!(shuffled, canonical);

        let mut sorted = shuffled.clone();
        sorted.sort_by_key(|c| (c.rank(), c.suit() as u8));
        assert_eq!(sorted, canonical);
    }

    #[test]
    fn consecutive_shuffles_differ() {
        let mut dealer = Dealer::new();
        let first = dealer.build_deck(true);
        let second = dealer.build_deck(true);
        assert_ne!(first, second);

        // Independent dealers created back to back.
        let first = Dealer::new().build_deck(true);
        let second = Dealer::new().build_deck(true);
        assert_ne!(first, second);
    }

    #[test]
    fn seeded_dealer_is_reproducible() {
        let first = Dealer::with_seed(42).build_deck(true);
        let second = Dealer::with_seed(42).build_deck(true);
        assert_eq!(first, second);

        let other = Dealer::with_seed(43).build_deck(true);
        assert_ne!(first, other);
    }

    #[test]
    fn shuffle_is_uniform() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut counts = HashMap::default();

        for _ in 0..6_000 {
            let mut items = [1, 2, 3];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_insert(0usize) += 1;
        }

        // All 6 permutations, each close to 1000.
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..1200).contains(count), "count {count}");
        }
    }

    #[test]
    fn shuffle_short_slices() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut empty: [Card; 0] = [];
        shuffle(&mut empty, &mut rng);

        let card = Card::new(Rank::Ace, Suit::Spades);
        let mut one = [card];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [card]);
    }

    #[test]
    fn deck_deal_and_remove() {
        let mut deck = Dealer::with_seed(3).new_deck();
        assert_eq!(deck.count(), Deck::SIZE);

        let top = *deck.cards().last().unwrap();
        assert_eq!(deck.deal(), Some(top));
        assert_eq!(deck.count(), Deck::SIZE - 1);

        let next = deck.cards()[0];
        deck.remove(next);
        assert_eq!(deck.count(), Deck::SIZE - 2);
        assert!(!deck.cards().contains(&next));

        let mut dealt = HashSet::default();
        while let Some(card) = deck.deal() {
            dealt.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(dealt.len(), Deck::SIZE - 2);
        assert_eq!(deck.deal(), None);
    }
}
