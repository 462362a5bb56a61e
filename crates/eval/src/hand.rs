// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation result types.
use serde::{Deserialize, Serialize};
use std::fmt;

use holdem_cards::Card;

/// A poker hand category.
///
/// Variants are declared from the weakest to the strongest and the derived
/// [Ord] is the category strength.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandCategory {
    /// Not evaluated.
    #[default]
    Unknown,
    /// High card.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::Unknown => "Unknown",
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// An evaluated hand.
///
/// The `cards` field is the hand made from the evaluated cards, for pairs,
/// two pair, three and four of a kind it includes the kickers that complete a
/// 5 cards hand. The `rank_relevant_cards` field has only the cards that make
/// the category, for a pair the two paired cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    category: HandCategory,
    rank_relevant_cards: Vec<Card>,
}

impl Hand {
    pub(crate) fn new(
        cards: Vec<Card>,
        category: HandCategory,
        rank_relevant_cards: Vec<Card>,
    ) -> Self {
        debug_assert!(rank_relevant_cards.iter().all(|c| cards.contains(c)));

        Self {
            cards,
            category,
            rank_relevant_cards,
        }
    }

    /// Evaluates the given cards, see [crate::evaluate_hand_rank].
    pub fn eval(cards: &[Card]) -> Hand {
        crate::evaluate_hand_rank(cards)
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The cards that make the hand category.
    pub fn rank_relevant_cards(&self) -> &[Card] {
        &self.rank_relevant_cards
    }

    /// The hand cards that don't contribute to the category.
    pub fn kickers(&self) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(|c| !self.rank_relevant_cards.contains(c))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_cards::{Rank, Suit};

    #[test]
    fn category_strength_order() {
        use HandCategory::*;

        let categories = [
            Unknown,
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
        ];

        for pair in categories.windows(2) {
            assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
        }

        assert_eq!(HandCategory::default(), Unknown);
    }

    #[test]
    fn hand_kickers_and_display() {
        let aces = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
        ];
        let mut cards = aces.clone();
        cards.push(Card::new(Rank::King, Suit::Clubs));

        let hand = Hand::new(cards, HandCategory::OnePair, aces);
        assert_eq!(
            hand.kickers().copied().collect::<Vec<_>>(),
            vec![Card::new(Rank::King, Suit::Clubs)]
        );
        assert_eq!(hand.to_string(), "One Pair: AS AH KC");
    }

    #[test]
    fn hand_json_fields() {
        let card = Card::new(Rank::Two, Suit::Diamonds);
        let hand = Hand::new(vec![card], HandCategory::HighCard, vec![card]);

        let json = serde_json::to_value(&hand).unwrap();
        assert_eq!(json["category"], "HighCard");
        assert_eq!(json["cards"][0]["rank"], "Two");
        assert_eq!(json["rank_relevant_cards"][0]["suit"], "Diamonds");

        let parsed: Hand = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, hand);
    }
}
