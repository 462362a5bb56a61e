// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator runs a list of category detectors from the strongest
//! category to the weakest and returns the hand built by the first detector
//! that matches, if no detector matches the cards are a high card hand.
//!
//! Detectors work on their own sorted copy of the cards and never modify the
//! caller cards. Some detectors return the first candidate they find while
//! scanning the cards rather than the strongest one, see [detect] for the
//! rules of each detector.
use log::{debug, trace};

use holdem_cards::Card;

use crate::{Hand, HandCategory};

pub mod detect;

/// A category detector, returns `None` if the cards don't make the category.
type Detector = fn(&[Card]) -> Option<Hand>;

/// Detectors in precedence order.
const DETECTORS: [(HandCategory, Detector); 9] = [
    (HandCategory::RoyalFlush, detect::royal_flush),
    (HandCategory::StraightFlush, detect::straight_flush),
    (HandCategory::FourOfAKind, detect::four_of_a_kind),
    (HandCategory::FullHouse, detect::full_house),
    (HandCategory::Flush, detect::flush),
    (HandCategory::Straight, detect::straight),
    (HandCategory::ThreeOfAKind, detect::three_of_a_kind),
    (HandCategory::TwoPair, detect::two_pair),
    (HandCategory::OnePair, detect::one_pair),
];

/// Returns the strongest hand made with the given cards.
///
/// This function always succeeds, for cards that don't make any other
/// category, including no cards at all, it returns a
/// [HandCategory::HighCard] hand with all the cards sorted by rank.
pub fn evaluate_hand_rank(cards: &[Card]) -> Hand {
    DETECTORS
        .iter()
        .find_map(|(category, detector)| match detector(cards) {
            Some(hand) => {
                debug!("Detected {category}: {hand}");
                Some(hand)
            }
            None => {
                trace!("No {category} in {} cards", cards.len());
                None
            }
        })
        .unwrap_or_else(|| detect::high_card(cards))
}
