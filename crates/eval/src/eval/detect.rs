// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category detectors.
//!
//! Each detector checks a single category and returns `None` when the cards
//! don't make it, detectors don't check for stronger categories so they give
//! the right answer only when called in the [evaluate_hand_rank] order.
//!
//! Detectors never fail on short inputs, a detector that needs more cards
//! than the ones given just returns `None`.
//!
//! [evaluate_hand_rank]: crate::evaluate_hand_rank
use holdem_cards::{Card, Rank, Suit};

use crate::{Hand, HandCategory};

/// The number of cards in a complete hand.
const HAND_SIZE: usize = 5;

/// Ranks of a royal flush from the top card.
const ROYAL_RANKS: [Rank; HAND_SIZE] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
];

/// Detects a royal flush.
///
/// Takes the first suit that gets to five cards scanning the cards from the
/// highest rank and checks they are Ace to Ten, if they are not it doesn't
/// look at other suits.
pub fn royal_flush(cards: &[Card]) -> Option<Hand> {
    if cards.len() < HAND_SIZE {
        return None;
    }

    let flush = first_suited_five(&sort_by_rank(cards))?;
    if flush.iter().map(Card::rank).eq(ROYAL_RANKS) {
        Some(Hand::new(flush.clone(), HandCategory::RoyalFlush, flush))
    } else {
        None
    }
}

/// Detects a straight flush.
///
/// Checks each suit with at least five cards, in the order suits are first
/// seen from the highest rank, and returns the first with five consecutive
/// ranks. An Ace closes a 5-4-3-2 run as the low card.
pub fn straight_flush(cards: &[Card]) -> Option<Hand> {
    if cards.len() < HAND_SIZE {
        return None;
    }

    group_by_suit(&sort_by_rank(cards))
        .into_iter()
        .filter(|(_, suited)| suited.len() >= HAND_SIZE)
        .find_map(|(_, suited)| consecutive_run(&suited))
        .map(|run| Hand::new(run.clone(), HandCategory::StraightFlush, run))
}

/// Detects four of a kind and completes the hand with the highest kicker.
pub fn four_of_a_kind(cards: &[Card]) -> Option<Hand> {
    n_of_a_kind(cards, 4, HandCategory::FourOfAKind)
}

/// Detects a full house, needs more than five cards.
///
/// Scans the cards from the highest rank taking the first three of a kind
/// and the first pair with a different rank, in the order they are found.
pub fn full_house(cards: &[Card]) -> Option<Hand> {
    if cards.len() <= HAND_SIZE {
        return None;
    }

    let sorted = sort_by_rank(cards);
    let mut three: Option<&[Card]> = None;
    let mut pair: Option<&[Card]> = None;

    for i in 0..sorted.len() - 1 {
        let rank = sorted[i].rank();
        let is_three = i + 2 < sorted.len()
            && sorted[i + 1].rank() == rank
            && sorted[i + 2].rank() == rank;

        if three.is_none() && is_three {
            three = Some(&sorted[i..i + 3]);
        } else if pair.is_none()
            && sorted[i + 1].rank() == rank
            && three.is_none_or(|t| t[0].rank() != rank)
        {
            pair = Some(&sorted[i..i + 2]);
        }

        if let (Some(three), Some(pair)) = (three, pair) {
            let full_house = [three, pair].concat();
            return Some(Hand::new(
                full_house.clone(),
                HandCategory::FullHouse,
                full_house,
            ));
        }
    }

    None
}

/// Detects a flush.
///
/// Returns the first five cards of the first suit that gets to five cards,
/// in the given cards order.
pub fn flush(cards: &[Card]) -> Option<Hand> {
    if cards.len() < HAND_SIZE {
        return None;
    }

    let flush = first_suited_five(cards)?;
    Some(Hand::new(flush.clone(), HandCategory::Flush, flush))
}

/// Detects a straight.
///
/// This detector doesn't sort the cards, it walks them in the given order
/// looking for five cards with consecutive descending ranks, so cards must
/// be ordered by descending rank for a straight to be found. An Ace as the
/// first card closes a 5-4-3-2 run as the low card.
pub fn straight(cards: &[Card]) -> Option<Hand> {
    if cards.len() < HAND_SIZE {
        return None;
    }

    let run = consecutive_run(cards)?;
    Some(Hand::new(run.clone(), HandCategory::Straight, run))
}

/// Detects three of a kind and completes the hand with the highest kickers.
pub fn three_of_a_kind(cards: &[Card]) -> Option<Hand> {
    n_of_a_kind(cards, 3, HandCategory::ThreeOfAKind)
}

/// Detects two pair and completes the hand with the highest kicker.
///
/// Pairs are taken from the highest rank, a pair with the same rank of the
/// highest card is skipped.
pub fn two_pair(cards: &[Card]) -> Option<Hand> {
    if cards.len() < 4 {
        return None;
    }

    let sorted = sort_by_rank(cards);
    let top_rank = sorted[0].rank();
    let mut pairs = Vec::with_capacity(2);

    let mut i = 0;
    while i + 1 < sorted.len() {
        let rank = sorted[i].rank();
        if sorted[i + 1].rank() == rank && rank != top_rank {
            pairs.push(i);
            if pairs.len() == 2 {
                let (first, second) = (pairs[0], pairs[1]);
                let two_pair = [&sorted[first..first + 2], &sorted[second..second + 2]].concat();
                let rest = sorted
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| !pairs.iter().any(|&p| *idx == p || *idx == p + 1))
                    .map(|(_, c)| *c)
                    .collect::<Vec<_>>();

                return Some(Hand::new(
                    complete_to_five(two_pair.clone(), &rest),
                    HandCategory::TwoPair,
                    two_pair,
                ));
            }

            // Skip the pair second card.
            i += 2;
        } else {
            i += 1;
        }
    }

    None
}

/// Detects a pair and completes the hand with the highest kickers.
pub fn one_pair(cards: &[Card]) -> Option<Hand> {
    n_of_a_kind(cards, 2, HandCategory::OnePair)
}

/// Builds a high card hand, all the cards sorted by rank.
///
/// This never fails, the hand has all the given cards, not only the top
/// five, and is empty for no cards.
pub fn high_card(cards: &[Card]) -> Hand {
    let sorted = sort_by_rank(cards);
    Hand::new(sorted.clone(), HandCategory::HighCard, sorted)
}

/// Returns a copy of the cards sorted from the highest rank.
fn sort_by_rank(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.rank().cmp(&a.rank()));
    sorted
}

/// Appends the highest of the remaining cards until there are five cards.
fn complete_to_five(mut used: Vec<Card>, remaining: &[Card]) -> Vec<Card> {
    let missing = HAND_SIZE.saturating_sub(used.len());
    used.extend(sort_by_rank(remaining).into_iter().take(missing));
    used
}

/// Finds the first `n` adjacent cards with the same rank from the highest
/// rank and completes the hand with kickers.
fn n_of_a_kind(cards: &[Card], n: usize, category: HandCategory) -> Option<Hand> {
    if cards.len() < n {
        return None;
    }

    let sorted = sort_by_rank(cards);
    let start = sorted
        .windows(n)
        .position(|w| w.iter().all(|c| c.rank() == w[0].rank()))?;

    let matched = sorted[start..start + n].to_vec();
    let rest = [&sorted[..start], &sorted[start + n..]].concat();

    Some(Hand::new(complete_to_five(matched.clone(), &rest), category, matched))
}

/// Groups cards by suit, suits are in the order they are first seen.
fn group_by_suit(cards: &[Card]) -> Vec<(Suit, Vec<Card>)> {
    let mut groups: Vec<(Suit, Vec<Card>)> = Vec::with_capacity(4);
    for &card in cards {
        match groups.iter_mut().find(|(suit, _)| *suit == card.suit()) {
            Some((_, suited)) => suited.push(card),
            None => groups.push((card.suit(), vec![card])),
        }
    }

    groups
}

/// Returns the cards of the first suit that gets to five cards.
fn first_suited_five(cards: &[Card]) -> Option<Vec<Card>> {
    let mut groups: Vec<(Suit, Vec<Card>)> = Vec::with_capacity(4);
    for &card in cards {
        let idx = match groups.iter().position(|(suit, _)| *suit == card.suit()) {
            Some(idx) => idx,
            None => {
                groups.push((card.suit(), Vec::with_capacity(HAND_SIZE)));
                groups.len() - 1
            }
        };

        let suited = &mut groups[idx].1;
        suited.push(card);
        if suited.len() == HAND_SIZE {
            return Some(std::mem::take(suited));
        }
    }

    None
}

/// Finds five cards with consecutive descending ranks walking the cards in
/// order, a gap restarts the run and equal ranks are skipped.
///
/// If the walk ends with a 5-4-3-2 run and the first card is an Ace the Ace
/// is added as the low card.
fn consecutive_run(cards: &[Card]) -> Option<Vec<Card>> {
    let first = *cards.first()?;
    let mut run = Vec::with_capacity(HAND_SIZE);
    run.push(first);

    for w in cards.windows(2) {
        if run.len() == HAND_SIZE {
            break;
        }

        let (current, next) = (w[0], w[1]);
        if next.rank().is_one_below(current.rank()) {
            run.push(next);
        } else if next.rank() != current.rank() {
            run.clear();
            run.push(next);
        }
    }

    if run.len() == HAND_SIZE - 1 && run[3].rank() == Rank::Two && first.rank() == Rank::Ace {
        run.push(first);
    }

    (run.len() == HAND_SIZE).then_some(run)
}
