#![allow(dead_code)]

use poker_wild::cards::{Card, Joker, Rank, Suit, WildCard};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// All 52 cards, suit-major.
pub fn full_deck() -> Vec<Card> {
    Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s))).collect()
}

/// Seven distinct cards dealt from a deck shuffled with `seed`.
pub fn deal_seven(seed: u64) -> [Card; 7] {
    let mut deck = full_deck();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    core::array::from_fn(|i| deck[i])
}

/// Seven elements with `jokers` (0..=2) of the trailing cards swapped for jokers.
pub fn deal_wild(seed: u64, jokers: usize) -> [WildCard; 7] {
    let cards = deal_seven(seed);
    let mut hand = cards.map(WildCard::Card);
    for (slot, joker) in [Joker::RED, Joker::BLACK].into_iter().take(jokers).enumerate() {
        hand[6 - slot] = WildCard::Joker(joker);
    }
    hand
}

pub fn sorted_tokens(cards: &[Card]) -> Vec<String> {
    let mut out: Vec<String> = cards.iter().map(Card::to_string).collect();
    out.sort();
    out
}
