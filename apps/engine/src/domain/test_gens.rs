//! Proptest strategies for domain property tests.

use proptest::prelude::*;

use crate::domain::cards_types::{Card, JokerKind, Rank, Suit};
use crate::domain::dealing::double_deck;
use crate::domain::trump::TrumpInfo;

pub fn arb_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn arb_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn arb_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        9 => (arb_suit(), arb_rank(), 0..2u8).prop_map(|(s, r, d)| Card::suited(s, r, d)),
        1 => (prop::sample::select(vec![JokerKind::Small, JokerKind::Big]), 0..2u8)
            .prop_map(|(k, d)| Card::joker(k, d)),
    ]
}

pub fn arb_trump() -> impl Strategy<Value = TrumpInfo> {
    (arb_rank(), prop::option::of(arb_suit())).prop_map(|(rank, suit)| TrumpInfo::new(rank, suit))
}

/// `n` distinct physical cards from the double deck.
pub fn arb_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(double_deck(), n)
}
