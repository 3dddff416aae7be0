//! Trump definition and the trump-aware card ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, JokerKind, Rank, Suit};

/// The round's trump definition: a trump rank (the defending team's current
/// rank) and an optional trump suit fixed by declaration. No declared suit
/// means a no-trump round where only jokers and trump-rank cards are trump.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrumpInfo {
    pub rank: Rank,
    pub suit: Option<Suit>,
}

impl TrumpInfo {
    pub fn new(rank: Rank, suit: Option<Suit>) -> Self {
        Self { rank, suit }
    }

    pub fn is_trump(&self, card: Card) -> bool {
        match card {
            Card::Joker { .. } => true,
            Card::Suited { suit, rank, .. } => rank == self.rank || Some(suit) == self.suit,
        }
    }

    /// The trump-group key: all trump cards act as one suit.
    pub fn effective_suit(&self, card: Card) -> EffectiveSuit {
        if self.is_trump(card) {
            EffectiveSuit::Trump
        } else {
            match card.suit() {
                Some(suit) => EffectiveSuit::Plain(suit),
                // Jokers are always trump; unreachable by construction.
                None => EffectiveSuit::Trump,
            }
        }
    }
}

/// A suit group for combo and follow purposes: one of the four plain suits,
/// or the merged trump group.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum EffectiveSuit {
    Plain(Suit),
    Trump,
}

/// Strength level of a trump card within the trump group.
///
/// Plain trump-suit cards occupy 0..=12 by rank index; the four levels above
/// that are fixed: off-suit trump rank, trump rank in the trump suit, Small
/// Joker, Big Joker. Only meaningful when `trump.is_trump(card)` holds.
pub fn trump_level(card: Card, trump: &TrumpInfo) -> u8 {
    match card {
        Card::Joker {
            kind: JokerKind::Big,
            ..
        } => 16,
        Card::Joker {
            kind: JokerKind::Small,
            ..
        } => 15,
        Card::Suited { suit, rank, .. } if rank == trump.rank => {
            if Some(suit) == trump.suit {
                14
            } else {
                13
            }
        }
        Card::Suited { rank, .. } => rank.index(),
    }
}

/// The total preorder on cards for a fixed trump definition.
///
/// `Equal` means equivalent strength: two off-suit trump-rank cards, or two
/// non-trump cards of different suits (first-played-wins and leading-suit
/// logic live one layer up, in trick resolution).
pub fn compare_cards(a: Card, b: Card, trump: &TrumpInfo) -> Ordering {
    let a_trump = trump.is_trump(a);
    let b_trump = trump.is_trump(b);
    match (a_trump, b_trump) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => trump_level(a, trump).cmp(&trump_level(b, trump)),
        (false, false) => {
            // Both are suited non-trump cards here.
            match (a.suit(), b.suit()) {
                (Some(sa), Some(sb)) if sa == sb => {
                    let ra = a.rank().map(Rank::index).unwrap_or_default();
                    let rb = b.rank().map(Rank::index).unwrap_or_default();
                    ra.cmp(&rb)
                }
                _ => Ordering::Equal,
            }
        }
    }
}
