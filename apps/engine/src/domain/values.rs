//! Strategic card valuation used by the AI layer.
//!
//! Three modes cover the three questions the AI keeps asking:
//! - `Basic`: raw play strength, monotone with the trump ordering.
//! - `Strategic`: play strength plus a conservation premium, so the value of
//!   spending a card reflects how irreplaceable it is. Jokers and the trump
//!   rank in the trump suit sit above 170, trump-suit A/K above 110, the
//!   middle trump honors inside the 100..150 band, non-trump aces above 10.
//! - `Contribute`: point cards first, cheaper card preferred among equals;
//!   used when feeding points to a winning partner.

use crate::domain::cards_types::{Card, JokerKind, Rank};
use crate::domain::trump::TrumpInfo;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValueMode {
    Basic,
    Strategic,
    Contribute,
}

/// Value of a single card under the given mode.
pub fn strategic_value(card: Card, trump: &TrumpInfo, mode: ValueMode) -> i32 {
    match mode {
        ValueMode::Basic => basic_value(card, trump),
        ValueMode::Strategic => conservation_value(card, trump),
        ValueMode::Contribute => contribute_value(card, trump),
    }
}

/// Summed value of a card set.
pub fn combo_value(cards: &[Card], trump: &TrumpInfo, mode: ValueMode) -> i32 {
    cards
        .iter()
        .map(|&c| strategic_value(c, trump, mode))
        .sum()
}

fn basic_value(card: Card, trump: &TrumpInfo) -> i32 {
    if trump.is_trump(card) {
        match card {
            Card::Joker {
                kind: JokerKind::Big,
                ..
            } => 50,
            Card::Joker {
                kind: JokerKind::Small,
                ..
            } => 48,
            Card::Suited { suit, rank, .. } if rank == trump.rank => {
                if Some(suit) == trump.suit {
                    46
                } else {
                    44
                }
            }
            Card::Suited { rank, .. } => 20 + rank.index() as i32,
        }
    } else {
        match card.rank() {
            Some(rank) => 2 + rank.index() as i32,
            None => 0,
        }
    }
}

fn conservation_value(card: Card, trump: &TrumpInfo) -> i32 {
    if trump.is_trump(card) {
        match card {
            Card::Joker {
                kind: JokerKind::Big,
                ..
            } => 180,
            Card::Joker {
                kind: JokerKind::Small,
                ..
            } => 175,
            Card::Suited { suit, rank, .. } if rank == trump.rank => {
                if Some(suit) == trump.suit {
                    172
                } else {
                    165
                }
            }
            Card::Suited { rank, .. } => match rank {
                Rank::Ace => 115,
                Rank::King => 112,
                Rank::Queen => 108,
                Rank::Jack => 104,
                _ => 60 + 3 * rank.index() as i32,
            },
        }
    } else {
        match card.rank() {
            Some(Rank::Ace) => 16,
            Some(Rank::King) => 13,
            Some(rank) => 2 + rank.index() as i32,
            None => 0,
        }
    }
}

fn contribute_value(card: Card, trump: &TrumpInfo) -> i32 {
    // Point cards dominate; among equal points, prefer spending the card
    // that is cheaper to lose.
    card.points() as i32 * 20 + (40 - basic_value(card, trump).min(40))
}
