//! Trump declarations made while cards are still being dealt.
//!
//! Declarations race: a later declaration must be of a strictly higher type
//! to displace another player's, while a player may replace their own with
//! any equal-or-higher type (the single-to-pair strengthen).

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, JokerKind, Rank, Suit};
use crate::domain::state::PlayerId;
use crate::errors::DeclarationViolation;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum DeclarationType {
    SingleTrumpRank,
    PairTrumpRank,
    SmallJokerPair,
    BigJokerPair,
}

impl DeclarationType {
    pub fn strength(self) -> u8 {
        match self {
            DeclarationType::SingleTrumpRank => 1,
            DeclarationType::PairTrumpRank => 2,
            DeclarationType::SmallJokerPair => 3,
            DeclarationType::BigJokerPair => 4,
        }
    }
}

/// A declaration: the type, the suit it fixes (`None` for joker pairs,
/// which force a no-trump round), and the cards shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrumpDeclaration {
    pub player: PlayerId,
    pub decl_type: DeclarationType,
    pub suit: Option<Suit>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrumpDeclarationState {
    pub current: Option<TrumpDeclaration>,
    pub history: Vec<TrumpDeclaration>,
}

impl TrumpDeclarationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Would `decl` displace (or strengthen) the standing declaration?
    pub fn accepts(&self, decl: &TrumpDeclaration) -> Result<(), DeclarationViolation> {
        match &self.current {
            None => Ok(()),
            Some(current) if current.player == decl.player => {
                if decl.decl_type.strength() >= current.decl_type.strength() {
                    Ok(())
                } else {
                    Err(DeclarationViolation::NotStronger)
                }
            }
            Some(current) => {
                if decl.decl_type.strength() > current.decl_type.strength() {
                    Ok(())
                } else {
                    Err(DeclarationViolation::NotStronger)
                }
            }
        }
    }

    pub fn record(&mut self, decl: TrumpDeclaration) {
        self.history.push(decl.clone());
        self.current = Some(decl);
    }
}

/// Check that the shown cards exist in `hand` and actually form the claimed
/// declaration under `trump_rank`.
pub fn validate_declaration(
    decl: &TrumpDeclaration,
    hand: &[Card],
    trump_rank: Rank,
) -> Result<(), DeclarationViolation> {
    if !crate::domain::plays::all_in_hand(&decl.cards, hand) {
        return Err(DeclarationViolation::CardsNotInHand);
    }

    match decl.decl_type {
        DeclarationType::SingleTrumpRank => match decl.cards.as_slice() {
            [Card::Suited { suit, rank, .. }] if *rank == trump_rank => {
                if decl.suit == Some(*suit) {
                    Ok(())
                } else {
                    Err(DeclarationViolation::SuitMismatch)
                }
            }
            _ => Err(DeclarationViolation::CardsMismatch),
        },
        DeclarationType::PairTrumpRank => match decl.cards.as_slice() {
            [Card::Suited {
                suit: s1, rank: r1, ..
            }, Card::Suited {
                suit: s2, rank: r2, ..
            }] if *r1 == trump_rank && *r2 == trump_rank && s1 == s2 => {
                if decl.suit == Some(*s1) {
                    Ok(())
                } else {
                    Err(DeclarationViolation::SuitMismatch)
                }
            }
            _ => Err(DeclarationViolation::CardsMismatch),
        },
        DeclarationType::SmallJokerPair => validate_joker_pair(decl, JokerKind::Small),
        DeclarationType::BigJokerPair => validate_joker_pair(decl, JokerKind::Big),
    }
}

fn validate_joker_pair(
    decl: &TrumpDeclaration,
    kind: JokerKind,
) -> Result<(), DeclarationViolation> {
    if decl.suit.is_some() {
        return Err(DeclarationViolation::SuitMismatch);
    }
    match decl.cards.as_slice() {
        [Card::Joker { kind: k1, .. }, Card::Joker { kind: k2, .. }]
            if *k1 == kind && *k2 == kind =>
        {
            Ok(())
        }
        _ => Err(DeclarationViolation::CardsMismatch),
    }
}

/// Every declaration `player` could legally make right now from `hand`.
pub fn declarable_options(
    hand: &[Card],
    trump_rank: Rank,
    state: &TrumpDeclarationState,
    player: PlayerId,
) -> Vec<TrumpDeclaration> {
    let mut options = Vec::new();

    let mut rank_cards_by_suit: [Vec<Card>; 4] = Default::default();
    let mut small_jokers = Vec::new();
    let mut big_jokers = Vec::new();
    for &card in hand {
        match card {
            Card::Suited { suit, rank, .. } if rank == trump_rank => {
                rank_cards_by_suit[suit as usize].push(card);
            }
            Card::Joker {
                kind: JokerKind::Small,
                ..
            } => small_jokers.push(card),
            Card::Joker {
                kind: JokerKind::Big,
                ..
            } => big_jokers.push(card),
            Card::Suited { .. } => {}
        }
    }

    for (suit, cards) in Suit::ALL.iter().zip(rank_cards_by_suit.iter()) {
        if !cards.is_empty() {
            options.push(TrumpDeclaration {
                player,
                decl_type: DeclarationType::SingleTrumpRank,
                suit: Some(*suit),
                cards: vec![cards[0]],
            });
        }
        if cards.len() >= 2 {
            options.push(TrumpDeclaration {
                player,
                decl_type: DeclarationType::PairTrumpRank,
                suit: Some(*suit),
                cards: vec![cards[0], cards[1]],
            });
        }
    }
    if small_jokers.len() >= 2 {
        options.push(TrumpDeclaration {
            player,
            decl_type: DeclarationType::SmallJokerPair,
            suit: None,
            cards: vec![small_jokers[0], small_jokers[1]],
        });
    }
    if big_jokers.len() >= 2 {
        options.push(TrumpDeclaration {
            player,
            decl_type: DeclarationType::BigJokerPair,
            suit: None,
            cards: vec![big_jokers[0], big_jokers[1]],
        });
    }

    options.retain(|decl| state.accepts(decl).is_ok());
    options
}
