//! Combo identification: singles, pairs, and tractors within trump groups.
//!
//! A tractor is two or more consecutive pairs in one trump group. Adjacency
//! skips the trump rank inside every suit, and the trump group carries the
//! extended ladder: suit 2..A (minus the trump rank), then the trump rank in
//! the trump suit, then Small Joker, then Big Joker. Off-suit trump-rank
//! pairs never extend a tractor.

use std::collections::BTreeMap;

use crate::domain::cards_types::{Card, CardFace, JokerKind};
use crate::domain::trump::{EffectiveSuit, TrumpInfo};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ComboType {
    Single,
    Pair,
    Tractor,
}

/// A playable group of cards: one single, one pair, or one tractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo {
    pub combo_type: ComboType,
    pub cards: Vec<Card>,
}

impl Combo {
    pub fn single(card: Card) -> Self {
        Self {
            combo_type: ComboType::Single,
            cards: vec![card],
        }
    }

    pub fn pair(a: Card, b: Card) -> Self {
        Self {
            combo_type: ComboType::Pair,
            cards: vec![a, b],
        }
    }

    pub fn tractor(cards: Vec<Card>) -> Self {
        Self {
            combo_type: ComboType::Tractor,
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs this combo is built from (0 for a single).
    pub fn pair_count(&self) -> usize {
        match self.combo_type {
            ComboType::Single => 0,
            ComboType::Pair => 1,
            ComboType::Tractor => self.cards.len() / 2,
        }
    }
}

/// Position of a face on its group's tractor ladder, or `None` when the face
/// never links into a tractor (off-suit trump-rank cards).
pub fn ladder_position(face: CardFace, trump: &TrumpInfo) -> Option<u8> {
    match face {
        CardFace::Joker(JokerKind::Small) => Some(13),
        CardFace::Joker(JokerKind::Big) => Some(14),
        CardFace::Suited { suit, rank } => {
            if rank == trump.rank {
                if Some(suit) == trump.suit {
                    Some(12)
                } else {
                    None
                }
            } else {
                // Rank ladder with the trump rank removed: neighbors across
                // the gap are consecutive.
                let idx = rank.index();
                let skip = u8::from(idx > trump.rank.index());
                Some(idx - skip)
            }
        }
    }
}

/// Enumerate every single, pair, and tractor in `hand` under `trump`.
pub fn identify_combos(hand: &[Card], trump: &TrumpInfo) -> Vec<Combo> {
    let mut combos: Vec<Combo> = hand.iter().map(|&c| Combo::single(c)).collect();

    let by_face = group_by_face(hand);

    for cards in by_face.values() {
        if cards.len() >= 2 {
            combos.push(Combo::pair(cards[0], cards[1]));
        }
    }

    // Paired faces per trump group, keyed by ladder position.
    let mut paired: BTreeMap<EffectiveSuit, Vec<(u8, CardFace)>> = BTreeMap::new();
    for (&face, cards) in &by_face {
        if cards.len() < 2 {
            continue;
        }
        if let Some(pos) = ladder_position(face, trump) {
            let group = trump.effective_suit(face.card(0));
            paired.entry(group).or_default().push((pos, face));
        }
    }

    for entries in paired.values_mut() {
        entries.sort();
        for run in consecutive_runs(entries) {
            for window_len in 2..=run.len() {
                for window in run.windows(window_len) {
                    let mut cards = Vec::with_capacity(window_len * 2);
                    for &(_, face) in window {
                        let pair = &by_face[&face];
                        cards.push(pair[0]);
                        cards.push(pair[1]);
                    }
                    combos.push(Combo::tractor(cards));
                }
            }
        }
    }

    combos
}

/// Count the pairs formable from `cards` (each face contributes at most one).
pub fn pair_count_in(cards: &[Card]) -> usize {
    group_by_face(cards)
        .values()
        .filter(|v| v.len() >= 2)
        .count()
}

/// Does `cards` contain a tractor of at least `pairs` consecutive pairs in
/// one trump group?
pub fn contains_tractor(cards: &[Card], pairs: usize, trump: &TrumpInfo) -> bool {
    identify_combos(cards, trump)
        .iter()
        .any(|c| c.combo_type == ComboType::Tractor && c.pair_count() >= pairs)
}

pub(crate) fn group_by_face(cards: &[Card]) -> BTreeMap<CardFace, Vec<Card>> {
    let mut by_face: BTreeMap<CardFace, Vec<Card>> = BTreeMap::new();
    for &card in cards {
        by_face.entry(card.face()).or_default().push(card);
    }
    by_face
}

fn consecutive_runs(entries: &[(u8, CardFace)]) -> Vec<Vec<(u8, CardFace)>> {
    let mut runs: Vec<Vec<(u8, CardFace)>> = Vec::new();
    for &entry in entries {
        match runs.last_mut() {
            Some(run) if run.last().map(|&(p, _)| p + 1) == Some(entry.0) => run.push(entry),
            _ => runs.push(vec![entry]),
        }
    }
    runs
}
