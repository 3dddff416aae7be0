//! Trick structure, play decomposition, and winner resolution.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, CardFace};
use crate::domain::combos::{group_by_face, ladder_position};
use crate::domain::state::PlayerId;
use crate::domain::trump::{compare_cards, EffectiveSuit, TrumpInfo};

/// One player's cards within a trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickPlay {
    pub player: PlayerId,
    pub cards: Vec<Card>,
}

/// An in-progress or completed trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub leader: PlayerId,
    pub plays: Vec<TrickPlay>,
    /// Set when the fourth play resolves; awarded at trick clear.
    pub winner: Option<PlayerId>,
}

impl Trick {
    pub fn new(leader: PlayerId) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(4),
            winner: None,
        }
    }

    pub fn leading_cards(&self) -> Option<&[Card]> {
        self.plays.first().map(|p| p.cards.as_slice())
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    pub fn points(&self) -> u32 {
        self.plays
            .iter()
            .flat_map(|p| p.cards.iter())
            .map(|c| c.points())
            .sum()
    }

    pub fn cards_played(&self) -> usize {
        self.plays.iter().map(|p| p.cards.len()).sum()
    }

    /// Index into `plays` of the currently strongest play, or `None` for an
    /// empty trick. Ties keep the earlier play.
    pub fn winning_index(&self, trump: &TrumpInfo) -> Option<usize> {
        let lead = self.plays.first()?;
        let lead_units = decompose_units(&lead.cards, trump);
        let lead_group = trump.effective_suit(*lead.cards.first()?);

        let mut best = 0;
        for (i, play) in self.plays.iter().enumerate().skip(1) {
            if play_beats(
                &self.plays[best].cards,
                &play.cards,
                &lead_units,
                lead_group,
                trump,
            ) {
                best = i;
            }
        }
        Some(best)
    }

    pub fn winning_player(&self, trump: &TrumpInfo) -> Option<PlayerId> {
        self.winning_index(trump).map(|i| self.plays[i].player)
    }
}

/// A structural unit of a play: the shape legality and winner rules work on
/// these rather than raw card lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayUnit {
    Single(Card),
    Pair([Card; 2]),
    Tractor(Vec<Card>),
}

impl PlayUnit {
    pub fn size(&self) -> usize {
        match self {
            PlayUnit::Single(_) => 1,
            PlayUnit::Pair(_) => 2,
            PlayUnit::Tractor(cards) => cards.len(),
        }
    }

    pub fn pair_count(&self) -> usize {
        match self {
            PlayUnit::Single(_) => 0,
            PlayUnit::Pair(_) => 1,
            PlayUnit::Tractor(cards) => cards.len() / 2,
        }
    }

    pub fn top_card(&self, trump: &TrumpInfo) -> Card {
        match self {
            PlayUnit::Single(card) => *card,
            PlayUnit::Pair(cards) => cards[0],
            PlayUnit::Tractor(cards) => cards
                .iter()
                .copied()
                .max_by(|a, b| compare_cards(*a, *b, trump))
                .unwrap_or(cards[0]),
        }
    }
}

/// Canonical decomposition of a card set: maximal tractors first, then
/// pairs, then singles.
pub fn decompose_units(cards: &[Card], trump: &TrumpInfo) -> Vec<PlayUnit> {
    let by_face = group_by_face(cards);
    let mut used: Vec<CardFace> = Vec::new();
    let mut units: Vec<PlayUnit> = Vec::new();

    // Maximal runs of paired faces along the ladder become tractors.
    let mut paired: Vec<(u8, CardFace)> = by_face
        .iter()
        .filter(|(_, cards)| cards.len() >= 2)
        .filter_map(|(&face, _)| ladder_position(face, trump).map(|pos| (pos, face)))
        .collect();
    paired.sort();

    let mut run: Vec<CardFace> = Vec::new();
    let mut last_pos: Option<u8> = None;
    let mut flush = |run: &mut Vec<CardFace>, units: &mut Vec<PlayUnit>, used: &mut Vec<CardFace>| {
        if run.len() >= 2 {
            let mut tractor_cards = Vec::with_capacity(run.len() * 2);
            for face in run.iter() {
                let pair = &by_face[face];
                tractor_cards.push(pair[0]);
                tractor_cards.push(pair[1]);
                used.push(*face);
            }
            units.push(PlayUnit::Tractor(tractor_cards));
        }
        run.clear();
    };
    for (pos, face) in paired.iter().copied() {
        // Runs only link within one effective suit; ladder positions of
        // different groups never mix because a play is single-group.
        if last_pos.map(|p| p + 1) != Some(pos) {
            flush(&mut run, &mut units, &mut used);
        }
        run.push(face);
        last_pos = Some(pos);
    }
    flush(&mut run, &mut units, &mut used);

    // Remaining pairs, then singles.
    for (&face, face_cards) in &by_face {
        if used.contains(&face) {
            continue;
        }
        let mut rest = face_cards.as_slice();
        if rest.len() >= 2 {
            units.push(PlayUnit::Pair([rest[0], rest[1]]));
            rest = &rest[2..];
        }
        for &card in rest {
            units.push(PlayUnit::Single(card));
        }
    }

    units.sort_by(|a, b| b.size().cmp(&a.size()));
    units
}

/// Can `challenger` take the trick from `best` given the leader's shape?
///
/// A challenger wins only with a single-group play that is either in the
/// leading group or entirely trump, matches every unit shape of the lead,
/// and whose largest unit strictly beats the best play's largest unit.
fn play_beats(
    best: &[Card],
    challenger: &[Card],
    lead_units: &[PlayUnit],
    lead_group: EffectiveSuit,
    trump: &TrumpInfo,
) -> bool {
    let Some(chal_group) = uniform_group(challenger, trump) else {
        return false;
    };
    if chal_group != lead_group && chal_group != EffectiveSuit::Trump {
        return false;
    }
    if !matches_shape(lead_units, challenger, trump) {
        return false;
    }

    // The current best always matches the shape (it is the lead or a prior
    // winner), so compare dominant cards, trump group trumping the rest.
    let best_group = uniform_group(best, trump).unwrap_or(lead_group);
    if chal_group == EffectiveSuit::Trump && best_group != EffectiveSuit::Trump {
        return true;
    }
    if chal_group != EffectiveSuit::Trump && best_group == EffectiveSuit::Trump {
        return false;
    }

    let best_dominant = dominant_card(best, trump);
    let chal_dominant = dominant_card(challenger, trump);
    compare_cards(chal_dominant, best_dominant, trump) == std::cmp::Ordering::Greater
}

/// Would `challenger` take the trick from `best` under the leader's shape?
/// Public entry for the AI layer; `best` is the currently winning cards.
pub fn play_would_beat(
    challenger: &[Card],
    best: &[Card],
    leading: &[Card],
    trump: &TrumpInfo,
) -> bool {
    let Some(&first) = leading.first() else {
        return false;
    };
    let lead_units = decompose_units(leading, trump);
    let lead_group = trump.effective_suit(first);
    play_beats(best, challenger, &lead_units, lead_group, trump)
}

/// The single effective suit of a card set, or `None` when mixed.
pub fn uniform_group(cards: &[Card], trump: &TrumpInfo) -> Option<EffectiveSuit> {
    let first = trump.effective_suit(*cards.first()?);
    cards
        .iter()
        .all(|&c| trump.effective_suit(c) == first)
        .then_some(first)
}

/// Does `cards` satisfy every unit shape of the lead (pair for pair,
/// same-length tractor for tractor)?
pub fn matches_shape(lead_units: &[PlayUnit], cards: &[Card], trump: &TrumpInfo) -> bool {
    if lead_units.iter().map(PlayUnit::size).sum::<usize>() != cards.len() {
        return false;
    }
    let mut remaining = group_by_face(cards);

    let mut units: Vec<&PlayUnit> = lead_units.iter().collect();
    units.sort_by(|a, b| b.size().cmp(&a.size()));

    for unit in units {
        match unit {
            PlayUnit::Tractor(lead_cards) => {
                let pairs_needed = lead_cards.len() / 2;
                if !take_tractor(&mut remaining, pairs_needed, trump) {
                    return false;
                }
            }
            PlayUnit::Pair(_) => {
                let face = remaining
                    .iter()
                    .find(|(_, v)| v.len() >= 2)
                    .map(|(&f, _)| f);
                match face {
                    Some(f) => {
                        let v = remaining.get_mut(&f).map(|v| {
                            v.pop();
                            v.pop();
                            v.len()
                        });
                        if v == Some(0) {
                            remaining.remove(&f);
                        }
                    }
                    None => return false,
                }
            }
            PlayUnit::Single(_) => {
                let face = remaining.keys().next().copied();
                match face {
                    Some(f) => {
                        let left = remaining.get_mut(&f).map(|v| {
                            v.pop();
                            v.len()
                        });
                        if left == Some(0) {
                            remaining.remove(&f);
                        }
                    }
                    None => return false,
                }
            }
        }
    }
    true
}

fn take_tractor(
    remaining: &mut std::collections::BTreeMap<CardFace, Vec<Card>>,
    pairs_needed: usize,
    trump: &TrumpInfo,
) -> bool {
    let mut paired: Vec<(u8, CardFace)> = remaining
        .iter()
        .filter(|(_, v)| v.len() >= 2)
        .filter_map(|(&f, _)| ladder_position(f, trump).map(|p| (p, f)))
        .collect();
    paired.sort();

    let mut run: Vec<CardFace> = Vec::new();
    let mut last: Option<u8> = None;
    for (pos, face) in paired {
        if last.map(|p| p + 1) != Some(pos) {
            run.clear();
        }
        run.push(face);
        last = Some(pos);
        if run.len() == pairs_needed {
            for f in &run {
                let left = remaining.get_mut(f).map(|v| {
                    v.pop();
                    v.pop();
                    v.len()
                });
                if left == Some(0) {
                    remaining.remove(f);
                }
            }
            return true;
        }
    }
    false
}

/// The card that represents a play's strength: the top card of its largest
/// unit (tractors compare by their highest pair).
pub fn dominant_card(cards: &[Card], trump: &TrumpInfo) -> Card {
    let units = decompose_units(cards, trump);
    units
        .iter()
        .max_by(|a, b| {
            a.size().cmp(&b.size()).then_with(|| {
                compare_cards(a.top_card(trump), b.top_card(trump), trump)
            })
        })
        .map(|u| u.top_card(trump))
        .unwrap_or(cards[0])
}
