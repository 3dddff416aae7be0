//! Play legality: leading rules and the follow-suit obligations.
//!
//! Follow checks run in a fixed order: length, then the exhaust-suit rule,
//! then the combo-shape obligations. A shape miss only fails when the player
//! provably could have matched the shape from their leading-group cards.

use crate::domain::cards_types::Card;
use crate::domain::combos::{contains_tractor, group_by_face, pair_count_in};
use crate::domain::tricks::{decompose_units, uniform_group, PlayUnit};
use crate::domain::trump::{EffectiveSuit, TrumpInfo};
use crate::errors::PlayViolation;

/// Validate a lead. Any single combo is a valid lead, and so is a
/// multi-part lead, as long as every card stays inside one trump group.
pub fn validate_lead(cards: &[Card], trump: &TrumpInfo) -> Result<(), PlayViolation> {
    if cards.is_empty() {
        return Err(PlayViolation::Empty);
    }
    match uniform_group(cards, trump) {
        Some(_) => Ok(()),
        None => Err(PlayViolation::MixedLead),
    }
}

/// Validate a follow against the leader's cards.
pub fn validate_follow(
    played: &[Card],
    leading: &[Card],
    hand: &[Card],
    trump: &TrumpInfo,
) -> Result<(), PlayViolation> {
    if played.is_empty() {
        return Err(PlayViolation::Empty);
    }
    if played.len() != leading.len() {
        return Err(PlayViolation::WrongLength {
            expected: leading.len(),
            actual: played.len(),
        });
    }

    let group = match leading.first().map(|&c| trump.effective_suit(c)) {
        Some(g) => g,
        None => return Err(PlayViolation::Empty),
    };
    let hand_in_group: Vec<Card> = in_group(hand, group, trump);
    let played_in_group = in_group(played, group, trump).len();

    if hand_in_group.len() >= leading.len() {
        if played_in_group != played.len() {
            return Err(PlayViolation::MustFollowSuit);
        }
        check_shape_obligations(played, leading, &hand_in_group, trump)
    } else {
        // Short in the leading group: every held group card must be played,
        // the rest may come from anywhere.
        let all_included = hand_in_group.iter().all(|c| played.contains(c));
        if !all_included {
            return Err(PlayViolation::MustExhaustLeadingSuit);
        }
        Ok(())
    }
}

/// Full legality check for a single play, including hand membership.
pub fn is_valid_play(
    played: &[Card],
    leading: Option<&[Card]>,
    hand: &[Card],
    trump: &TrumpInfo,
) -> bool {
    if !all_in_hand(played, hand) {
        return false;
    }
    match leading {
        None => validate_lead(played, trump).is_ok(),
        Some(lead) => validate_follow(played, lead, hand, trump).is_ok(),
    }
}

/// Every played card must be a distinct card of the hand.
pub fn all_in_hand(played: &[Card], hand: &[Card]) -> bool {
    let mut pool = hand.to_vec();
    played.iter().all(|card| {
        match pool.iter().position(|c| c == card) {
            Some(i) => {
                pool.swap_remove(i);
                true
            }
            None => false,
        }
    })
}

fn check_shape_obligations(
    played: &[Card],
    leading: &[Card],
    hand_in_group: &[Card],
    trump: &TrumpInfo,
) -> Result<(), PlayViolation> {
    let lead_units = decompose_units(leading, trump);
    let required_pairs: usize = lead_units.iter().map(PlayUnit::pair_count).sum();
    if required_pairs == 0 {
        return Ok(());
    }

    let available_pairs = pair_count_in(hand_in_group);
    let played_pairs = pair_count_in(played);
    let obligated = required_pairs.min(available_pairs);
    if played_pairs < obligated {
        return Err(PlayViolation::PairRequired);
    }

    // A lone tractor lead binds harder: a held tractor of the same span
    // must be used, not split into stray pairs.
    if let [PlayUnit::Tractor(cards)] = lead_units.as_slice() {
        let span = cards.len() / 2;
        if contains_tractor(hand_in_group, span, trump) && !contains_tractor(played, span, trump) {
            return Err(PlayViolation::TractorPairsRequired);
        }
    }
    Ok(())
}

fn in_group(cards: &[Card], group: EffectiveSuit, trump: &TrumpInfo) -> Vec<Card> {
    cards
        .iter()
        .copied()
        .filter(|&c| trump.effective_suit(c) == group)
        .collect()
}

/// Build a legal follow deterministically, preferring cards with the lowest
/// `key`. Used by the engine's AI fallback and by the random baseline (with
/// a shuffled key). The result always passes [`validate_follow`].
pub fn legal_follow_with_order<F>(
    leading: &[Card],
    hand: &[Card],
    trump: &TrumpInfo,
    key: F,
) -> Vec<Card>
where
    F: Fn(Card) -> i64,
{
    let len = leading.len();
    let group = match leading.first().map(|&c| trump.effective_suit(c)) {
        Some(g) => g,
        None => return Vec::new(),
    };

    let mut ordered: Vec<Card> = hand.to_vec();
    ordered.sort_by_key(|&c| key(c));
    let group_cards: Vec<Card> = in_group(&ordered, group, trump);

    if group_cards.len() <= len {
        // Everything in the group, topped up from the cheapest rest.
        let mut play = group_cards.clone();
        for &card in ordered.iter() {
            if play.len() == len {
                break;
            }
            if trump.effective_suit(card) != group {
                play.push(card);
            }
        }
        return play;
    }

    let lead_units = decompose_units(leading, trump);

    // A lone tractor lead with a matching tractor in the group: play the
    // cheapest such tractor outright.
    if let [PlayUnit::Tractor(lead_cards)] = lead_units.as_slice() {
        let span = lead_cards.len() / 2;
        let mut tractors: Vec<Vec<Card>> =
            crate::domain::combos::identify_combos(&group_cards, trump)
                .into_iter()
                .filter(|c| {
                    c.combo_type == crate::domain::combos::ComboType::Tractor
                        && c.pair_count() == span
                })
                .map(|c| c.cards)
                .collect();
        if !tractors.is_empty() {
            tractors.sort_by_key(|cards| cards.iter().map(|&c| key(c)).sum::<i64>());
            return tractors.swap_remove(0);
        }
    }

    // Pair obligations first, cheapest pairs preferred.
    let required_pairs: usize = lead_units.iter().map(PlayUnit::pair_count).sum();
    let mut play: Vec<Card> = Vec::with_capacity(len);

    if required_pairs > 0 {
        let by_face = group_by_face(&group_cards);
        let mut pairs: Vec<(i64, [Card; 2])> = by_face
            .values()
            .filter(|v| v.len() >= 2)
            .map(|v| (key(v[0]) + key(v[1]), [v[0], v[1]]))
            .collect();
        pairs.sort_by_key(|(cost, _)| *cost);
        for (_, pair) in pairs.into_iter().take(required_pairs) {
            if play.len() + 2 > len {
                break;
            }
            play.extend_from_slice(&pair);
        }
    }

    for &card in &group_cards {
        if play.len() == len {
            break;
        }
        if !play.contains(&card) {
            play.push(card);
        }
    }
    play
}
