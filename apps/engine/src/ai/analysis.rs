//! Suit-availability analysis: the router for every following decision.

use crate::domain::cards_types::Card;
use crate::domain::combos::{identify_combos, Combo};
use crate::domain::tricks::{decompose_units, matches_shape, uniform_group};
use crate::domain::trump::{EffectiveSuit, TrumpInfo};

/// Exactly one of these holds for a follower's hand against a lead.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FollowScenario {
    /// At least one combo of the exact shape and group exists.
    ValidCombos,
    /// Enough cards in the leading group, but no matching shape.
    EnoughRemaining,
    /// Some leading-group cards, fewer than the required length.
    Insufficient,
    /// No cards in the leading group at all.
    Void,
}

#[derive(Debug, Clone)]
pub struct SuitAvailability {
    pub scenario: FollowScenario,
    pub group: EffectiveSuit,
    pub required_len: usize,
    /// All hand cards in the leading group.
    pub group_cards: Vec<Card>,
    /// Combos matching the lead's shape and group; empty unless the
    /// scenario is `ValidCombos`.
    pub valid_combos: Vec<Combo>,
}

pub fn analyze_suit_availability(
    leading: &[Card],
    hand: &[Card],
    trump: &TrumpInfo,
) -> SuitAvailability {
    let required_len = leading.len();
    let group = leading
        .first()
        .map(|&c| trump.effective_suit(c))
        .unwrap_or(EffectiveSuit::Trump);
    let lead_units = decompose_units(leading, trump);

    let group_cards: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|&c| trump.effective_suit(c) == group)
        .collect();

    let valid_combos: Vec<Combo> = identify_combos(hand, trump)
        .into_iter()
        .filter(|combo| {
            combo.len() == required_len
                && uniform_group(&combo.cards, trump) == Some(group)
                && matches_shape(&lead_units, &combo.cards, trump)
        })
        .collect();

    let scenario = if !valid_combos.is_empty() {
        FollowScenario::ValidCombos
    } else if group_cards.len() >= required_len {
        FollowScenario::EnoughRemaining
    } else if !group_cards.is_empty() {
        FollowScenario::Insufficient
    } else {
        FollowScenario::Void
    };

    SuitAvailability {
        scenario,
        group,
        required_len,
        group_cards,
        valid_combos,
    }
}
