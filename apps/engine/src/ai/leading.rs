//! Leading strategy: what to put down when this seat opens a trick.

use crate::domain::cards_types::Card;
use crate::domain::combos::{identify_combos, Combo, ComboType};
use crate::domain::player_view::SeatView;
use crate::domain::tricks::{dominant_card, uniform_group};
use crate::domain::trump::EffectiveSuit;
use crate::domain::values::{combo_value, ValueMode};

use super::memory::CardMemory;

/// Choose a lead. Preference order: memory-backed guaranteed winners,
/// then long non-trump tractors, then high non-trump pairs, then a cheap
/// probe single. Trump only comes out when nothing else is left.
pub fn choose_lead(view: &SeatView<'_>, memory: &CardMemory) -> Vec<Card> {
    let trump = view.trump;
    let combos = identify_combos(view.hand, trump);

    let is_trump_combo =
        |c: &Combo| uniform_group(&c.cards, trump) == Some(EffectiveSuit::Trump);
    let strategic = |c: &Combo| combo_value(&c.cards, trump, ValueMode::Strategic);

    // Guaranteed winners first, non-trump before trump so the trump group
    // stays intact for ruffs. Bigger combos cash more at once.
    let mut winners: Vec<&Combo> = combos
        .iter()
        .filter(|c| {
            memory.is_guaranteed_winner(dominant_card(&c.cards, trump), trump, view.hand)
        })
        .collect();
    winners.sort_by_key(|c| {
        (
            is_trump_combo(c),
            std::cmp::Reverse(c.len()),
            std::cmp::Reverse(strategic(c)),
        )
    });
    if let Some(combo) = winners.first() {
        if !is_trump_combo(combo) || all_trump(view) {
            return combo.cards.clone();
        }
    }

    // A long non-trump tractor pressures every follower's pair holdings.
    if let Some(tractor) = combos
        .iter()
        .filter(|c| c.combo_type == ComboType::Tractor && !is_trump_combo(c))
        .max_by_key(|c| (c.len(), strategic(c)))
    {
        return tractor.cards.clone();
    }

    // High non-trump pair.
    if let Some(pair) = combos
        .iter()
        .filter(|c| c.combo_type == ComboType::Pair && !is_trump_combo(c))
        .max_by_key(|c| strategic(c))
    {
        if combo_value(&pair.cards, trump, ValueMode::Basic) >= 24 {
            return pair.cards.clone();
        }
    }

    // Probe: the cheapest non-trump single that is neither a point card
    // nor half of a pair.
    let paired_faces: Vec<_> = combos
        .iter()
        .filter(|c| c.combo_type == ComboType::Pair)
        .map(|c| c.cards[0].face())
        .collect();
    let probe = view
        .hand
        .iter()
        .copied()
        .filter(|&c| !trump.is_trump(c))
        .min_by_key(|&c| {
            (
                c.is_point_card(),
                paired_faces.contains(&c.face()),
                combo_value(&[c], trump, ValueMode::Strategic),
            )
        });
    if let Some(card) = probe {
        return vec![card];
    }

    // Nothing but trump left: lead the cheapest trump single.
    view.hand
        .iter()
        .copied()
        .min_by_key(|&c| combo_value(&[c], trump, ValueMode::Strategic))
        .map(|c| vec![c])
        .unwrap_or_default()
}

fn all_trump(view: &SeatView<'_>) -> bool {
    view.hand.iter().all(|&c| view.trump.is_trump(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_parsing::parse_hand;
    use crate::domain::cards_types::{Rank, Suit};
    use crate::domain::player_view::SeatView;
    use crate::domain::state::{GamePhase, GameState};
    use crate::domain::trump::TrumpInfo;

    fn view_with_hand(state: &GameState) -> SeatView<'_> {
        SeatView::new(state, 0)
    }

    fn state_with_hand(tokens: &str) -> GameState {
        let mut state = crate::domain::engine::initialize_game([9u8; 32], Rank::Two);
        state.trump = TrumpInfo::new(Rank::Two, Some(Suit::Spades));
        state.phase = GamePhase::Playing;
        state.players[0].hand = parse_hand(tokens).unwrap();
        state
    }

    #[test]
    fn leads_a_guaranteed_ace() {
        let state = state_with_hand("AH 9H 3C 4D");
        let view = view_with_hand(&state);
        let memory = CardMemory::default();
        let lead = choose_lead(&view, &memory);
        assert_eq!(lead, parse_hand("AH").unwrap());
    }

    #[test]
    fn prefers_a_tractor_over_a_probe() {
        let state = state_with_hand("7H 7H1 8H 8H1 3C 4D");
        let view = view_with_hand(&state);
        let memory = CardMemory::default();
        let lead = choose_lead(&view, &memory);
        assert_eq!(lead.len(), 4);
    }

    #[test]
    fn probe_avoids_points_and_pairs() {
        let state = state_with_hand("TC 5D 3H 3H1 4C KD");
        let view = view_with_hand(&state);
        let memory = CardMemory::default();
        let lead = choose_lead(&view, &memory);
        // 4C: not a point card, not half a pair, cheap.
        assert_eq!(lead, parse_hand("4C").unwrap());
    }

    #[test]
    fn all_trump_hand_leads_cheapest_trump() {
        let state = state_with_hand("3S 9S 2H SJ");
        let view = view_with_hand(&state);
        let memory = CardMemory::default();
        let lead = choose_lead(&view, &memory);
        assert_eq!(lead, parse_hand("3S").unwrap());
    }
}
