//! Property tests for the ordering, combo, follow, and scoring invariants.

use proptest::prelude::*;
use std::cmp::Ordering;

use crate::domain::cards_types::{Card, JokerKind};
use crate::domain::combos::{identify_combos, ComboType};
use crate::domain::engine::end_round;
use crate::domain::fixtures::scored_state;
use crate::domain::plays::{legal_follow_with_order, validate_follow};
use crate::domain::test_gens::{arb_card, arb_cards, arb_trump};
use crate::domain::trump::compare_cards;
use crate::domain::values::{strategic_value, ValueMode};

proptest! {
    /// compare_cards is antisymmetric: swapping the arguments reverses the
    /// ordering.
    #[test]
    fn prop_compare_is_antisymmetric(
        a in arb_card(),
        b in arb_card(),
        trump in arb_trump(),
    ) {
        prop_assert_eq!(
            compare_cards(a, b, &trump),
            compare_cards(b, a, &trump).reverse()
        );
    }

    /// Strict dominance chains are transitive.
    #[test]
    fn prop_strict_dominance_is_transitive(
        a in arb_card(),
        b in arb_card(),
        c in arb_card(),
        trump in arb_trump(),
    ) {
        if compare_cards(a, b, &trump) == Ordering::Greater
            && compare_cards(b, c, &trump) == Ordering::Greater
        {
            prop_assert_eq!(compare_cards(a, c, &trump), Ordering::Greater);
        }
    }

    /// Jokers outrank every non-joker; Big outranks Small; the trump rank
    /// in the trump suit outranks its off-suit twins.
    #[test]
    fn prop_joker_dominance(card in arb_card(), trump in arb_trump()) {
        let big = Card::joker(JokerKind::Big, 0);
        let small = Card::joker(JokerKind::Small, 0);
        prop_assert_eq!(compare_cards(big, small, &trump), Ordering::Greater);
        if !matches!(card, Card::Joker { kind: JokerKind::Big, .. }) {
            prop_assert_eq!(compare_cards(big, card, &trump), Ordering::Greater);
        }
        if !matches!(card, Card::Joker { .. }) {
            prop_assert_eq!(compare_cards(small, card, &trump), Ordering::Greater);
        }
        if let (Some(suit), Some(rank)) = (trump.suit, card.rank()) {
            if rank == trump.rank && card.suit() != Some(suit) {
                let in_suit = Card::suited(suit, trump.rank, 0);
                prop_assert_eq!(compare_cards(in_suit, card, &trump), Ordering::Greater);
            }
        }
    }

    /// Two cards pair iff they share a face; never across suits or joker
    /// kinds.
    #[test]
    fn prop_pair_iff_same_face(
        cards in arb_cards(2),
        trump in arb_trump(),
    ) {
        prop_assume!(cards.len() == 2);
        let has_pair = identify_combos(&cards, &trump)
            .iter()
            .any(|c| c.combo_type == ComboType::Pair);
        prop_assert_eq!(has_pair, cards[0].face() == cards[1].face());
    }

    /// Constructed follows always satisfy the exhaust-suit rule: with
    /// enough leading-group cards the whole play stays in the group, and a
    /// short holding is committed entirely.
    #[test]
    fn prop_constructed_follows_respect_the_suit_rule(
        deal in arb_cards(16),
        trump in arb_trump(),
        lead_len in 1usize..=3,
    ) {
        prop_assume!(deal.len() == 16);
        let lead_group = trump.effective_suit(deal[0]);
        let lead: Vec<Card> = deal
            .iter()
            .copied()
            .filter(|&c| trump.effective_suit(c) == lead_group)
            .take(lead_len)
            .collect();
        let hand: Vec<Card> = deal
            .iter()
            .copied()
            .filter(|c| !lead.contains(c))
            .collect();
        prop_assume!(hand.len() >= lead.len());

        let play = legal_follow_with_order(&lead, &hand, &trump, |c| {
            strategic_value(c, &trump, ValueMode::Basic) as i64
        });
        prop_assert_eq!(play.len(), lead.len());
        prop_assert!(validate_follow(&play, &lead, &hand, &trump).is_ok());

        let in_group = |cards: &[Card]| {
            cards
                .iter()
                .filter(|&&c| trump.effective_suit(c) == lead_group)
                .count()
        };
        let held = in_group(&hand);
        if held >= lead.len() {
            prop_assert_eq!(in_group(&play), play.len());
        } else {
            for card in hand.iter().filter(|&&c| trump.effective_suit(c) == lead_group) {
                prop_assert!(play.contains(card), "short holding must be committed");
            }
        }
    }

    /// Rank advancement never moves a team backwards and never advances
    /// both teams in one round.
    #[test]
    fn prop_rank_advancement_is_monotone(
        points in 0u32..400,
        winner in 0u8..4,
    ) {
        let state = scored_state(points, winner, "3D 4D", 0);
        let before = [state.teams[0].rank, state.teams[1].rank];
        let (next, _result) = end_round(&state).unwrap();
        let after = [next.teams[0].rank, next.teams[1].rank];
        prop_assert!(after[0] >= before[0]);
        prop_assert!(after[1] >= before[1]);
        prop_assert!(
            usize::from(after[0] > before[0]) + usize::from(after[1] > before[1]) <= 1
        );
    }
}
