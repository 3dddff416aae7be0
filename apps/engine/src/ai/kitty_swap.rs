//! Kitty selection: which eight cards the round starter buries.
//!
//! Hard preferences, relaxed in stages only when the hand runs out of
//! better material: never trump, never aces or kings, keep point cards,
//! keep pairs together, and clear short suits first so future voids open
//! ruffing chances.

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::combos::group_by_face;
use crate::domain::player_view::SeatView;
use crate::domain::state::KITTY_SIZE;
use crate::domain::values::{strategic_value, ValueMode};

pub fn select_kitty(view: &SeatView<'_>) -> Vec<Card> {
    let trump = view.trump;
    let by_face = group_by_face(view.hand);

    let mut suit_counts = [0usize; 4];
    for &card in view.hand {
        if !trump.is_trump(card) {
            if let Some(suit) = card.suit() {
                suit_counts[suit as usize] += 1;
            }
        }
    }

    let stage = |card: Card| -> u8 {
        if trump.is_trump(card) {
            return 5;
        }
        match card.rank() {
            Some(Rank::Ace) => 4,
            Some(Rank::King) => 3,
            Some(_) if card.is_point_card() => 2,
            _ => {
                let paired = by_face.get(&card.face()).map_or(0, Vec::len) >= 2;
                if paired {
                    1
                } else {
                    0
                }
            }
        }
    };

    let mut candidates: Vec<Card> = view.hand.to_vec();
    candidates.sort_by_key(|&card| {
        let suit_len = card
            .suit()
            .map(|s| suit_counts[s as usize])
            .unwrap_or(usize::MAX);
        (
            stage(card),
            suit_len,
            strategic_value(card, trump, ValueMode::Strategic),
        )
    });
    candidates.truncate(KITTY_SIZE);
    candidates
}
