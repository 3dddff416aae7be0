//! Declaration strategy during the deal.

use crate::domain::declarations::{DeclarationType, TrumpDeclaration};
use crate::domain::player_view::SeatView;
use crate::domain::trump::TrumpInfo;

/// Declare when the hand so far backs the would-be trump suit; otherwise
/// hold and hope for better cards. Joker pairs are kept back until the
/// hand is deep enough to commit to a no-trump round.
pub fn choose_declaration(
    view: &SeatView<'_>,
    options: &[TrumpDeclaration],
) -> Option<TrumpDeclaration> {
    let mut best: Option<(usize, &TrumpDeclaration)> = None;
    for option in options {
        let would_be = TrumpInfo::new(view.trump.rank, option.suit);
        let trump_count = view
            .hand
            .iter()
            .filter(|&&c| would_be.is_trump(c))
            .count();

        let threshold = match option.decl_type {
            DeclarationType::SingleTrumpRank => 5,
            DeclarationType::PairTrumpRank => 4,
            // A joker-pair declaration forces a no-trump round; only worth
            // it when the hand is already deep in jokers and rank cards.
            DeclarationType::SmallJokerPair | DeclarationType::BigJokerPair => 6,
        };
        if trump_count < threshold {
            continue;
        }
        let score = trump_count + option.decl_type.strength() as usize * 2;
        if best.map_or(true, |(s, _)| score > s) {
            best = Some((score, option));
        }
    }
    best.map(|(_, decl)| decl.clone())
}
