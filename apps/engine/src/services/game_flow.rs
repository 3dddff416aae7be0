//! AI-driving operations: ask an AI for a move, validate it, and fall back
//! to a deterministic legal default when the AI misbehaves.
//!
//! The fallback keeps long unattended simulations alive: a buggy AI costs
//! its seat some skill, never the game loop.

use tracing::warn;

use crate::ai::{AiPlayer, CardMemory};
use crate::domain::cards_types::Card;
use crate::domain::declarations::{declarable_options, TrumpDeclaration};
use crate::domain::player_view::SeatView;
use crate::domain::plays::{all_in_hand, is_valid_play, legal_follow_with_order};
use crate::domain::state::{GameState, PlayerId, KITTY_SIZE};
use crate::domain::values::{strategic_value, ValueMode};
use crate::errors::DomainError;

/// A validated move for `seat`, ready for `process_play`.
pub fn get_ai_move(
    state: &GameState,
    seat: PlayerId,
    ai: &dyn AiPlayer,
) -> Result<Vec<Card>, DomainError> {
    let view = SeatView::new(state, seat);
    let memory = CardMemory::from_view(&view);
    let leading = view.leading_cards();

    match ai.choose_play(&view, &memory) {
        Ok(cards) if is_valid_play(&cards, leading, view.hand, view.trump) => return Ok(cards),
        Ok(cards) => {
            warn!(op = "get_ai_move", seat, play = ?cards, "AI chose an illegal play, falling back");
        }
        Err(e) => {
            warn!(op = "get_ai_move", seat, error = %e, "AI failed, falling back");
        }
    }
    fallback_play(state, seat)
}

/// The deterministic legal default: the cheapest cards that satisfy the
/// required length and the follow rules.
pub fn fallback_play(state: &GameState, seat: PlayerId) -> Result<Vec<Card>, DomainError> {
    let view = SeatView::new(state, seat);
    let basic = |c: Card| strategic_value(c, view.trump, ValueMode::Basic) as i64;
    match view.leading_cards() {
        None => view
            .hand
            .iter()
            .copied()
            .min_by_key(|&c| basic(c))
            .map(|c| vec![c])
            .ok_or_else(|| DomainError::internal(format!("player {seat} has no cards to lead"))),
        Some(leading) => {
            let play = legal_follow_with_order(leading, view.hand, view.trump, basic);
            if play.len() == leading.len() {
                Ok(play)
            } else {
                Err(DomainError::internal(format!(
                    "player {seat} cannot cover a {}-card lead",
                    leading.len()
                )))
            }
        }
    }
}

/// Eight validated cards for the kitty swap.
pub fn get_ai_kitty_swap(
    state: &GameState,
    seat: PlayerId,
    ai: &dyn AiPlayer,
) -> Result<Vec<Card>, DomainError> {
    let view = SeatView::new(state, seat);
    match ai.choose_kitty_swap(&view) {
        Ok(cards) if cards.len() == KITTY_SIZE && all_in_hand(&cards, view.hand) => {
            return Ok(cards)
        }
        Ok(cards) => {
            warn!(op = "get_ai_kitty_swap", seat, n = cards.len(), "AI kitty invalid, falling back");
        }
        Err(e) => {
            warn!(op = "get_ai_kitty_swap", seat, error = %e, "AI failed, falling back");
        }
    }

    // Fallback: bury the cheapest cards.
    let mut cards: Vec<Card> = view.hand.to_vec();
    cards.sort_by_key(|&c| strategic_value(c, view.trump, ValueMode::Basic));
    cards.truncate(KITTY_SIZE);
    if cards.len() == KITTY_SIZE {
        Ok(cards)
    } else {
        Err(DomainError::internal(format!(
            "player {seat} holds fewer than {KITTY_SIZE} cards at kitty swap"
        )))
    }
}

/// A declaration for `seat` if its AI wants one and it is legal, else None.
pub fn get_ai_declaration(
    state: &GameState,
    seat: PlayerId,
    ai: &dyn AiPlayer,
) -> Option<TrumpDeclaration> {
    let mut options = declarable_options(
        state.hand(seat),
        state.trump.rank,
        &state.declarations,
        seat,
    );
    // A standing declarer is only interested in genuine strengthening;
    // equal-strength re-declarations would spam the history.
    if let Some(current) = &state.declarations.current {
        if current.player == seat {
            options.retain(|d| d.decl_type.strength() > current.decl_type.strength());
        }
    }
    if options.is_empty() {
        return None;
    }
    let view = SeatView::new(state, seat);
    match ai.choose_declaration(&view, &options) {
        Ok(None) => None,
        Ok(Some(decl)) if options.contains(&decl) => Some(decl),
        Ok(Some(decl)) => {
            warn!(op = "get_ai_declaration", seat, decl = ?decl.decl_type, "AI chose an illegal declaration, declining");
            None
        }
        Err(e) => {
            warn!(op = "get_ai_declaration", seat, error = %e, "AI failed, declining");
            None
        }
    }
}
