//! AI player trait definition.

use thiserror::Error;

use crate::domain::cards_types::Card;
use crate::domain::declarations::TrumpDeclaration;
use crate::domain::player_view::SeatView;

use super::memory::CardMemory;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, Error)]
pub enum AiError {
    #[error("AI internal error: {0}")]
    Internal(String),
    #[error("AI produced an invalid move: {0}")]
    InvalidMove(String),
}

/// Trait for AI players.
///
/// Implementations receive a per-seat view plus the shared card memory and
/// must choose an action. The engine validates every returned move and
/// falls back to a deterministic legal default on failure, so a buggy AI
/// degrades a game instead of wedging it.
pub trait AiPlayer: Send + Sync {
    /// Choose the cards to play for the trick in progress (or to lead).
    fn choose_play(&self, view: &SeatView<'_>, memory: &CardMemory) -> Result<Vec<Card>, AiError>;

    /// Choose the eight cards to bury during the kitty swap.
    fn choose_kitty_swap(&self, view: &SeatView<'_>) -> Result<Vec<Card>, AiError>;

    /// Choose a trump declaration from the legal options, or decline.
    fn choose_declaration(
        &self,
        view: &SeatView<'_>,
        options: &[TrumpDeclaration],
    ) -> Result<Option<TrumpDeclaration>, AiError>;
}
