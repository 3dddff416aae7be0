//! Persistence envelope: versioned save/restore of a whole game.
//!
//! The envelope carries a version string, a timestamp, a stable game id and
//! a completion flag next to the state itself. Restore validates structure
//! before handing the state back; a save that fails validation is refused
//! rather than repaired.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::dealing::double_deck;
use crate::domain::state::{GamePhase, GameState, DECK_SIZE, PLAYERS};
use crate::errors::DomainError;

pub const SNAPSHOT_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: String,
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
    pub game_id: String,
    pub completed: bool,
    pub state: GameState,
}

/// Wrap a state for persistence.
pub fn save_game(state: &GameState) -> SavedGame {
    let saved_at = OffsetDateTime::now_utc();
    let game_id = format!(
        "{:?}-{:?}-{}",
        state.teams[0].rank,
        state.teams[1].rank,
        saved_at.unix_timestamp()
    );
    SavedGame {
        version: SNAPSHOT_VERSION.to_string(),
        saved_at,
        game_id,
        completed: state.phase == GamePhase::GameOver,
        state: state.clone(),
    }
}

/// Validate and unwrap a saved game.
pub fn restore_game(saved: SavedGame) -> Result<GameState, DomainError> {
    if saved.version != SNAPSHOT_VERSION {
        return Err(DomainError::internal(format!(
            "save version {:?} does not match engine version {SNAPSHOT_VERSION:?}",
            saved.version
        )));
    }
    let state = saved.state;
    if state.players.len() != PLAYERS {
        return Err(DomainError::internal("save does not hold four players"));
    }
    if state.current_player as usize >= PLAYERS {
        return Err(DomainError::internal(format!(
            "current player {} out of range",
            state.current_player
        )));
    }
    validate_card_conservation(&state)?;
    Ok(state)
}

/// Every card of the double deck must exist exactly once across the deck,
/// hands, kitty, current trick and history.
pub fn validate_card_conservation(state: &GameState) -> Result<(), DomainError> {
    if state.total_cards() != DECK_SIZE {
        return Err(DomainError::internal(format!(
            "state holds {} cards, expected {DECK_SIZE}",
            state.total_cards()
        )));
    }

    let mut all: Vec<_> = state.deck.iter().copied().collect();
    all.extend(state.kitty.iter().copied());
    for player in &state.players {
        all.extend(player.hand.iter().copied());
    }
    if let Some(trick) = &state.current_trick {
        all.extend(trick.plays.iter().flat_map(|p| p.cards.iter().copied()));
    }
    for trick in &state.trick_history {
        all.extend(trick.plays.iter().flat_map(|p| p.cards.iter().copied()));
    }
    all.sort();

    let mut expected = double_deck();
    expected.sort();
    if all != expected {
        return Err(DomainError::internal(
            "card multiset does not match the double deck",
        ));
    }
    Ok(())
}
