//! Domain layer: pure game rules, the round state machine, and the façade.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod combos;
pub mod dealing;
pub mod declarations;
pub mod engine;
pub mod player_view;
pub mod plays;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;
pub mod trump;
pub mod values;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_engine;
#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_types::{Card, CardFace, JokerKind, Rank, Suit};
pub use combos::{identify_combos, Combo, ComboType};
pub use state::{GamePhase, GameState, PlayerId, TeamId};
pub use trump::{compare_cards, EffectiveSuit, TrumpInfo};
pub use values::{strategic_value, ValueMode};
