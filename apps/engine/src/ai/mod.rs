//! AI player module - automated decisions for every seat.
//!
//! The pieces:
//! - **[`AiPlayer`]** trait - the interface all AIs implement
//! - **[`Strategist`]** - the layered default AI (analysis → scenario
//!   handlers → value functions, with card memory and void inference)
//! - **[`RandomPlayer`]** - baseline making uniformly random legal moves
//! - **[`CardMemory`]** - shared memory rebuilt from the trick history
//! - **[`AiConfig`]** - seed-plus-custom-fields configuration
//! - **[`registry`]** - static factory list; see its docs to add an AI
//!
//! AIs never mutate state: they see a [`SeatView`] plus memory and return
//! cards. The engine validates every move and substitutes a deterministic
//! legal fallback when an AI misbehaves, so simulations keep running.
//!
//! [`SeatView`]: crate::domain::player_view::SeatView

pub mod analysis;
pub mod config;
pub mod declaring;
pub mod kitty_swap;
pub mod leading;
pub mod memory;
pub mod random;
pub mod registry;
pub mod strategist;
pub mod trait_def;

#[cfg(test)]
mod tests_strategist;

pub use config::AiConfig;
pub use memory::CardMemory;
pub use random::RandomPlayer;
pub use strategist::Strategist;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player from a registered type name and configuration.
///
/// Returns `None` if `ai_type` is unrecognized.
pub fn create_ai(ai_type: &str, config: AiConfig) -> Option<Box<dyn AiPlayer + Send + Sync>> {
    registry::by_name(ai_type).map(|factory| (factory.make)(config.seed()))
}
