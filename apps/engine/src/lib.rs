//! Shengji (Tractor) game engine.
//!
//! A single-player implementation of the four-player double-deck
//! trick-taking game: the rules engine (trump-aware ordering, combo
//! identification, follow legality, trick resolution), the round and game
//! state machine (progressive dealing with in-flight trump declarations,
//! kitty exchange, scoring and rank advancement), and a layered AI that
//! produces a legal play for any seat.
//!
//! The façade in [`domain::engine`] is the only mutation surface; every
//! operation is a pure `(state, input) -> new state` transition.

pub mod ai;
pub mod domain;
pub mod errors;
pub mod services;
