//! Orchestration services sitting between the façade and the AI layer.

pub mod game_flow;
