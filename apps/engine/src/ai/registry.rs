//! How to register your AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add an `AiFactory` entry to the static list with stable `name` and
//!    `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use super::random::RandomPlayer;
use super::strategist::Strategist;
use super::trait_def::AiPlayer;

/// The default AI for unattended seats.
pub const DEFAULT_AI_NAME: &str = Strategist::NAME;

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: Strategist::NAME,
        version: Strategist::VERSION,
        make: make_strategist,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

/// Returns the default AI factory.
pub fn default_ai() -> Option<&'static AiFactory> {
    by_name(DEFAULT_AI_NAME)
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(RandomPlayer::new(seed))
}

fn make_strategist(seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
    Box::new(Strategist::new(seed))
}
