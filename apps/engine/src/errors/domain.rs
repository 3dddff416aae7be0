//! Domain-level error type used across the façade and AI services.
//!
//! Every façade operation validates before it mutates: on error the caller's
//! state is untouched. `Internal` is reserved for invariant violations the
//! engine cannot recover from; callers should stop driving a game that
//! surfaced one.

use thiserror::Error;

use crate::domain::state::{GamePhase, PlayerId};

/// Why a play was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayViolation {
    #[error("played cards are not all in hand")]
    CardsNotInHand,
    #[error("expected {expected} cards, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("must play cards of the leading suit while holding them")]
    MustFollowSuit,
    #[error("all held cards of the leading suit must be included")]
    MustExhaustLeadingSuit,
    #[error("a pair of the leading suit must be included when one is held")]
    PairRequired,
    #[error("held pairs of the leading suit must be used before singles")]
    TractorPairsRequired,
    #[error("a lead must stay within a single suit group")]
    MixedLead,
    #[error("empty play")]
    Empty,
}

/// Why a trump declaration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationViolation {
    #[error("declaration type does not beat the standing declaration")]
    NotStronger,
    #[error("declaring cards are not all in hand")]
    CardsNotInHand,
    #[error("declaring cards do not match the declaration type")]
    CardsMismatch,
    #[error("declared suit does not match the declaring cards")]
    SuitMismatch,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("illegal play: {0}")]
    IllegalPlay(#[from] PlayViolation),
    #[error("illegal declaration: {0}")]
    IllegalDeclaration(#[from] DeclarationViolation),
    #[error("operation requires phase {expected:?}, game is in {actual:?}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
    #[error("player {actual} acted out of turn (expected player {expected})")]
    WrongPlayer { expected: PlayerId, actual: PlayerId },
    #[error("unparseable card token: {0:?}")]
    ParseCard(String),
    #[error("internal inconsistency: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}
