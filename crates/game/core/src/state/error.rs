//! State management errors.
//!
//! Errors related to roster bookkeeping and the per-unit turn state machine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{UnitId, UnitPhase};

/// Errors that occur while building or editing a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    /// Two units share an identifier.
    #[error("unit {unit} is already in the roster")]
    DuplicateUnit { unit: UnitId },
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateUnit { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateUnit { .. } => "ROSTER_DUPLICATE_UNIT",
        }
    }
}

/// Errors raised by the per-unit turn state machine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseError {
    /// The requested transition is not an edge of the state machine.
    #[error("unit {unit} cannot move from {from} to {to}")]
    IllegalTransition {
        unit: UnitId,
        from: UnitPhase,
        to: UnitPhase,
    },
}

impl GameError for PhaseError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IllegalTransition { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IllegalTransition { .. } => "PHASE_ILLEGAL_TRANSITION",
        }
    }
}
