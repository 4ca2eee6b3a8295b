//! Unified error type surfaced by the session API.
//!
//! Wraps failures from the registry, the turn state machine and combat
//! resolution so clients can bubble them up with consistent context.
//! Per-action failures during timeline execution are not errors at this
//! level; they are reported inside [`ExecutionReport`](crate::ExecutionReport).

use tactics_core::{CombatError, PhaseError, RegistryError, UnitId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown action '{id}'")]
    UnknownAction { id: String },

    #[error("unit {unit} is not in the roster")]
    UnitNotFound { unit: UnitId },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Phase(#[from] PhaseError),

    #[error(transparent)]
    Combat(#[from] CombatError),
}
