//! Action execution and registration errors.

use std::fmt;

use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitId;
use crate::stats::ResourceKind;

use super::types::ActionId;

// ============================================================================
// Action Execution Errors
// ============================================================================

/// Why a target list was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetIssue {
    /// The id does not name a unit in the roster.
    Missing(UnitId),
    /// A target is required but none of the supplied targets is alive.
    NoLivingTarget,
}

impl fmt::Display for TargetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(unit) => write!(f, "unit {unit} is not in the roster"),
            Self::NoLivingTarget => f.write_str("no living target"),
        }
    }
}

/// Errors that can occur while executing an action.
///
/// Every variant except `InvariantViolated` is raised before any state
/// changes, so a failed action leaves the roster untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Caster not found in the roster.
    #[error("caster {caster} not found")]
    CasterNotFound { caster: UnitId },

    /// Caster is dead (HP = 0).
    #[error("caster {caster} is dead")]
    CasterDead { caster: UnitId },

    /// Action is on cooldown for the caster.
    #[error("{action} is on cooldown for {remaining} more turn(s)")]
    OnCooldown { action: ActionId, remaining: u32 },

    /// Invalid target list.
    #[error("invalid target: {issue}")]
    InvalidTarget { issue: TargetIssue },

    /// Caster cannot pay a declared cost.
    #[error("insufficient {resource}: requires {required}, has {available}")]
    InsufficientResources {
        resource: ResourceKind,
        required: u32,
        available: u32,
    },

    /// A pool ended up above its maximum after the action.
    #[error("resource invariant violated: {resource} of unit {unit} exceeds its maximum")]
    InvariantViolated { unit: UnitId, resource: ResourceKind },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            CasterNotFound { .. } | InvalidTarget { .. } => ErrorSeverity::Validation,
            CasterDead { .. } | OnCooldown { .. } | InsufficientResources { .. } => {
                ErrorSeverity::Recoverable
            }
            InvariantViolated { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            CasterNotFound { .. } => "ACTION_CASTER_NOT_FOUND",
            CasterDead { .. } => "ACTION_CASTER_DEAD",
            OnCooldown { .. } => "ACTION_ON_COOLDOWN",
            InvalidTarget { .. } => "ACTION_INVALID_TARGET",
            InsufficientResources { .. } => "ACTION_INSUFFICIENT_RESOURCES",
            InvariantViolated { .. } => "ACTION_INVARIANT_VIOLATED",
        }
    }
}

// ============================================================================
// Registry Errors
// ============================================================================

/// Errors raised while registering action definitions.
///
/// Both variants mean the content is broken and loading should stop.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RegistryError {
    /// An action with this id is already registered.
    #[error("action '{id}' is already registered")]
    DuplicateAction { id: ActionId },

    /// The definition cannot be executed as written.
    #[error("action '{id}' is malformed: {reason}")]
    InvalidDefinition { id: ActionId, reason: &'static str },
}

impl GameError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateAction { .. } => "REGISTRY_DUPLICATE_ACTION",
            Self::InvalidDefinition { .. } => "REGISTRY_INVALID_DEFINITION",
        }
    }
}
