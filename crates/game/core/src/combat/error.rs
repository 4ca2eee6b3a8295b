//! Combat resolution errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, UnitId};

/// Reasons an attack cannot be resolved.
///
/// These are expected gameplay outcomes; convenience APIs surface them as
/// `None` or an empty result list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    /// Attacker has no attack profile, or its profile has no area.
    #[error("unit {unit} cannot perform area attacks")]
    NotAreaCapable { unit: UnitId },

    /// Area profile radius is negative, infinite or NaN.
    #[error("unit {unit} has an invalid area radius")]
    InvalidAreaRadius { unit: UnitId },

    /// Attacker is at 0 HP.
    #[error("unit {unit} is dead")]
    AttackerDead { unit: UnitId },

    /// Attacker is not on the grid.
    #[error("unit {unit} has no position")]
    NoPosition { unit: UnitId },

    /// Target tile is beyond the attacker's range.
    #[error("{target} is {distance} tiles from unit {unit}, range is {range}")]
    OutOfRange {
        unit: UnitId,
        target: Position,
        distance: u32,
        range: u32,
    },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotAreaCapable { .. } | Self::NoPosition { .. } => ErrorSeverity::Validation,
            Self::InvalidAreaRadius { .. } => ErrorSeverity::Fatal,
            Self::AttackerDead { .. } | Self::OutOfRange { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAreaCapable { .. } => "COMBAT_NOT_AREA_CAPABLE",
            Self::InvalidAreaRadius { .. } => "COMBAT_INVALID_AREA_RADIUS",
            Self::AttackerDead { .. } => "COMBAT_ATTACKER_DEAD",
            Self::NoPosition { .. } => "COMBAT_NO_POSITION",
            Self::OutOfRange { .. } => "COMBAT_OUT_OF_RANGE",
        }
    }
}
