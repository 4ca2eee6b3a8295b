//! Damage types, results and application.

use crate::state::UnitId;
use crate::traits::Damageable;

// ============================================================================
// Damage Type
// ============================================================================

/// Damage type; each unit carries one defense value per type.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    /// Weapons and claws.
    #[default]
    Physical,
    /// Spells.
    Magical,
    /// Spirit techniques.
    Spiritual,
}

// ============================================================================
// Damage Result
// ============================================================================

/// Damage one unit is about to take from another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageResult {
    pub amount: u32,
    pub damage_type: DamageType,
    pub source: UnitId,
    pub target: UnitId,
}

/// Applies `result` to `target`. Returns whether the target is still alive.
///
/// HP floors at 0 and the alive flag clears when it gets there.
pub fn apply_damage<T: Damageable + ?Sized>(target: &mut T, result: &DamageResult) -> bool {
    target.take_damage(result.amount);
    target.is_alive()
}
