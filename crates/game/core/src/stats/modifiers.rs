//! Buff modifiers layered on top of snapshot stats.
//!
//! Buffs are flat, signed adjustments. Several buffs on the same stat stack
//! additively; the effective value of an unsigned stat never drops below 0.

use crate::combat::DamageType;

/// Stat a buff adjusts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuffStat {
    /// Defense against one damage type.
    Defense(DamageType),
    /// Attack power for one damage type.
    AttackPower(DamageType),
    /// Turn-order initiative.
    Initiative,
}

/// Sums every modifier in `modifiers` that targets `stat`.
pub fn sum_modifiers<'a>(
    modifiers: impl IntoIterator<Item = (&'a BuffStat, i32)>,
    stat: BuffStat,
) -> i32 {
    modifiers
        .into_iter()
        .filter(|(s, _)| **s == stat)
        .fold(0i32, |acc, (_, magnitude)| acc.saturating_add(magnitude))
}

/// Applies a signed modifier to an unsigned base value, flooring at zero.
pub fn apply_modifier(base: u32, modifier: i32) -> u32 {
    let value = i64::from(base) + i64::from(modifier);
    value.clamp(0, i64::from(u32::MAX)) as u32
}
