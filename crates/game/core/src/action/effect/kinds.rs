//! Effect kind enum and dispatcher.

use crate::action::execute::EffectContext;
use crate::action::types::AppliedValue;
use crate::combat::DamageType;
use crate::stats::{BuffStat, ResourceKind};

use super::buff::BuffEffect;
use super::damage::DamageEffect;
use super::resource::{HealingEffect, ResourceRestoreEffect};

/// The effect to apply.
///
/// Wraps every concrete effect type; each variant delegates to its struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    Damage(DamageEffect),
    Healing(HealingEffect),
    ResourceRestore(ResourceRestoreEffect),
    Buff(BuffEffect),
}

impl EffectKind {
    pub const fn damage(amount: u32, damage_type: DamageType) -> Self {
        Self::Damage(DamageEffect::new(amount, damage_type))
    }

    pub const fn healing(amount: u32) -> Self {
        Self::Healing(HealingEffect::new(amount))
    }

    pub const fn restore(amount: u32, resource: ResourceKind) -> Self {
        Self::ResourceRestore(ResourceRestoreEffect::new(amount, resource))
    }

    pub const fn buff(stat: BuffStat, magnitude: i32, duration: Option<u32>) -> Self {
        Self::Buff(BuffEffect::new(stat, magnitude, duration))
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

impl EffectKind {
    /// Checks authoring data. Called once when the owning action is registered.
    pub fn validate(&self) -> Result<(), &'static str> {
        match self {
            Self::Damage(e) => e.validate(),
            Self::Healing(e) => e.validate(),
            Self::ResourceRestore(e) => e.validate(),
            Self::Buff(e) => e.validate(),
        }
    }

    /// Applies the effect to the context's target.
    pub fn apply(&self, ctx: &mut EffectContext<'_>) -> AppliedValue {
        match self {
            Self::Damage(e) => e.apply(ctx),
            Self::Healing(e) => e.apply(ctx),
            Self::ResourceRestore(e) => e.apply(ctx),
            Self::Buff(e) => e.apply(ctx),
        }
    }
}

impl From<DamageEffect> for EffectKind {
    fn from(effect: DamageEffect) -> Self {
        Self::Damage(effect)
    }
}

impl From<HealingEffect> for EffectKind {
    fn from(effect: HealingEffect) -> Self {
        Self::Healing(effect)
    }
}

impl From<ResourceRestoreEffect> for EffectKind {
    fn from(effect: ResourceRestoreEffect) -> Self {
        Self::ResourceRestore(effect)
    }
}

impl From<BuffEffect> for EffectKind {
    fn from(effect: BuffEffect) -> Self {
        Self::Buff(effect)
    }
}
