//! Healing and resource restoration effects.

use crate::action::execute::EffectContext;
use crate::action::types::AppliedValue;
use crate::stats::ResourceKind;

// ============================================================================
// Healing
// ============================================================================

/// Restore HP, capped at the target's maximum. Dead targets are not healed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealingEffect {
    pub amount: u32,
}

impl HealingEffect {
    pub const fn new(amount: u32) -> Self {
        Self { amount }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.amount == 0 {
            return Err("healing amount must be positive");
        }
        Ok(())
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_>) -> AppliedValue {
        let actual = ctx.target.gain_hp(self.amount);
        ctx.accumulated_healing = ctx.accumulated_healing.saturating_add(actual);

        AppliedValue::Healing {
            planned: self.amount,
            actual,
        }
    }
}

// ============================================================================
// Resource Restore
// ============================================================================

/// Restore a spendable pool (MP, AP, rage, kwan), capped at its maximum.
///
/// Restoring HP through this effect behaves exactly like [`HealingEffect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceRestoreEffect {
    pub amount: u32,
    pub resource: ResourceKind,
}

impl ResourceRestoreEffect {
    pub const fn new(amount: u32, resource: ResourceKind) -> Self {
        Self { amount, resource }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.amount == 0 {
            return Err("restore amount must be positive");
        }
        Ok(())
    }

    pub fn apply(&self, ctx: &mut EffectContext<'_>) -> AppliedValue {
        if self.resource == ResourceKind::Hp {
            return HealingEffect::new(self.amount).apply(ctx);
        }

        let delta = ctx.target.restore(self.resource, self.amount);
        AppliedValue::ResourceChange {
            resource: self.resource,
            delta,
        }
    }
}
