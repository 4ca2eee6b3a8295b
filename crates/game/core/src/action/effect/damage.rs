//! Damage effect implementation.

use crate::action::execute::EffectContext;
use crate::action::types::AppliedValue;
use crate::combat::DamageType;

/// Deal typed damage to the target, reduced by its matching defense.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEffect {
    pub amount: u32,
    pub damage_type: DamageType,
}

impl DamageEffect {
    pub const fn new(amount: u32, damage_type: DamageType) -> Self {
        Self {
            amount,
            damage_type,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.amount == 0 {
            return Err("damage amount must be positive");
        }
        Ok(())
    }

    /// Apply damage to the target.
    ///
    /// `planned` is the post-defense damage; `actual` is the HP removed, which
    /// is smaller on overkill and zero against a dead target.
    pub fn apply(&self, ctx: &mut EffectContext<'_>) -> AppliedValue {
        let defense = ctx.target.defense_for(self.damage_type);
        let planned = self.amount.saturating_sub(defense);
        let actual = ctx.target.lose_hp(planned);

        ctx.accumulated_damage = ctx.accumulated_damage.saturating_add(actual);

        AppliedValue::Damage { planned, actual }
    }
}
