//! Buff effect implementation.

use crate::action::execute::EffectContext;
use crate::action::types::AppliedValue;
use crate::state::ActiveBuff;
use crate::stats::BuffStat;

/// Attach a flat stat modifier to the target.
///
/// `duration` counts turn ends; `None` keeps the buff until it is cleared.
/// Negative magnitudes are debuffs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffEffect {
    pub stat: BuffStat,
    pub magnitude: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,
}

impl BuffEffect {
    pub const fn new(stat: BuffStat, magnitude: i32, duration: Option<u32>) -> Self {
        Self {
            stat,
            magnitude,
            duration,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.magnitude == 0 {
            return Err("buff magnitude must be non-zero");
        }
        if self.duration == Some(0) {
            return Err("buff duration must be at least one turn");
        }
        Ok(())
    }

    /// Dead targets keep no buffs; the result still reports the attempt.
    pub fn apply(&self, ctx: &mut EffectContext<'_>) -> AppliedValue {
        if ctx.target.is_alive() {
            ctx.target.buffs.push(ActiveBuff {
                stat: self.stat,
                magnitude: self.magnitude,
                remaining: self.duration,
                source_action: ctx.action.clone(),
                source_unit: ctx.caster,
            });
        }

        AppliedValue::BuffApplied {
            stat: self.stat,
            magnitude: self.magnitude,
            duration: self.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionId;
    use crate::combat::DamageType;
    use crate::state::{TeamId, UnitId, UnitState};

    #[test]
    fn buff_raises_defense_until_expiry() {
        let action = ActionId::from("stone_skin");
        let mut target = UnitState::new(UnitId(1), TeamId(0), 50, 0);
        let effect = BuffEffect::new(BuffStat::Defense(DamageType::Physical), 6, Some(1));

        let mut ctx = EffectContext::new(UnitId(4), &action, &mut target);
        effect.apply(&mut ctx);

        assert_eq!(target.defense_for(DamageType::Physical), 6);
        assert_eq!(target.buffs[0].source_unit, UnitId(4));

        target.end_turn();
        assert_eq!(target.defense_for(DamageType::Physical), 0);
    }

    #[test]
    fn zero_duration_is_rejected() {
        let effect = BuffEffect::new(BuffStat::Initiative, 5, Some(0));
        assert!(effect.validate().is_err());
        assert!(
            BuffEffect::new(BuffStat::Initiative, 5, None)
                .validate()
                .is_ok()
        );
    }
}
