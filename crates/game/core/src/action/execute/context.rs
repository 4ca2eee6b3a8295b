//! Effect execution context.

use crate::action::types::ActionId;
use crate::state::{UnitId, UnitState};

/// Context for effect execution.
///
/// One context is created per target; it tracks accumulated values across the
/// effects of a single action against that target.
pub struct EffectContext<'a> {
    /// The unit performing the action.
    pub caster: UnitId,

    /// The action being executed.
    pub action: &'a ActionId,

    /// The current target.
    pub target: &'a mut UnitState,

    /// HP removed from this target so far.
    pub accumulated_damage: u32,

    /// HP restored to this target so far.
    pub accumulated_healing: u32,
}

impl<'a> EffectContext<'a> {
    pub fn new(caster: UnitId, action: &'a ActionId, target: &'a mut UnitState) -> Self {
        Self {
            caster,
            action,
            target,
            accumulated_damage: 0,
            accumulated_healing: 0,
        }
    }
}
