//! Action execution pipeline.
//!
//! 1. Pre-validate caster, cooldown, targets and costs
//! 2. Deduct every cost from the caster
//! 3. For each target alive at the start, apply every effect in order
//! 4. Start the action's cooldown
//! 5. Post-validate resource invariants
//!
//! Effects keep running against a target that drops to 0 HP mid-action;
//! damage and healing against it simply land as zero.

use crate::action::error::ActionError;
use crate::action::profile::ActionDefinition;
use crate::action::types::{ActionOutcome, EffectResult};
use crate::state::{Roster, UnitId};

use super::context::EffectContext;
use super::validation::{post_validate, pre_validate};

/// Executes `action` for `caster` against `targets`, mutating `roster`.
///
/// # Errors
///
/// Returns an [`ActionError`] and leaves `roster` untouched when any
/// pre-check fails. `InvariantViolated` is the only error raised after
/// mutation and indicates a bug rather than a gameplay outcome.
pub fn execute(
    action: &ActionDefinition,
    caster: UnitId,
    targets: &[UnitId],
    roster: &mut Roster,
) -> Result<ActionOutcome, ActionError> {
    let living = pre_validate(action, caster, targets, roster)?;

    roster
        .get_mut(caster)
        .ok_or(ActionError::CasterNotFound { caster })?
        .pay(&action.costs);

    let mut effects = Vec::with_capacity(living.len() * action.effects.len());
    let mut defeated = Vec::new();

    for &target in &living {
        let Some(unit) = roster.get_mut(target) else {
            continue;
        };
        let was_alive = unit.is_alive();

        let mut ctx = EffectContext::new(caster, &action.id, unit);
        for effect in &action.effects {
            let applied = effect.apply(&mut ctx);
            effects.push(EffectResult::new(target, applied));
        }

        if was_alive && !unit.is_alive() {
            defeated.push(target);
        }
    }

    if let (Some(turns), Some(unit)) = (action.cooldown, roster.get_mut(caster)) {
        unit.start_cooldown(action.id.clone(), turns);
    }

    post_validate(std::iter::once(caster).chain(living.iter().copied()), roster)?;

    let mut outcome = ActionOutcome::new(action.id.clone(), caster, effects, action.costs.clone());
    outcome.summary.defeated_units = defeated;
    Ok(outcome)
}
