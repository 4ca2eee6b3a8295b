//! Pre- and post-execution checks.

use crate::action::error::{ActionError, TargetIssue};
use crate::action::profile::ActionDefinition;
use crate::state::{Roster, UnitId};

/// Runs every check that must pass before any state changes.
///
/// Order: caster exists and is alive, action off cooldown, targets resolve,
/// costs affordable. Returns the targets that are alive right now, duplicates
/// removed, in the order given.
pub(super) fn pre_validate(
    action: &ActionDefinition,
    caster: UnitId,
    targets: &[UnitId],
    roster: &Roster,
) -> Result<Vec<UnitId>, ActionError> {
    let unit = roster
        .get(caster)
        .ok_or(ActionError::CasterNotFound { caster })?;
    if !unit.is_alive() {
        return Err(ActionError::CasterDead { caster });
    }

    let remaining = unit.cooldown_remaining(&action.id);
    if remaining > 0 {
        return Err(ActionError::OnCooldown {
            action: action.id.clone(),
            remaining,
        });
    }

    let mut living = Vec::with_capacity(targets.len());
    for &id in targets {
        let target = roster.get(id).ok_or(ActionError::InvalidTarget {
            issue: TargetIssue::Missing(id),
        })?;
        if target.is_alive() && !living.contains(&id) {
            living.push(id);
        }
    }
    if action.targeting.requires_target && living.is_empty() {
        return Err(ActionError::InvalidTarget {
            issue: TargetIssue::NoLivingTarget,
        });
    }

    if let Some((resource, required, available)) = unit.shortfall(&action.costs) {
        return Err(ActionError::InsufficientResources {
            resource,
            required,
            available,
        });
    }

    Ok(living)
}

/// Verifies that no touched unit ended with a pool above its maximum.
pub(super) fn post_validate(
    touched: impl IntoIterator<Item = UnitId>,
    roster: &Roster,
) -> Result<(), ActionError> {
    for unit in touched {
        if let Some(state) = roster.get(unit)
            && let Some(resource) = state.resources.first_inconsistent()
        {
            return Err(ActionError::InvariantViolated { unit, resource });
        }
    }
    Ok(())
}
