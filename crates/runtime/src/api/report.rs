//! Per-action and per-attack result records.

use serde::Serialize;
use tactics_core::{
    ActionError, ActionId, ActionOutcome, AppliedValue, DamageResult, GameError, Position,
    ResourceCost, TimelineEntry, UnitId,
};

/// One effect as it landed on a target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppliedEffect {
    pub target: UnitId,
    /// `damage`, `healing`, `resource` or `buff`.
    pub kind: &'static str,
    /// HP removed, HP or pool restored, or buff magnitude.
    pub amount: i64,
    #[serde(skip)]
    pub value: AppliedValue,
}

impl From<(UnitId, &AppliedValue)> for AppliedEffect {
    fn from((target, value): (UnitId, &AppliedValue)) -> Self {
        Self {
            target,
            kind: value.kind(),
            amount: value.amount(),
            value: value.clone(),
        }
    }
}

/// Outcome of one timeline entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExecutionReport {
    /// Position in the executed timeline.
    pub order: usize,
    pub success: bool,
    pub unit: UnitId,
    pub action_id: ActionId,
    pub effects_applied: Vec<AppliedEffect>,
    /// Empty when the action failed.
    pub cost_paid: Vec<ResourceCost>,
    pub defeated: Vec<UnitId>,
    pub failure: Option<ActionError>,
    /// Stable code of `failure`, for clients that only match on strings.
    pub failure_code: Option<&'static str>,
}

impl ExecutionReport {
    pub(crate) fn from_outcome(entry: &TimelineEntry, outcome: ActionOutcome) -> Self {
        Self {
            order: entry.order,
            success: true,
            unit: entry.unit,
            action_id: outcome.action_id,
            effects_applied: outcome
                .effects
                .iter()
                .map(|e| AppliedEffect::from((e.target, &e.applied_value)))
                .collect(),
            cost_paid: outcome.cost_paid,
            defeated: outcome.summary.defeated_units,
            failure: None,
            failure_code: None,
        }
    }

    pub(crate) fn from_error(entry: &TimelineEntry, error: ActionError) -> Self {
        Self {
            order: entry.order,
            success: false,
            unit: entry.unit,
            action_id: entry.action.id.clone(),
            effects_applied: Vec::new(),
            cost_paid: Vec::new(),
            defeated: Vec::new(),
            failure_code: Some(error.error_code()),
            failure: Some(error),
        }
    }

    /// Total HP removed by this entry.
    pub fn damage_dealt(&self) -> u64 {
        self.effects_applied
            .iter()
            .filter_map(|e| match e.value {
                AppliedValue::Damage { actual, .. } => Some(u64::from(actual)),
                _ => None,
            })
            .sum()
    }

    /// Total HP restored by this entry.
    pub fn healing_done(&self) -> u64 {
        self.effects_applied
            .iter()
            .filter_map(|e| match e.value {
                AppliedValue::Healing { actual, .. } => Some(u64::from(actual)),
                _ => None,
            })
            .sum()
    }
}

/// Outcome of a direct area attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AreaAttackReport {
    pub attacker: UnitId,
    pub origin: Position,
    pub hits: Vec<DamageResult>,
    pub defeated: Vec<UnitId>,
}

impl AreaAttackReport {
    pub fn total_damage(&self) -> u64 {
        self.hits.iter().map(|h| u64::from(h.amount)).sum()
    }
}
