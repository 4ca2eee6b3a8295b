use std::collections::BTreeMap;

use super::{PhaseError, UnitId};

/// Where a unit stands within the current turn.
///
/// ```text
/// Idle ──queue──▶ ActionQueued ──resolve──▶ Resolving ──execute──▶ Executed
///   ▲               │  ▲                                              │
///   │               └──┘ (queue again)                                │
///   └──────────────────────────── end_turn ───────────────────────────┘
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum UnitPhase {
    #[default]
    Idle,
    ActionQueued,
    Resolving,
    Executed,
}

impl UnitPhase {
    /// Returns true if `self -> next` is an edge of the state machine.
    ///
    /// Returning to `Idle` is handled by [`TurnTracker::end_turn`] and is not
    /// an ordinary transition.
    pub const fn can_transition_to(self, next: UnitPhase) -> bool {
        matches!(
            (self, next),
            (UnitPhase::Idle, UnitPhase::ActionQueued)
                | (UnitPhase::ActionQueued, UnitPhase::ActionQueued)
                | (UnitPhase::ActionQueued, UnitPhase::Resolving)
                | (UnitPhase::Resolving, UnitPhase::Executed)
        )
    }
}

/// Per-unit phase bookkeeping for one turn.
///
/// Units that were never touched this turn are implicitly `Idle`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnTracker {
    phases: BTreeMap<UnitId, UnitPhase>,
}

impl TurnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, unit: UnitId) -> UnitPhase {
        self.phases.get(&unit).copied().unwrap_or_default()
    }

    /// Moves `unit` to `next`, rejecting edges the state machine lacks.
    pub fn transition(&mut self, unit: UnitId, next: UnitPhase) -> Result<(), PhaseError> {
        let current = self.phase(unit);
        if !current.can_transition_to(next) {
            return Err(PhaseError::IllegalTransition {
                unit,
                from: current,
                to: next,
            });
        }
        self.phases.insert(unit, next);
        Ok(())
    }

    /// Checks whether `unit` may queue another action without changing anything.
    pub fn ensure_can_queue(&self, unit: UnitId) -> Result<(), PhaseError> {
        let current = self.phase(unit);
        if current.can_transition_to(UnitPhase::ActionQueued) {
            Ok(())
        } else {
            Err(PhaseError::IllegalTransition {
                unit,
                from: current,
                to: UnitPhase::ActionQueued,
            })
        }
    }

    /// Units currently in `phase`, in id order.
    pub fn units_in(&self, phase: UnitPhase) -> impl Iterator<Item = UnitId> + '_ {
        self.phases
            .iter()
            .filter(move |(_, p)| **p == phase)
            .map(|(id, _)| *id)
    }

    /// Resets every unit to `Idle` for the next turn.
    pub fn end_turn(&mut self) {
        self.phases.clear();
    }
}
