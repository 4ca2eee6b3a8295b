//! Battle session orchestrator.
//!
//! A [`BattleSession`] is the explicit context every resolution call goes
//! through. It owns the action registry, the pending queue, the combat
//! resolver and the per-unit turn phases. The roster stays with the caller
//! and is borrowed mutably for the calls that change it.

use std::sync::Arc;

use tactics_core::{
    ActionDefinition, ActionQueue, ActionRegistry, CombatConfig, CombatResolver, GameError,
    Position, Priority, Roster, Timeline, TimelinePreview, TurnTracker, UnitId, UnitPhase,
    UnitStatsMap,
};

use crate::api::{AreaAttackReport, ExecutionReport, Result, SessionError};
use crate::statistics::ActionStatistics;

/// Per-battle resolution context.
///
/// Construct with [`BattleSession::builder`]. Nothing here is global; two
/// sessions never share a queue or a configuration.
#[derive(Debug)]
pub struct BattleSession {
    registry: Arc<ActionRegistry>,
    queue: ActionQueue,
    resolver: CombatResolver,
    turns: TurnTracker,
    statistics: ActionStatistics,
    turn: u64,
}

impl BattleSession {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    // ========================================================================
    // Queueing
    // ========================================================================

    /// Queues `action_id` for `unit` and returns its sequence number.
    ///
    /// Unknown ids are rejected here. Affordability, target validity and
    /// liveness are only checked when the timeline executes.
    pub fn queue_action(
        &mut self,
        unit: UnitId,
        action_id: &str,
        targets: Vec<UnitId>,
        priority: Priority,
    ) -> Result<u64> {
        let action = self
            .registry
            .get(action_id)
            .ok_or_else(|| SessionError::UnknownAction {
                id: action_id.to_owned(),
            })?;

        self.turns.transition(unit, UnitPhase::ActionQueued)?;
        let sequence = self.queue.queue_action(unit, action, targets, priority);

        tracing::debug!(
            unit = %unit,
            action = action_id,
            ?priority,
            sequence,
            "Action queued"
        );

        Ok(sequence)
    }

    /// Ordered view of the pending queue without draining it.
    pub fn preview_timeline(&self, unit_stats: &UnitStatsMap) -> Vec<TimelinePreview> {
        self.queue.preview_timeline(unit_stats)
    }

    /// Number of actions waiting for the next resolution.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Drains the queue into an ordered timeline and moves every unit in it
    /// to `Resolving`.
    pub fn resolve_timeline(&mut self, unit_stats: &UnitStatsMap) -> Timeline {
        let timeline = self.queue.resolve_timeline(unit_stats);

        for unit in timeline.units() {
            if let Err(err) = self.turns.transition(unit, UnitPhase::Resolving) {
                tracing::warn!(unit = %unit, error = %err, "Unit skipped resolving phase");
            }
        }

        tracing::debug!(turn = self.turn, entries = timeline.len(), "Timeline resolved");
        timeline
    }

    /// Executes a resolved timeline against `roster`, one report per entry.
    ///
    /// A failed entry leaves the roster untouched and does not stop the
    /// entries after it.
    pub fn execute(&mut self, timeline: &Timeline, roster: &mut Roster) -> Vec<ExecutionReport> {
        let mut reports = Vec::with_capacity(timeline.len());

        for (index, entry) in timeline.iter().enumerate() {
            let report =
                match tactics_core::execute(&entry.action, entry.unit, &entry.targets, roster) {
                    Ok(outcome) => {
                        let report = ExecutionReport::from_outcome(entry, outcome);
                        self.statistics.record_success(
                            report.damage_dealt(),
                            report.healing_done(),
                            report.defeated.len() as u64,
                        );
                        tracing::debug!(
                            order = entry.order,
                            unit = %entry.unit,
                            action = %entry.action.id,
                            effects = report.effects_applied.len(),
                            defeated = report.defeated.len(),
                            "Action executed"
                        );
                        report
                    }
                    Err(err) => {
                        self.statistics.record_failure();
                        tracing::info!(
                            order = entry.order,
                            unit = %entry.unit,
                            action = %entry.action.id,
                            code = err.error_code(),
                            error = %err,
                            "Action failed"
                        );
                        ExecutionReport::from_error(entry, err)
                    }
                };

            if timeline.last_entry_of(entry.unit) == Some(index)
                && self.turns.phase(entry.unit) == UnitPhase::Resolving
            {
                if let Err(err) = self.turns.transition(entry.unit, UnitPhase::Executed) {
                    tracing::warn!(unit = %entry.unit, error = %err, "Phase update rejected");
                }
            }

            reports.push(report);
        }

        reports
    }

    /// Resolves the pending queue using the roster's current initiative and
    /// executes it.
    pub fn execute_queued_actions(&mut self, roster: &mut Roster) -> Vec<ExecutionReport> {
        let unit_stats = roster.unit_stats();
        let timeline = self.resolve_timeline(&unit_stats);
        self.execute(&timeline, roster)
    }

    // ========================================================================
    // Direct combat
    // ========================================================================

    /// Runs `attacker`'s area attack centred on `target` and applies the hits.
    pub fn area_attack(
        &mut self,
        attacker: UnitId,
        target: Position,
        roster: &mut Roster,
    ) -> Result<AreaAttackReport> {
        let unit = roster
            .get(attacker)
            .ok_or(SessionError::UnitNotFound { unit: attacker })?;
        let hits = self.resolver.area_attack(unit, target, roster.as_slice())?;

        let hp_before = total_hp(roster);
        let defeated = self.resolver.apply_all(roster, &hits);
        let removed = hp_before.saturating_sub(total_hp(roster));
        self.statistics.record_damage(removed, defeated.len() as u64);

        tracing::debug!(
            attacker = %attacker,
            origin = %target,
            hits = hits.len(),
            damage = removed,
            defeated = defeated.len(),
            "Area attack resolved"
        );

        Ok(AreaAttackReport {
            attacker,
            origin: target,
            hits,
            defeated,
        })
    }

    // ========================================================================
    // Turn lifecycle
    // ========================================================================

    /// Closes the current turn.
    ///
    /// Ticks cooldowns and buffs, resets every phase to `Idle` and drops any
    /// action that was queued but never resolved.
    pub fn end_turn(&mut self, roster: &mut Roster) {
        if !self.queue.is_empty() {
            tracing::warn!(
                turn = self.turn,
                dropped = self.queue.len(),
                "Discarding unresolved actions at turn end"
            );
            self.queue.clear();
        }

        roster.end_turn();
        self.turns.end_turn();
        self.turn += 1;

        tracing::debug!(turn = self.turn, "Turn started");
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn phase(&self, unit: UnitId) -> UnitPhase {
        self.turns.phase(unit)
    }

    pub fn statistics(&self) -> &ActionStatistics {
        &self.statistics
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CombatConfig {
        self.resolver.config()
    }
}

fn total_hp(roster: &Roster) -> u64 {
    roster.iter().map(|u| u64::from(u.hp())).sum()
}

/// Builder for [`BattleSession`].
#[derive(Debug, Default)]
pub struct SessionBuilder {
    config: CombatConfig,
    registry: Option<ActionRegistry>,
    definitions: Vec<ActionDefinition>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Override combat configuration
    pub fn config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the session-wide friendly fire default
    pub fn friendly_fire(mut self, enabled: bool) -> Self {
        self.config.friendly_fire_enabled = enabled;
        self
    }

    /// Start from an already populated registry
    pub fn registry(mut self, registry: ActionRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Register one more action. Duplicates surface from [`Self::build`].
    pub fn register_action(mut self, action: ActionDefinition) -> Self {
        self.definitions.push(action);
        self
    }

    pub fn register_actions(mut self, actions: impl IntoIterator<Item = ActionDefinition>) -> Self {
        self.definitions.extend(actions);
        self
    }

    pub fn build(self) -> Result<BattleSession> {
        let mut registry = self.registry.unwrap_or_default();
        for action in self.definitions {
            registry.register(action)?;
        }

        tracing::debug!(
            actions = registry.len(),
            friendly_fire = self.config.friendly_fire_enabled,
            "Battle session created"
        );

        Ok(BattleSession {
            registry: Arc::new(registry),
            queue: ActionQueue::new(),
            resolver: CombatResolver::new(self.config),
            turns: TurnTracker::new(),
            statistics: ActionStatistics::new(),
            turn: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{DamageType, EffectKind, RegistryError};

    fn strike() -> ActionDefinition {
        ActionDefinition::new("strike", "Strike")
            .with_effect(EffectKind::damage(10, DamageType::Physical))
    }

    #[test]
    fn builder_rejects_duplicate_actions() {
        let err = BattleSession::builder()
            .register_action(strike())
            .register_action(strike())
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            SessionError::Registry(RegistryError::DuplicateAction { .. })
        ));
    }

    #[test]
    fn builder_applies_friendly_fire_override() {
        let session = BattleSession::builder()
            .config(CombatConfig::default())
            .friendly_fire(true)
            .build()
            .unwrap();

        assert!(session.config().friendly_fire_enabled);
        assert!(session.registry().is_empty());
        assert_eq!(session.turn(), 0);
    }

    #[test]
    fn unknown_action_is_rejected_before_queueing() {
        let mut session = BattleSession::builder()
            .register_action(strike())
            .build()
            .unwrap();

        let err = session
            .queue_action(UnitId(1), "nope", vec![UnitId(2)], Priority::Normal)
            .unwrap_err();

        assert!(matches!(err, SessionError::UnknownAction { ref id } if id == "nope"));
        assert_eq!(session.pending(), 0);
        assert_eq!(session.phase(UnitId(1)), UnitPhase::Idle);
    }
}
