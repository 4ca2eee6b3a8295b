//! One-turn scenario runner.

use anyhow::Context;
use serde::Serialize;
use tactics_content::Scenario;
use tactics_core::{
    ActionRegistry, CombatConfig, Position, Roster, TeamId, TimelinePreview, UnitId,
};
use tactics_runtime::{
    AreaAttackReport, BattleSession, ExecutionReport, StatisticsSnapshot,
};

/// An order the session refused to queue.
#[derive(Clone, Debug, Serialize)]
pub struct RejectedOrder {
    pub unit: UnitId,
    pub action: String,
    pub reason: String,
}

/// Result of one scenario area attack.
#[derive(Clone, Debug, Serialize)]
pub struct AreaAttackOutcome {
    pub unit: UnitId,
    pub target: Position,
    pub report: Option<AreaAttackReport>,
    pub error: Option<String>,
}

/// End-of-turn view of one unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnitSummary {
    pub id: UnitId,
    pub team: TeamId,
    pub hp: u32,
    pub max_hp: u32,
    pub alive: bool,
}

/// Everything a simulated turn produced.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub rejected: Vec<RejectedOrder>,
    pub timeline: Vec<TimelinePreview>,
    pub actions: Vec<ExecutionReport>,
    pub area_attacks: Vec<AreaAttackOutcome>,
    pub statistics: StatisticsSnapshot,
    pub units: Vec<UnitSummary>,
}

/// Runs scenarios against a fixed registry and configuration.
pub struct Simulator {
    session: BattleSession,
}

impl Simulator {
    pub fn new(registry: ActionRegistry, config: CombatConfig) -> anyhow::Result<Self> {
        let session = BattleSession::builder()
            .registry(registry)
            .config(config)
            .build()
            .context("Failed to build battle session")?;

        Ok(Self { session })
    }

    pub fn session(&self) -> &BattleSession {
        &self.session
    }

    /// Queues every order, executes the timeline, then runs the area attacks.
    ///
    /// Orders and area attacks that fail are reported, not returned as errors.
    pub fn run(&mut self, scenario: &Scenario) -> anyhow::Result<(SimulationReport, Roster)> {
        let mut roster = scenario.roster()?;
        let mut rejected = Vec::new();

        for order in &scenario.orders {
            let queued = self.session.queue_action(
                order.unit,
                order.action.as_str(),
                order.targets.clone(),
                order.priority,
            );
            if let Err(err) = queued {
                tracing::warn!(unit = %order.unit, action = %order.action, error = %err, "Order rejected");
                rejected.push(RejectedOrder {
                    unit: order.unit,
                    action: order.action.to_string(),
                    reason: err.to_string(),
                });
            }
        }

        let timeline = self.session.preview_timeline(&roster.unit_stats());
        let actions = self.session.execute_queued_actions(&mut roster);

        let area_attacks = scenario
            .area_attacks
            .iter()
            .map(|order| {
                match self.session.area_attack(order.unit, order.target, &mut roster) {
                    Ok(report) => AreaAttackOutcome {
                        unit: order.unit,
                        target: order.target,
                        report: Some(report),
                        error: None,
                    },
                    Err(err) => {
                        tracing::warn!(unit = %order.unit, error = %err, "Area attack failed");
                        AreaAttackOutcome {
                            unit: order.unit,
                            target: order.target,
                            report: None,
                            error: Some(err.to_string()),
                        }
                    }
                }
            })
            .collect();

        self.session.end_turn(&mut roster);

        let report = SimulationReport {
            rejected,
            timeline,
            actions,
            area_attacks,
            statistics: self.session.statistics().snapshot(),
            units: summarize(&roster),
        };

        Ok((report, roster))
    }
}

fn summarize(roster: &Roster) -> Vec<UnitSummary> {
    roster
        .iter()
        .map(|unit| UnitSummary {
            id: unit.id,
            team: unit.team,
            hp: unit.hp(),
            max_hp: unit.max_hp(),
            alive: unit.is_alive(),
        })
        .collect()
}
