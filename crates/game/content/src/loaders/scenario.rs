//! Scenario loader.
//!
//! A scenario is a roster plus the orders each unit submits for one turn.
//!
//! ```ron
//! (
//!     units: [ (id: 1, team: 0, resources: (hp: (current: 80, maximum: 80)), ...) ],
//!     orders: [ (unit: 1, action: "fireball", targets: [3], priority: High) ],
//!     area_attacks: [ (unit: 2, target: (x: 4, y: 1)) ],
//! )
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tactics_core::{ActionId, Position, Priority, Roster, UnitId, UnitState};

use crate::embedded::SKIRMISH_SCENARIO;
use crate::loaders::{LoadResult, read_file};

/// One action a unit queues.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Order {
    pub unit: UnitId,
    pub action: ActionId,
    #[serde(default)]
    pub targets: Vec<UnitId>,
    #[serde(default)]
    pub priority: Priority,
}

/// A direct area attack using the unit's attack profile.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AreaOrder {
    pub unit: UnitId,
    pub target: Position,
}

/// Units and orders for one resolution pass.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Scenario {
    pub units: Vec<UnitState>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub area_attacks: Vec<AreaOrder>,
}

impl Scenario {
    /// Builds the roster, rejecting duplicate ids, inconsistent pools and
    /// area profiles without a finite, non-negative radius.
    ///
    /// A unit authored with 0 HP is treated as dead.
    pub fn roster(&self) -> LoadResult<Roster> {
        let mut roster = Roster::new();
        for unit in &self.units {
            if let Some(resource) = unit.resources.first_inconsistent() {
                anyhow::bail!(
                    "unit {} has {} above its maximum",
                    unit.id,
                    resource
                );
            }
            if let Some(area) = unit.attack.as_ref().and_then(|a| a.area)
                && !area.has_valid_radius()
            {
                anyhow::bail!("unit {} has invalid area radius {}", unit.id, area.radius);
            }
            let mut unit = unit.clone();
            unit.alive = unit.alive && unit.hp() > 0;
            roster
                .insert(unit)
                .context("Failed to build scenario roster")?;
        }
        Ok(roster)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn parse(source: &str) -> LoadResult<Scenario> {
        ron::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }

    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    /// The skirmish scenario shipped with the crate.
    pub fn embedded() -> LoadResult<Scenario> {
        Self::parse(SKIRMISH_SCENARIO)
    }
}
