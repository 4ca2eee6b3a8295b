use crate::engine::{UnitStats, UnitStatsMap};

use super::{RosterError, UnitId, UnitState};

/// Unit snapshots participating in one resolution pass.
///
/// Iteration order is insertion order, which keeps every pass over the roster
/// (area damage, statistics) deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster {
    units: Vec<UnitState>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster, rejecting duplicate identifiers.
    pub fn from_units(units: impl IntoIterator<Item = UnitState>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for unit in units {
            roster.insert(unit)?;
        }
        Ok(roster)
    }

    /// Adds a unit. Fails if a unit with the same id is already present.
    pub fn insert(&mut self, unit: UnitState) -> Result<(), RosterError> {
        if self.contains(unit.id) {
            return Err(RosterError::DuplicateUnit { unit: unit.id });
        }
        self.units.push(unit);
        Ok(())
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.iter().any(|u| u.id == id)
    }

    pub fn get(&self, id: UnitId) -> Option<&UnitState> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut UnitState> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitState> {
        self.units.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut UnitState> {
        self.units.iter_mut()
    }

    pub fn as_slice(&self) -> &[UnitState] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Initiative of every unit (buffs included), keyed by id.
    pub fn unit_stats(&self) -> UnitStatsMap {
        self.units
            .iter()
            .map(|u| {
                (
                    u.id,
                    UnitStats {
                        initiative: u.effective_initiative(),
                    },
                )
            })
            .collect()
    }

    /// Advances every unit past a turn end (cooldowns, buff durations).
    pub fn end_turn(&mut self) {
        for unit in &mut self.units {
            unit.end_turn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TeamId;

    #[test]
    fn rejects_duplicate_ids() {
        let a = UnitState::new(UnitId(1), TeamId(0), 10, 0);
        let b = UnitState::new(UnitId(1), TeamId(1), 20, 0);

        let err = Roster::from_units([a, b]).unwrap_err();
        assert_eq!(err, RosterError::DuplicateUnit { unit: UnitId(1) });
    }

    #[test]
    fn insert_keeps_the_original_on_duplicate() {
        let mut roster =
            Roster::from_units([UnitState::new(UnitId(1), TeamId(0), 10, 0)]).unwrap();

        let err = roster
            .insert(UnitState::new(UnitId(1), TeamId(0), 99, 0))
            .unwrap_err();

        assert_eq!(err, RosterError::DuplicateUnit { unit: UnitId(1) });
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(UnitId(1)).unwrap().max_hp(), 10);
    }

    #[test]
    fn unit_stats_reports_initiative() {
        let roster = Roster::from_units([
            UnitState::new(UnitId(1), TeamId(0), 10, 0).with_initiative(60),
            UnitState::new(UnitId(2), TeamId(1), 10, 0).with_initiative(90),
        ])
        .unwrap();

        let stats = roster.unit_stats();
        assert_eq!(stats[&UnitId(1)].initiative, 60);
        assert_eq!(stats[&UnitId(2)].initiative, 90);
    }
}
