use std::sync::Arc;

use crate::action::{ActionDefinition, ActionId};
use crate::state::UnitId;

use super::queue::{Priority, QueuedAction};

/// A queued action with its resolved execution order.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    /// Zero-based position in the timeline.
    pub order: usize,
    pub unit: UnitId,
    pub action: Arc<ActionDefinition>,
    pub targets: Vec<UnitId>,
    pub priority: Priority,
    pub sequence: u64,
}

impl TimelineEntry {
    pub(super) fn new(order: usize, queued: QueuedAction) -> Self {
        Self {
            order,
            unit: queued.unit,
            action: queued.action,
            targets: queued.targets,
            priority: queued.priority,
            sequence: queued.sequence,
        }
    }
}

/// Ordered execution plan produced by draining an [`ActionQueue`](super::ActionQueue).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the last entry belonging to `unit`, if any.
    pub fn last_entry_of(&self, unit: UnitId) -> Option<usize> {
        self.entries.iter().rposition(|e| e.unit == unit)
    }

    /// Distinct units in first-appearance order.
    pub fn units(&self) -> Vec<UnitId> {
        let mut units = Vec::new();
        for entry in &self.entries {
            if !units.contains(&entry.unit) {
                units.push(entry.unit);
            }
        }
        units
    }
}

impl FromIterator<TimelineEntry> for Timeline {
    fn from_iter<I: IntoIterator<Item = TimelineEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Timeline {
    type Item = TimelineEntry;
    type IntoIter = std::vec::IntoIter<TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Read-only view of one position in a not-yet-resolved timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelinePreview {
    pub order: usize,
    pub unit: UnitId,
    pub action_id: ActionId,
    pub action_name: String,
    pub priority: Priority,
}
