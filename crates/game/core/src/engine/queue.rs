use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::action::ActionDefinition;
use crate::state::UnitId;

use super::timeline::{Timeline, TimelineEntry, TimelinePreview};

/// Scheduling priority of a queued action. Higher priorities always act first.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

/// Per-unit inputs to timeline ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    pub initiative: i32,
}

pub type UnitStatsMap = BTreeMap<UnitId, UnitStats>;

/// One submitted action waiting for resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct QueuedAction {
    pub unit: UnitId,
    pub action: Arc<ActionDefinition>,
    pub targets: Vec<UnitId>,
    pub priority: Priority,
    /// Enqueue order, unique per queue.
    pub sequence: u64,
}

/// Pending actions for the current turn.
///
/// Accepts any submission; affordability and liveness are checked when the
/// action executes, not when it is queued.
#[derive(Clone, Debug, Default)]
pub struct ActionQueue {
    pending: Vec<QueuedAction>,
    next_sequence: u64,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action and returns its sequence number.
    pub fn queue_action(
        &mut self,
        unit: UnitId,
        action: Arc<ActionDefinition>,
        targets: Vec<UnitId>,
        priority: Priority,
    ) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.pending.push(QueuedAction {
            unit,
            action,
            targets,
            priority,
            sequence,
        });
        sequence
    }

    /// Drains the queue into an ordered timeline.
    ///
    /// The pending list is taken whole and sorted as a new collection; a
    /// second call without new submissions yields an empty timeline.
    pub fn resolve_timeline(&mut self, unit_stats: &UnitStatsMap) -> Timeline {
        let mut pending = std::mem::take(&mut self.pending);
        pending.sort_by(|a, b| execution_order(a, b, unit_stats));

        pending
            .into_iter()
            .enumerate()
            .map(|(order, queued)| TimelineEntry::new(order, queued))
            .collect()
    }

    /// Same ordering as [`Self::resolve_timeline`] without draining.
    pub fn preview_timeline(&self, unit_stats: &UnitStatsMap) -> Vec<TimelinePreview> {
        let mut ordered: Vec<&QueuedAction> = self.pending.iter().collect();
        ordered.sort_by(|a, b| execution_order(a, b, unit_stats));

        ordered
            .into_iter()
            .enumerate()
            .map(|(order, queued)| TimelinePreview {
                order,
                unit: queued.unit,
                action_id: queued.action.id.clone(),
                action_name: queued.action.name.clone(),
                priority: queued.priority,
            })
            .collect()
    }

    /// Actions queued by `unit`, in enqueue order.
    pub fn pending_for(&self, unit: UnitId) -> impl Iterator<Item = &QueuedAction> {
        self.pending.iter().filter(move |q| q.unit == unit)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every pending action. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

fn initiative(unit_stats: &UnitStatsMap, unit: UnitId) -> i32 {
    unit_stats.get(&unit).map_or(0, |s| s.initiative)
}

fn execution_order(a: &QueuedAction, b: &QueuedAction, unit_stats: &UnitStatsMap) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| initiative(unit_stats, b.unit).cmp(&initiative(unit_stats, a.unit)))
        .then_with(|| a.sequence.cmp(&b.sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    const U1: UnitId = UnitId(1);
    const U2: UnitId = UnitId(2);
    const U3: UnitId = UnitId(3);

    fn action(id: &str) -> Arc<ActionDefinition> {
        Arc::new(ActionDefinition::new(id, id.to_uppercase()))
    }

    fn stats(pairs: &[(UnitId, i32)]) -> UnitStatsMap {
        pairs
            .iter()
            .map(|&(id, initiative)| (id, UnitStats { initiative }))
            .collect()
    }

    fn ids(timeline: &Timeline) -> Vec<&str> {
        timeline.iter().map(|e| e.action.id.as_str()).collect()
    }

    #[test]
    fn priority_beats_initiative() {
        let mut queue = ActionQueue::new();
        queue.queue_action(U1, action("a"), vec![U2], Priority::High);
        queue.queue_action(U2, action("b"), vec![U1], Priority::Normal);

        let timeline = queue.resolve_timeline(&stats(&[(U1, 60), (U2, 90)]));

        assert_eq!(ids(&timeline), ["a", "b"]);
        assert_eq!(timeline.entries()[1].order, 1);
    }

    #[test]
    fn same_unit_orders_by_priority() {
        let mut queue = ActionQueue::new();
        queue.queue_action(U1, action("low"), vec![], Priority::Low);
        queue.queue_action(U1, action("normal"), vec![], Priority::Normal);
        queue.queue_action(U1, action("high"), vec![], Priority::High);

        let timeline = queue.resolve_timeline(&stats(&[(U1, 10)]));
        assert_eq!(ids(&timeline), ["high", "normal", "low"]);
    }

    #[test]
    fn initiative_then_sequence_break_ties() {
        let mut queue = ActionQueue::new();
        queue.queue_action(U3, action("c"), vec![], Priority::Normal);
        queue.queue_action(U1, action("a1"), vec![], Priority::Normal);
        queue.queue_action(U2, action("b"), vec![], Priority::Normal);
        queue.queue_action(U1, action("a2"), vec![], Priority::Normal);

        // U3 has no stats and counts as initiative 0.
        let timeline = queue.resolve_timeline(&stats(&[(U1, 50), (U2, 70)]));
        assert_eq!(ids(&timeline), ["b", "a1", "a2", "c"]);
    }

    #[test]
    fn resolve_drains_the_queue() {
        let mut queue = ActionQueue::new();
        queue.queue_action(U1, action("a"), vec![], Priority::Normal);

        assert_eq!(queue.resolve_timeline(&UnitStatsMap::new()).len(), 1);
        assert!(queue.is_empty());
        assert!(queue.resolve_timeline(&UnitStatsMap::new()).is_empty());
    }

    #[test]
    fn resolution_is_deterministic() {
        let unit_stats = stats(&[(U1, 40), (U2, 40), (U3, 90)]);
        let fill = |queue: &mut ActionQueue| {
            queue.queue_action(U2, action("x"), vec![], Priority::Low);
            queue.queue_action(U1, action("y"), vec![], Priority::High);
            queue.queue_action(U3, action("z"), vec![], Priority::Low);
            queue.queue_action(U1, action("w"), vec![], Priority::Low);
        };

        let mut queue = ActionQueue::new();
        fill(&mut queue);
        let first = ids(&queue.resolve_timeline(&unit_stats))
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        fill(&mut queue);
        let second = ids(&queue.resolve_timeline(&unit_stats))
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();

        assert_eq!(first, second);
        assert_eq!(first, ["y", "z", "x", "w"]);
    }

    #[test]
    fn preview_matches_resolution_without_draining() {
        let unit_stats = stats(&[(U1, 10), (U2, 20)]);
        let mut queue = ActionQueue::new();
        queue.queue_action(U1, action("a"), vec![], Priority::Normal);
        queue.queue_action(U2, action("b"), vec![], Priority::Normal);

        let preview = queue.preview_timeline(&unit_stats);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pending_for(U1).count(), 1);

        let timeline = queue.resolve_timeline(&unit_stats);
        let previewed: Vec<_> = preview.iter().map(|p| p.action_id.as_str()).collect();
        assert_eq!(previewed, ids(&timeline));
        assert_eq!(preview[0].action_name, "B");
    }
}
