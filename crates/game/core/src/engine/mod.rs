//! Turn scheduling: the action queue and the timelines it resolves.
//!
//! Units submit actions during a turn; resolving the queue drains it into a
//! [`Timeline`] in a deterministic total order:
//!
//! 1. priority, highest first
//! 2. unit initiative, highest first (missing stats count as 0)
//! 3. enqueue sequence, oldest first
mod queue;
mod timeline;

pub use queue::{ActionQueue, Priority, QueuedAction, UnitStats, UnitStatsMap};
pub use timeline::{Timeline, TimelineEntry, TimelinePreview};
