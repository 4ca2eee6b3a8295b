//! Unit stat blocks consumed by the resolution rules.
//!
//! # Layers
//!
//! ```text
//! [ Snapshot values (defenses, attack power, initiative) ]
//!      ↓
//! [ Buff modifiers (flat, signed, per stat) ]
//!      ↓
//! [ Effective values (defense floored at zero) ]
//! ```
//!
//! Resource pools sit beside the layers: current values are mutated by
//! effects and costs, maximums are fixed by the caller's snapshot.

pub mod modifiers;
pub mod resources;
pub mod table;

pub use modifiers::{BuffStat, apply_modifier, sum_modifiers};
pub use resources::{ResourceKind, ResourcePools};
pub use table::DamageTable;
