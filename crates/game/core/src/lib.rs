//! Deterministic turn-resolution rules shared by the runtime and tooling.
//!
//! `tactics-core` defines the canonical combat rules (effects, actions, the
//! action queue, area damage and combat resolution) as pure APIs over plain
//! data. Callers hand in a [`Roster`] of unit snapshots plus registered
//! [`ActionDefinition`]s and get back ordered timelines and numeric results.
//! Nothing here performs I/O or touches rendering.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod stats;
pub mod traits;

pub use action::{
    ActionCategory, ActionDefinition, ActionError, ActionId, ActionOutcome, ActionRegistry,
    ActionSummary, AppliedValue, BuffEffect, DamageEffect, EffectContext, EffectKind,
    EffectResult, HealingEffect, RegistryError, ResourceCost, ResourceRestoreEffect, TargetIssue,
    Targeting, execute,
};
pub use combat::{
    AreaAttack, CombatError, CombatResolver, DamageResult, DamageType, apply_damage,
    calculate_area_damage, damage_multiplier,
};
pub use config::{AreaConfig, CombatConfig};
pub use engine::{
    ActionQueue, Priority, QueuedAction, Timeline, TimelineEntry, TimelinePreview, UnitStats,
    UnitStatsMap,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ActiveBuff, AreaProfile, AttackProfile, PhaseError, Position, ResourceMeter, Roster, RosterError,
    TeamId, TurnTracker, UnitId, UnitPhase, UnitState,
};
pub use stats::{BuffStat, DamageTable, ResourceKind, ResourcePools};
pub use traits::{Combatant, Damageable, Spatial};
