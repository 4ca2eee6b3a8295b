//! Action model: definitions, effects, the registry and execution.
//!
//! An [`ActionDefinition`] is authored as data and registered in an
//! [`ActionRegistry`]. At resolution time [`execute`] applies it for one
//! caster against a target list inside a [`Roster`](crate::state::Roster).

pub mod effect;
pub mod error;
pub mod execute;
pub mod profile;
pub mod registry;
pub mod targeting;
pub mod types;

pub use effect::{BuffEffect, DamageEffect, EffectKind, HealingEffect, ResourceRestoreEffect};
pub use error::{ActionError, RegistryError, TargetIssue};
pub use execute::{EffectContext, execute};
pub use profile::{ActionDefinition, ResourceCost};
pub use registry::ActionRegistry;
pub use targeting::Targeting;
pub use types::{
    ActionCategory, ActionId, ActionOutcome, ActionSummary, AppliedValue, EffectResult,
};
