//! Action effect system - atomic effects that actions apply.
//!
//! Effects are the building blocks of actions. An action is an ordered list of
//! effects applied to each target. Every effect is a plain struct; the
//! [`EffectKind`] enum wraps them for data authoring and static dispatch.
//!
//! Each effect exposes two steps:
//! - `validate`: reject malformed authoring data at registration time
//! - `apply`: mutate the target and report what actually happened
//!
//! Applying an effect never fails and never moves a pool outside
//! `[0, maximum]`.

mod buff;
mod damage;
mod kinds;
mod resource;

pub use buff::BuffEffect;
pub use damage::DamageEffect;
pub use kinds::EffectKind;
pub use resource::{HealingEffect, ResourceRestoreEffect};
