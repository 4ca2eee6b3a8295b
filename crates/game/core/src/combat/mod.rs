//! Combat resolution.
//!
//! Pure functions compute [`DamageResult`]s from unit capabilities; the
//! [`CombatResolver`] ties them to a [`CombatConfig`](crate::CombatConfig)
//! and is the single place where a result becomes an HP change.
//!
//! - `calculate_damage`: attack power against defense for one target
//! - `calculate_area_damage`: falloff-scaled damage for everything in a radius
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod area;
pub mod damage;
pub mod error;
pub mod resolver;

pub use area::{AreaAttack, calculate_area_damage, damage_multiplier};
pub use damage::{DamageResult, DamageType, apply_damage};
pub use error::CombatError;
pub use resolver::CombatResolver;
