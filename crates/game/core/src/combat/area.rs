//! Area-of-effect damage with distance falloff and friendly-fire rules.
//!
//! # Formula
//!
//! ```text
//! multiplier = max(falloff_floor, 1 - (distance / radius) * falloff_slope)
//! damage     = floor(base_damage * multiplier)
//!
//! friendly target:
//!     caster has precision casting -> 0
//!     friendly fire enabled        -> floor(damage * friendly_fire_ratio)
//!     otherwise                    -> 0
//! ```
//!
//! Area damage is not reduced by defense.

use crate::config::AreaConfig;
use crate::state::{Position, UnitId};
use crate::traits::Combatant;

use super::damage::{DamageResult, DamageType};

/// Absorbs float error such as `30.0 * 0.4 = 11.999...` before flooring.
const FLOOR_EPSILON: f64 = 1e-9;

/// One area attack to resolve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaAttack {
    pub origin: Position,
    /// Radius in tiles (Euclidean).
    pub radius: f64,
    pub base_damage: u32,
    pub attack_type: DamageType,
    pub caster: UnitId,
    pub friendly_fire: bool,
}

/// Falloff multiplier for a unit `distance` tiles from the origin.
///
/// A radius of 0 only reaches the origin tile, which takes full damage.
pub fn damage_multiplier(distance: f64, radius: f64, config: &AreaConfig) -> f64 {
    if radius <= 0.0 {
        return 1.0;
    }
    (1.0 - (distance / radius) * config.falloff_slope).max(config.falloff_floor)
}

fn scale(amount: u32, factor: f64) -> u32 {
    let scaled = (f64::from(amount) * factor + FLOOR_EPSILON).floor();
    // Float-to-int `as` saturates; negatives (impossible here) become 0.
    scaled as u32
}

/// Computes the damage every unit in `units` takes from `attack`.
///
/// Skips dead units, units off the grid, units outside the radius and the
/// caster itself. Returns only entries with damage above zero, in `units`
/// order. When the caster is not in `units`, nobody counts as friendly.
/// A negative or non-finite radius hits nobody.
pub fn calculate_area_damage<U: Combatant>(
    attack: &AreaAttack,
    units: &[U],
    config: &AreaConfig,
) -> Vec<DamageResult> {
    if !attack.radius.is_finite() || attack.radius < 0.0 {
        return Vec::new();
    }

    let caster = units.iter().find(|u| u.unit_id() == attack.caster);
    let caster_team = caster.map(|c| c.team());
    let precision = caster.is_some_and(|c| c.has_precision_casting());

    units
        .iter()
        .filter(|u| u.unit_id() != attack.caster && u.is_alive())
        .filter_map(|unit| {
            let distance = attack.origin.euclidean_distance(unit.position()?);
            if distance > attack.radius {
                return None;
            }

            let multiplier = damage_multiplier(distance, attack.radius, config);
            let mut amount = scale(attack.base_damage, multiplier);

            let friendly = caster_team.is_some_and(|team| team.is_friendly_to(unit.team()));
            if friendly {
                amount = if precision || !attack.friendly_fire {
                    0
                } else {
                    scale(amount, config.friendly_fire_ratio)
                };
            }

            (amount > 0).then(|| DamageResult {
                amount,
                damage_type: attack.attack_type,
                source: attack.caster,
                target: unit.unit_id(),
            })
        })
        .collect()
}
