//! Attack orchestration over capability traits.

use crate::config::CombatConfig;
use crate::state::{Position, Roster, UnitId};
use crate::traits::{Combatant, Damageable};

use super::area::{AreaAttack, calculate_area_damage};
use super::damage::{DamageResult, DamageType, apply_damage};
use super::error::CombatError;

/// Resolves single-target and area attacks under one [`CombatConfig`].
///
/// Calculation methods never mutate; [`Self::apply_damage`] and
/// [`Self::apply_all`] are the only paths from a result to an HP change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombatResolver {
    config: CombatConfig,
}

impl CombatResolver {
    pub fn new(config: CombatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Damage `attacker` would deal to `target` with `attack_type`.
    ///
    /// `None` when the attacker has no attack profile.
    pub fn calculate_damage<A, T>(
        &self,
        attacker: &A,
        target: &T,
        attack_type: DamageType,
    ) -> Option<DamageResult>
    where
        A: Combatant + ?Sized,
        T: Damageable + ?Sized,
    {
        attacker.attack_profile()?;
        let amount = attacker.calculate_damage_against(target, attack_type)?;
        Some(DamageResult {
            amount,
            damage_type: attack_type,
            source: attacker.unit_id(),
            target: target.unit_id(),
        })
    }

    /// Whether `target` is inside `attacker`'s range. Unpositioned units are
    /// never in range.
    pub fn can_attack<A, T>(&self, attacker: &A, target: &T) -> bool
    where
        A: Combatant + ?Sized,
        T: Combatant + ?Sized,
    {
        attacker.is_in_range_of(target)
    }

    /// Area attack from `attacker` centred on `target_position`.
    ///
    /// The profile's own friendly-fire switch wins over the config default.
    pub fn area_attack<U: Combatant>(
        &self,
        attacker: &U,
        target_position: Position,
        all_units: &[U],
    ) -> Result<Vec<DamageResult>, CombatError> {
        let unit = attacker.unit_id();

        let profile = attacker
            .attack_profile()
            .ok_or(CombatError::NotAreaCapable { unit })?;
        let area = profile.area.ok_or(CombatError::NotAreaCapable { unit })?;
        if !area.has_valid_radius() {
            return Err(CombatError::InvalidAreaRadius { unit });
        }

        if !attacker.is_alive() {
            return Err(CombatError::AttackerDead { unit });
        }

        let from = attacker.position().ok_or(CombatError::NoPosition { unit })?;
        let distance = from.chebyshev_distance(target_position);
        if distance > profile.range {
            return Err(CombatError::OutOfRange {
                unit,
                target: target_position,
                distance,
                range: profile.range,
            });
        }

        let attack = AreaAttack {
            origin: target_position,
            radius: area.radius,
            base_damage: attacker.power_for(profile.primary_type).unwrap_or(0),
            attack_type: profile.primary_type,
            caster: unit,
            friendly_fire: area
                .friendly_fire
                .unwrap_or(self.config.friendly_fire_enabled),
        };

        Ok(calculate_area_damage(&attack, all_units, &self.config.area))
    }

    /// Like [`Self::area_attack`] but reports every failure as "nothing hit".
    pub fn perform_area_attack<U: Combatant>(
        &self,
        attacker: &U,
        target_position: Position,
        all_units: &[U],
    ) -> Vec<DamageResult> {
        self.area_attack(attacker, target_position, all_units)
            .unwrap_or_default()
    }

    /// Applies one result. Returns whether the target is still alive.
    pub fn apply_damage<T: Damageable + ?Sized>(&self, target: &mut T, result: &DamageResult) -> bool {
        apply_damage(target, result)
    }

    /// Applies every result to its target in `roster`, returning the units
    /// that died. Results naming units outside the roster are ignored.
    pub fn apply_all(&self, roster: &mut Roster, results: &[DamageResult]) -> Vec<UnitId> {
        let mut defeated = Vec::new();
        for result in results {
            let Some(target) = roster.get_mut(result.target) else {
                continue;
            };
            let was_alive = target.is_alive();
            if !self.apply_damage(target, result) && was_alive {
                defeated.push(result.target);
            }
        }
        defeated
    }
}
