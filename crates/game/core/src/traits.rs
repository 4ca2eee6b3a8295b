//! Capability interfaces consumed by the combat resolver.
//!
//! Instead of probing units for optional behaviour, the resolver is generic
//! over what a unit can do. [`UnitState`] implements every capability.

use crate::combat::DamageType;
use crate::state::{AttackProfile, Position, TeamId, UnitId, UnitState};

/// Something that can take damage.
pub trait Damageable {
    fn unit_id(&self) -> UnitId;

    fn is_alive(&self) -> bool;

    /// Defense against `damage_type`, buffs included.
    fn defense_against(&self, damage_type: DamageType) -> u32;

    /// Removes up to `amount` HP; returns the HP actually removed.
    fn take_damage(&mut self, amount: u32) -> u32;
}

/// Something that may occupy a grid tile.
pub trait Spatial {
    fn position(&self) -> Option<Position>;
}

/// Something that fights: belongs to a team and may attack.
pub trait Combatant: Damageable + Spatial {
    fn team(&self) -> TeamId;

    /// `None` when the unit cannot attack at all.
    fn attack_profile(&self) -> Option<&AttackProfile>;

    /// Attack power for `damage_type`, buffs included.
    fn power_for(&self, damage_type: DamageType) -> Option<u32>;

    fn has_precision_casting(&self) -> bool {
        false
    }

    /// Both units positioned and `target` within attack range (Chebyshev).
    fn is_in_range_of<T: Spatial + ?Sized>(&self, target: &T) -> bool {
        let (Some(profile), Some(from), Some(to)) =
            (self.attack_profile(), self.position(), target.position())
        else {
            return false;
        };
        from.chebyshev_distance(to) <= profile.range
    }

    /// Raw damage this unit deals to `target`: power minus defense, never
    /// below zero.
    fn calculate_damage_against<T: Damageable + ?Sized>(
        &self,
        target: &T,
        damage_type: DamageType,
    ) -> Option<u32> {
        let power = self.power_for(damage_type)?;
        Some(power.saturating_sub(target.defense_against(damage_type)))
    }
}

impl Damageable for UnitState {
    fn unit_id(&self) -> UnitId {
        self.id
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn defense_against(&self, damage_type: DamageType) -> u32 {
        self.defense_for(damage_type)
    }

    fn take_damage(&mut self, amount: u32) -> u32 {
        self.lose_hp(amount)
    }
}

impl Spatial for UnitState {
    fn position(&self) -> Option<Position> {
        self.position
    }
}

impl Combatant for UnitState {
    fn team(&self) -> TeamId {
        self.team
    }

    fn attack_profile(&self) -> Option<&AttackProfile> {
        self.attack.as_ref()
    }

    fn power_for(&self, damage_type: DamageType) -> Option<u32> {
        self.attack_power(damage_type)
    }

    fn has_precision_casting(&self) -> bool {
        self.precision_casting
    }
}
