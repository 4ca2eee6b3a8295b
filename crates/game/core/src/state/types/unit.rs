use std::collections::BTreeMap;

use crate::action::{ActionId, ResourceCost};
use crate::combat::DamageType;
use crate::stats::{
    BuffStat, DamageTable, ResourceKind, ResourcePools, apply_modifier, sum_modifiers,
};

use super::{ActiveBuff, Position, ResourceMeter, TeamId, UnitId};

/// Area-of-effect capability of an attack profile.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaProfile {
    /// Blast radius in tiles (Euclidean).
    pub radius: f64,

    /// Per-profile friendly fire switch. `None` defers to the session config.
    #[cfg_attr(feature = "serde", serde(default))]
    pub friendly_fire: Option<bool>,
}

impl AreaProfile {
    /// A usable radius is finite and not negative.
    pub fn has_valid_radius(&self) -> bool {
        self.radius.is_finite() && self.radius >= 0.0
    }
}

/// Attack capability of a unit.
///
/// Units without a profile cannot attack through the combat resolver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackProfile {
    /// Damage type used for area attacks and default strikes.
    pub primary_type: DamageType,

    /// Raw attack power per damage type.
    pub power: DamageTable,

    /// Reach in tiles (Chebyshev).
    pub range: u32,

    /// Present when the profile can hit an area.
    #[cfg_attr(feature = "serde", serde(default))]
    pub area: Option<AreaProfile>,
}

impl AttackProfile {
    /// Single-type melee profile with range 1.
    pub fn melee(damage_type: DamageType, power: u32) -> Self {
        let mut table = DamageTable::ZERO;
        table.set(damage_type, power);
        Self {
            primary_type: damage_type,
            power: table,
            range: 1,
            area: None,
        }
    }

    /// Builder: set range.
    pub fn with_range(mut self, range: u32) -> Self {
        self.range = range;
        self
    }

    /// Builder: make the profile area-capable.
    pub fn with_area(mut self, radius: f64, friendly_fire: Option<bool>) -> Self {
        self.area = Some(AreaProfile {
            radius,
            friendly_fire,
        });
        self
    }
}

#[cfg(feature = "serde")]
fn alive_by_default() -> bool {
    true
}

/// Snapshot of one unit as seen by the resolution rules.
///
/// Owned by the caller's game state; effects and the combat resolver mutate
/// it in place. The core never removes a unit, even at 0 HP.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub id: UnitId,

    #[cfg_attr(feature = "serde", serde(default))]
    pub team: TeamId,

    pub resources: ResourcePools,

    #[cfg_attr(feature = "serde", serde(default = "alive_by_default"))]
    pub alive: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    pub defenses: DamageTable,

    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<Position>,

    /// Base initiative before buffs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initiative: i32,

    /// Turns left per action before it can be used again.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldowns: BTreeMap<ActionId, u32>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub buffs: Vec<ActiveBuff>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: Option<AttackProfile>,

    /// Area attacks from this unit never damage its own team.
    #[cfg_attr(feature = "serde", serde(default))]
    pub precision_casting: bool,
}

impl UnitState {
    /// Creates a living unit with full HP and MP and no secondary pools.
    pub fn new(id: UnitId, team: TeamId, max_hp: u32, max_mp: u32) -> Self {
        Self {
            id,
            team,
            resources: ResourcePools::new(max_hp, max_mp),
            alive: max_hp > 0,
            defenses: DamageTable::ZERO,
            position: None,
            initiative: 0,
            cooldowns: BTreeMap::new(),
            buffs: Vec::new(),
            attack: None,
            precision_casting: false,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_defenses(mut self, defenses: DamageTable) -> Self {
        self.defenses = defenses;
        self
    }

    pub fn with_initiative(mut self, initiative: i32) -> Self {
        self.initiative = initiative;
        self
    }

    /// Sets a pool to full at `maximum`.
    pub fn with_pool(mut self, kind: ResourceKind, maximum: u32) -> Self {
        *self.resources.get_mut(kind) = ResourceMeter::full(maximum);
        if kind == ResourceKind::Hp {
            self.alive = maximum > 0;
        }
        self
    }

    pub fn with_attack(mut self, attack: AttackProfile) -> Self {
        self.attack = Some(attack);
        self
    }

    pub fn with_precision_casting(mut self) -> Self {
        self.precision_casting = true;
        self
    }

    // ------------------------------------------------------------------
    // Resources
    // ------------------------------------------------------------------

    pub fn hp(&self) -> u32 {
        self.resources.hp.current
    }

    pub fn max_hp(&self) -> u32 {
        self.resources.hp.maximum
    }

    pub fn mp(&self) -> u32 {
        self.resources.mp.current
    }

    pub fn max_mp(&self) -> u32 {
        self.resources.mp.maximum
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Removes up to `amount` HP and marks the unit dead at 0.
    ///
    /// Returns the HP actually removed; a dead unit takes nothing.
    pub fn lose_hp(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        let actual = self.resources.hp.drain(amount);
        if self.resources.hp.is_empty() {
            self.alive = false;
        }
        actual
    }

    /// Restores up to `amount` HP, capped at max. Dead units are not healed.
    pub fn gain_hp(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        self.resources.hp.restore(amount)
    }

    /// Restores a pool, capped at its max. HP goes through [`Self::gain_hp`].
    pub fn restore(&mut self, kind: ResourceKind, amount: u32) -> u32 {
        match kind {
            ResourceKind::Hp => self.gain_hp(amount),
            other => self.resources.get_mut(other).restore(amount),
        }
    }

    /// Returns the first pool that cannot cover `costs` as
    /// `(resource, required, available)`.
    ///
    /// Costs on the same pool are summed before comparing. Pools are checked
    /// in [`ResourceKind`] declaration order.
    pub fn shortfall(&self, costs: &[ResourceCost]) -> Option<(ResourceKind, u32, u32)> {
        use strum::IntoEnumIterator;

        ResourceKind::iter().find_map(|kind| {
            let required = costs
                .iter()
                .filter(|c| c.resource == kind)
                .fold(0u32, |acc, c| acc.saturating_add(c.amount));
            let available = self.resources.current(kind);
            (required > available).then_some((kind, required, available))
        })
    }

    /// Returns true if every cost can be paid from current pools.
    pub fn can_afford(&self, costs: &[ResourceCost]) -> bool {
        self.shortfall(costs).is_none()
    }

    /// Deducts every cost. Callers check [`Self::can_afford`] first; each
    /// deduction saturates so a pool never wraps.
    pub fn pay(&mut self, costs: &[ResourceCost]) {
        for cost in costs {
            self.resources.get_mut(cost.resource).drain(cost.amount);
        }
        if self.resources.hp.is_empty() {
            self.alive = false;
        }
    }

    // ------------------------------------------------------------------
    // Effective stats
    // ------------------------------------------------------------------

    fn modifier(&self, stat: BuffStat) -> i32 {
        sum_modifiers(self.buffs.iter().map(|b| (&b.stat, b.magnitude)), stat)
    }

    /// Defense against `damage_type`, including buffs, never below zero.
    pub fn defense_for(&self, damage_type: DamageType) -> u32 {
        apply_modifier(
            self.defenses.get(damage_type),
            self.modifier(BuffStat::Defense(damage_type)),
        )
    }

    /// Initiative including buffs.
    pub fn effective_initiative(&self) -> i32 {
        self.initiative
            .saturating_add(self.modifier(BuffStat::Initiative))
    }

    /// Attack power for `damage_type` including buffs, if the unit can attack.
    pub fn attack_power(&self, damage_type: DamageType) -> Option<u32> {
        let profile = self.attack.as_ref()?;
        Some(apply_modifier(
            profile.power.get(damage_type),
            self.modifier(BuffStat::AttackPower(damage_type)),
        ))
    }

    // ------------------------------------------------------------------
    // Cooldowns and buffs
    // ------------------------------------------------------------------

    pub fn cooldown_remaining(&self, action: &ActionId) -> u32 {
        self.cooldowns.get(action).copied().unwrap_or(0)
    }

    pub fn is_on_cooldown(&self, action: &ActionId) -> bool {
        self.cooldown_remaining(action) > 0
    }

    pub fn start_cooldown(&mut self, action: ActionId, turns: u32) {
        if turns > 0 {
            self.cooldowns.insert(action, turns);
        }
    }

    /// Counts down cooldowns and buff durations by one turn end, dropping
    /// whatever expires.
    pub fn end_turn(&mut self) {
        self.cooldowns.retain(|_, turns| {
            *turns = turns.saturating_sub(1);
            *turns > 0
        });
        self.buffs.retain_mut(|buff| !buff.tick());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> UnitState {
        UnitState::new(UnitId(1), TeamId(0), 100, 50)
            .with_defenses(DamageTable::new(5, 2, 0))
            .with_initiative(60)
    }

    fn buff(stat: BuffStat, magnitude: i32, remaining: Option<u32>) -> ActiveBuff {
        ActiveBuff {
            stat,
            magnitude,
            remaining,
            source_action: ActionId::from("test"),
            source_unit: UnitId(9),
        }
    }

    #[test]
    fn lose_hp_marks_dead_at_zero() {
        let mut unit = knight();

        assert_eq!(unit.lose_hp(30), 30);
        assert!(unit.is_alive());

        assert_eq!(unit.lose_hp(500), 70);
        assert_eq!(unit.hp(), 0);
        assert!(!unit.is_alive());

        assert_eq!(unit.lose_hp(10), 0);
        assert_eq!(unit.gain_hp(10), 0);
    }

    #[test]
    fn defense_includes_buffs_and_floors_at_zero() {
        let mut unit = knight();
        unit.buffs
            .push(buff(BuffStat::Defense(DamageType::Physical), 3, Some(2)));
        unit.buffs
            .push(buff(BuffStat::Defense(DamageType::Magical), -10, None));

        assert_eq!(unit.defense_for(DamageType::Physical), 8);
        assert_eq!(unit.defense_for(DamageType::Magical), 0);
        assert_eq!(unit.defense_for(DamageType::Spiritual), 0);
    }

    #[test]
    fn end_turn_expires_cooldowns_and_buffs() {
        let mut unit = knight();
        let slash = ActionId::from("slash");
        unit.start_cooldown(slash.clone(), 2);
        unit.buffs.push(buff(BuffStat::Initiative, 15, Some(1)));
        unit.buffs.push(buff(BuffStat::Initiative, 5, None));
        assert_eq!(unit.effective_initiative(), 80);

        unit.end_turn();
        assert_eq!(unit.cooldown_remaining(&slash), 1);
        assert_eq!(unit.effective_initiative(), 65);

        unit.end_turn();
        assert!(!unit.is_on_cooldown(&slash));
        assert_eq!(unit.buffs.len(), 1);
    }

    #[test]
    fn affordability_checks_every_cost() {
        let unit = knight().with_pool(ResourceKind::Ap, 2);
        let cheap = [ResourceCost::mp(10), ResourceCost::ap(2)];
        let pricey = [ResourceCost::mp(10), ResourceCost::ap(3)];
        let split = [ResourceCost::ap(1), ResourceCost::ap(2)];

        assert!(unit.can_afford(&cheap));
        assert_eq!(unit.shortfall(&pricey), Some((ResourceKind::Ap, 3, 2)));
        assert_eq!(unit.shortfall(&split), Some((ResourceKind::Ap, 3, 2)));
    }

    #[test]
    fn attack_power_requires_profile() {
        let unit = knight();
        assert_eq!(unit.attack_power(DamageType::Physical), None);

        let mut armed = knight().with_attack(AttackProfile::melee(DamageType::Physical, 20));
        armed
            .buffs
            .push(buff(BuffStat::AttackPower(DamageType::Physical), 5, Some(1)));
        assert_eq!(armed.attack_power(DamageType::Physical), Some(25));
        assert_eq!(armed.attack_power(DamageType::Magical), Some(0));
    }
}
