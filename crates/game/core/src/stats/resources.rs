//! Resource pools carried by every unit.
//!
//! HP is the life pool; MP, AP, rage and kwan are spendable pools that
//! actions declare costs against. Maximums are part of the snapshot handed in
//! by the caller, the core never recomputes them.

use crate::state::ResourceMeter;

/// Enum representing individual resource types.
///
/// Used in effects and resource costs to reference specific pools.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceKind {
    /// Health points.
    Hp,
    /// Magic points (mana).
    Mp,
    /// Action points spent by most actions.
    Ap,
    /// Rage built up by warrior classes.
    Rage,
    /// Kwan, the spirit pool used by spirit techniques.
    Kwan,
}

/// Current and maximum values for every pool of a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResourcePools {
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub ap: ResourceMeter,
    pub rage: ResourceMeter,
    pub kwan: ResourceMeter,
}

impl ResourcePools {
    /// Creates pools with full HP and MP and empty secondary pools.
    pub fn new(max_hp: u32, max_mp: u32) -> Self {
        Self {
            hp: ResourceMeter::full(max_hp),
            mp: ResourceMeter::full(max_mp),
            ..Self::default()
        }
    }

    pub fn get(&self, kind: ResourceKind) -> &ResourceMeter {
        match kind {
            ResourceKind::Hp => &self.hp,
            ResourceKind::Mp => &self.mp,
            ResourceKind::Ap => &self.ap,
            ResourceKind::Rage => &self.rage,
            ResourceKind::Kwan => &self.kwan,
        }
    }

    pub fn get_mut(&mut self, kind: ResourceKind) -> &mut ResourceMeter {
        match kind {
            ResourceKind::Hp => &mut self.hp,
            ResourceKind::Mp => &mut self.mp,
            ResourceKind::Ap => &mut self.ap,
            ResourceKind::Rage => &mut self.rage,
            ResourceKind::Kwan => &mut self.kwan,
        }
    }

    /// Current value of a pool.
    pub fn current(&self, kind: ResourceKind) -> u32 {
        self.get(kind).current
    }

    /// Returns the first pool whose current value exceeds its maximum, if any.
    pub fn first_inconsistent(&self) -> Option<ResourceKind> {
        use strum::IntoEnumIterator;

        ResourceKind::iter().find(|kind| !self.get(*kind).is_consistent())
    }
}
