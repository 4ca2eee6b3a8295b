//! Per-damage-type value tables (defenses and attack power).

use crate::combat::DamageType;

/// One value per damage type.
///
/// Units carry one table for defenses; attack profiles carry one for power.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageTable {
    pub physical: u32,
    pub magical: u32,
    pub spiritual: u32,
}

impl DamageTable {
    pub const ZERO: Self = Self {
        physical: 0,
        magical: 0,
        spiritual: 0,
    };

    pub const fn new(physical: u32, magical: u32, spiritual: u32) -> Self {
        Self {
            physical,
            magical,
            spiritual,
        }
    }

    /// Table with the same value for every type.
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value)
    }

    pub fn get(&self, damage_type: DamageType) -> u32 {
        match damage_type {
            DamageType::Physical => self.physical,
            DamageType::Magical => self.magical,
            DamageType::Spiritual => self.spiritual,
        }
    }

    pub fn set(&mut self, damage_type: DamageType, value: u32) {
        match damage_type {
            DamageType::Physical => self.physical = value,
            DamageType::Magical => self.magical = value,
            DamageType::Spiritual => self.spiritual = value,
        }
    }
}
