//! Targeting metadata for actions.
//!
//! Range and radius are advisory: they describe how a caller should pick
//! targets, but `execute` only checks that the supplied targets exist and
//! that a living target is present when one is required.

/// How an action selects targets.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Targeting {
    /// Maximum range in tiles (Chebyshev distance).
    pub range: u32,

    /// Area-of-effect radius in tiles; `None` for single-target actions.
    pub area_radius: Option<f64>,

    /// Whether at least one living target must be supplied.
    pub requires_target: bool,
}

impl Targeting {
    /// Single target within `range`.
    pub const fn single(range: u32) -> Self {
        Self {
            range,
            area_radius: None,
            requires_target: true,
        }
    }

    /// Area centred within `range`, hitting everything within `radius`.
    pub const fn area(range: u32, radius: f64) -> Self {
        Self {
            range,
            area_radius: Some(radius),
            requires_target: true,
        }
    }

    /// No target needed (self buffs, stances).
    pub const fn untargeted() -> Self {
        Self {
            range: 0,
            area_radius: None,
            requires_target: false,
        }
    }

    pub fn is_area(&self) -> bool {
        self.area_radius.is_some()
    }
}

impl Default for Targeting {
    fn default() -> Self {
        Self::single(1)
    }
}
