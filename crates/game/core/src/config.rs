/// Tunable parameters for combat resolution.
///
/// One instance is owned by the session and passed to every resolver call;
/// nothing reads these values from global state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Area-of-effect falloff and friendly-fire tuning.
    pub area: AreaConfig,

    /// Whether area attacks may hurt the caster's own team when the attack
    /// profile does not say otherwise.
    pub friendly_fire_enabled: bool,
}

impl CombatConfig {
    pub const DEFAULT_FRIENDLY_FIRE_ENABLED: bool = false;

    pub fn new() -> Self {
        Self {
            area: AreaConfig::default(),
            friendly_fire_enabled: Self::DEFAULT_FRIENDLY_FIRE_ENABLED,
        }
    }

    /// Builder: set the session-wide friendly fire default.
    pub fn with_friendly_fire(mut self, enabled: bool) -> Self {
        self.friendly_fire_enabled = enabled;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Falloff curve and friendly-fire scaling for area damage.
///
/// `multiplier = max(falloff_floor, 1 - (distance / radius) * falloff_slope)`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AreaConfig {
    /// Lowest multiplier any unit inside the radius can receive.
    pub falloff_floor: f64,

    /// How much of the base damage is lost between the origin and the edge.
    pub falloff_slope: f64,

    /// Fraction of computed damage friendly units take when friendly fire is on.
    pub friendly_fire_ratio: f64,
}

impl AreaConfig {
    pub const DEFAULT_FALLOFF_FLOOR: f64 = 0.1;
    pub const DEFAULT_FALLOFF_SLOPE: f64 = 0.9;
    pub const DEFAULT_FRIENDLY_FIRE_RATIO: f64 = 0.5;

    pub const fn new() -> Self {
        Self {
            falloff_floor: Self::DEFAULT_FALLOFF_FLOOR,
            falloff_slope: Self::DEFAULT_FALLOFF_SLOPE,
            friendly_fire_ratio: Self::DEFAULT_FRIENDLY_FIRE_RATIO,
        }
    }
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self::new()
    }
}
