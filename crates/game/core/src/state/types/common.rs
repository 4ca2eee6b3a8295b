use std::fmt;

/// Unique identifier for a unit tracked in a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side a unit fights for. Units sharing a team are friendly to each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TeamId(pub u8);

impl TeamId {
    /// Returns true if both ids name the same side.
    #[inline]
    pub const fn is_friendly_to(self, other: TeamId) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team-{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance, used for area-of-effect falloff.
    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Tile distance with diagonal moves costing one, used for attack range.
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Integer resource meter (e.g., health, mana) tracked per unit.
///
/// `current` never exceeds `maximum`; every mutator saturates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Creates a meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Amount that can still be restored before hitting the maximum.
    pub fn missing(&self) -> u32 {
        self.maximum.saturating_sub(self.current)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Adds up to `amount`, capped at the maximum. Returns the amount actually added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.missing());
        self.current += actual;
        actual
    }

    /// Removes up to `amount`, floored at zero. Returns the amount actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    /// Returns true if the meter respects `current <= maximum`.
    pub fn is_consistent(&self) -> bool {
        self.current <= self.maximum
    }
}
