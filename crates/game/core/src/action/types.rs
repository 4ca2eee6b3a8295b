//! Core action types and structures.
//!
//! This module defines the fundamental types for the action system:
//! - `ActionId`: Stable string identifier of a registered action
//! - `ActionCategory`: Gameplay category tag
//! - `ActionOutcome`: The result of action execution

use std::fmt;

use crate::state::UnitId;
use crate::stats::ResourceKind;

use super::profile::ResourceCost;

// ============================================================================
// Action Identifier
// ============================================================================

/// Unique identifier of an action definition (e.g. `"fireball"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActionId(String);

impl ActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for ActionId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ActionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ActionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Action Category
// ============================================================================

/// Gameplay category of an action.
///
/// Purely descriptive: the rules never branch on it, but UI and AI callers do.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionCategory {
    /// Weapon strikes.
    #[default]
    Attack,
    /// Spells paid with MP.
    Magic,
    /// Spirit techniques paid with kwan.
    Spirit,
    /// Consumable items.
    Item,
    /// Buffs, heals and other utility.
    Support,
}

// ============================================================================
// Effect Results
// ============================================================================

/// The actual value applied by an effect.
///
/// This captures both the planned value and what actually happened,
/// allowing for defense, overkill and overheal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppliedValue {
    /// Damage was dealt.
    Damage {
        /// Damage after defense.
        planned: u32,
        /// HP actually removed (capped at current HP).
        actual: u32,
    },

    /// Healing was applied.
    Healing {
        planned: u32,
        /// Healing done (capped at max HP).
        actual: u32,
    },

    /// A non-HP pool was restored.
    ResourceChange {
        resource: ResourceKind,
        /// Amount actually restored.
        delta: u32,
    },

    /// A buff was attached to the target.
    BuffApplied {
        stat: crate::stats::BuffStat,
        magnitude: i32,
        duration: Option<u32>,
    },
}

impl AppliedValue {
    /// Numeric amount that actually landed, for reports.
    pub fn amount(&self) -> i64 {
        match *self {
            Self::Damage { actual, .. } => i64::from(actual),
            Self::Healing { actual, .. } => i64::from(actual),
            Self::ResourceChange { delta, .. } => i64::from(delta),
            Self::BuffApplied { magnitude, .. } => i64::from(magnitude),
        }
    }

    /// Short tag for the kind of value (`damage`, `healing`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Damage { .. } => "damage",
            Self::Healing { .. } => "healing",
            Self::ResourceChange { .. } => "resource",
            Self::BuffApplied { .. } => "buff",
        }
    }
}

/// Result of an individual effect application.
///
/// Each effect applied to a target produces one `EffectResult`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectResult {
    /// The unit this effect was applied to.
    pub target: UnitId,

    /// The actual value that was applied.
    pub applied_value: AppliedValue,
}

impl EffectResult {
    pub fn new(target: UnitId, applied_value: AppliedValue) -> Self {
        Self {
            target,
            applied_value,
        }
    }
}

// ============================================================================
// Action Outcome
// ============================================================================

/// Result of a successful action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub action_id: ActionId,

    pub caster: UnitId,

    /// Individual effect results (in execution order).
    pub effects: Vec<EffectResult>,

    /// Costs deducted from the caster.
    pub cost_paid: Vec<ResourceCost>,

    /// Totals over `effects`.
    pub summary: ActionSummary,
}

impl ActionOutcome {
    pub fn new(
        action_id: ActionId,
        caster: UnitId,
        effects: Vec<EffectResult>,
        cost_paid: Vec<ResourceCost>,
    ) -> Self {
        let summary = ActionSummary::build(&effects);
        Self {
            action_id,
            caster,
            effects,
            cost_paid,
            summary,
        }
    }
}

/// Summary of action execution results.
///
/// This aggregates all effect results for easy access to totals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionSummary {
    /// Total HP removed across all effects.
    pub total_damage: u32,

    /// Total HP restored across all effects.
    pub total_healing: u32,

    /// Every unit touched by an effect, in first-touch order.
    pub affected_units: Vec<UnitId>,

    /// Units that went from alive to dead during the action.
    pub defeated_units: Vec<UnitId>,
}

impl ActionSummary {
    /// Builds summary from effect results.
    pub fn build(effects: &[EffectResult]) -> Self {
        let mut summary = Self::default();

        for effect in effects {
            match effect.applied_value {
                AppliedValue::Damage { actual, .. } => {
                    summary.total_damage = summary.total_damage.saturating_add(actual);
                }
                AppliedValue::Healing { actual, .. } => {
                    summary.total_healing = summary.total_healing.saturating_add(actual);
                }
                _ => {}
            }

            if !summary.affected_units.contains(&effect.target) {
                summary.affected_units.push(effect.target);
            }
        }

        summary
    }
}
