//! Action definitions - complete specification for each action.
//!
//! An `ActionDefinition` bundles the effects, costs, targeting and cooldown of
//! one action. Definitions are authored as data (RON catalogs), registered
//! once, and shared read-only afterwards.

use crate::action::effect::EffectKind;
use crate::action::targeting::Targeting;
use crate::action::types::{ActionCategory, ActionId};
use crate::state::UnitState;
use crate::stats::ResourceKind;

/// Resource cost for an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceCost {
    pub resource: ResourceKind,
    pub amount: u32,
}

impl ResourceCost {
    pub const fn new(resource: ResourceKind, amount: u32) -> Self {
        Self { resource, amount }
    }

    pub const fn hp(amount: u32) -> Self {
        Self::new(ResourceKind::Hp, amount)
    }

    pub const fn mp(amount: u32) -> Self {
        Self::new(ResourceKind::Mp, amount)
    }

    pub const fn ap(amount: u32) -> Self {
        Self::new(ResourceKind::Ap, amount)
    }

    pub const fn rage(amount: u32) -> Self {
        Self::new(ResourceKind::Rage, amount)
    }

    pub const fn kwan(amount: u32) -> Self {
        Self::new(ResourceKind::Kwan, amount)
    }
}

/// Complete specification for an action.
///
/// An action with no effects is legal: it still pays its costs and starts its
/// cooldown.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDefinition {
    pub id: ActionId,

    /// Display name.
    pub name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub category: ActionCategory,

    /// Effects applied in order to each target.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<EffectKind>,

    /// Resource costs, all paid or none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub costs: Vec<ResourceCost>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub targeting: Targeting,

    /// Cooldown in turns after use.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: Option<u32>,
}

impl ActionDefinition {
    /// Creates an attack-category action with no effects, costs or cooldown.
    pub fn new(id: impl Into<ActionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: ActionCategory::default(),
            effects: Vec::new(),
            costs: Vec::new(),
            targeting: Targeting::default(),
            cooldown: None,
        }
    }

    pub fn with_category(mut self, category: ActionCategory) -> Self {
        self.category = category;
        self
    }

    /// Builder: append an effect.
    pub fn with_effect(mut self, effect: impl Into<EffectKind>) -> Self {
        self.effects.push(effect.into());
        self
    }

    /// Builder: append a cost.
    pub fn with_cost(mut self, cost: ResourceCost) -> Self {
        self.costs.push(cost);
        self
    }

    pub fn with_targeting(mut self, targeting: Targeting) -> Self {
        self.targeting = targeting;
        self
    }

    pub fn with_cooldown(mut self, turns: u32) -> Self {
        self.cooldown = Some(turns);
        self
    }

    /// Amount of `resource` this action costs in total.
    pub fn cost_of(&self, resource: ResourceKind) -> u32 {
        self.costs
            .iter()
            .filter(|c| c.resource == resource)
            .fold(0u32, |acc, c| acc.saturating_add(c.amount))
    }

    /// Advisory check for UI and AI callers: can `unit` pay every cost and is
    /// the action off cooldown? `execute` re-checks both.
    pub fn is_affordable_by(&self, unit: &UnitState) -> bool {
        unit.is_alive() && unit.can_afford(&self.costs) && !unit.is_on_cooldown(&self.id)
    }
}
