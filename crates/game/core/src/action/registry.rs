//! Registry of action definitions keyed by id.
//!
//! Populated once at startup, then shared read-only. Every definition is
//! validated on the way in so execution never meets malformed data.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::sync::Arc;

use super::error::RegistryError;
use super::profile::ActionDefinition;
use super::types::ActionId;

impl Borrow<str> for ActionId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// Lookup of action id to shared definition, in registration order.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    actions: Vec<Arc<ActionDefinition>>,
    index: HashMap<ActionId, usize>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from definitions, stopping at the first error.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ActionDefinition>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Registers an action.
    ///
    /// # Errors
    ///
    /// `DuplicateAction` if the id is taken; `InvalidDefinition` if the
    /// definition has an empty id, a zero-amount effect, a zero-turn buff or
    /// a negative or non-finite area radius.
    pub fn register(&mut self, action: ActionDefinition) -> Result<(), RegistryError> {
        validate_definition(&action)?;

        if self.index.contains_key(&action.id) {
            return Err(RegistryError::DuplicateAction { id: action.id });
        }

        self.index.insert(action.id.clone(), self.actions.len());
        self.actions.push(Arc::new(action));
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<ActionDefinition>> {
        self.index.get(id).map(|&i| Arc::clone(&self.actions[i]))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All definitions in registration order.
    pub fn get_all(&self) -> &[Arc<ActionDefinition>] {
        &self.actions
    }

    pub fn ids(&self) -> impl Iterator<Item = &ActionId> {
        self.actions.iter().map(|a| &a.id)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

fn validate_definition(action: &ActionDefinition) -> Result<(), RegistryError> {
    let invalid = |reason| RegistryError::InvalidDefinition {
        id: action.id.clone(),
        reason,
    };

    if action.id.is_empty() {
        return Err(invalid("id must not be empty"));
    }

    for effect in &action.effects {
        effect.validate().map_err(invalid)?;
    }

    if let Some(radius) = action.targeting.area_radius
        && (!radius.is_finite() || radius < 0.0)
    {
        return Err(invalid("area radius must be a finite, non-negative number"));
    }

    Ok(())
}
