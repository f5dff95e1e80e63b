//! Action trait and the name-to-action registry.
//!
//! The registry is built once at startup and only read afterwards. Lookups
//! that miss become [`LookupError::Action`] instead of a panic.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::actions::{AddMilk, AddSugar, BoilWater, BrewCoffee, Enjoy, TasteTest};
use crate::core::context::{Context, Field};
use crate::core::error::{LookupError, MissingFieldError};
use crate::io::status::StatusSink;

/// A named unit of work that transforms a context.
///
/// `requires` and `produces` declare which fields the action reads and
/// writes, so a recipe can be checked before it runs.
pub trait Action: Send + Sync {
    /// Registry key.
    fn name(&self) -> &str;

    /// Human-readable description for `brew actions`.
    fn description(&self) -> &str;

    /// Fields that must be present before `apply`.
    fn requires(&self) -> &[Field] {
        &[]
    }

    /// Fields present after a successful `apply`.
    fn produces(&self) -> &[Field] {
        &[]
    }

    /// Perform the action, emitting one status line on success.
    ///
    /// Fails without emitting anything if a required field is absent.
    fn apply(
        &self,
        ctx: Context,
        status: &mut dyn StatusSink,
    ) -> std::result::Result<Context, MissingFieldError>;
}

/// Immutable mapping from action name to action.
#[derive(Clone, Default)]
pub struct Registry {
    actions: BTreeMap<String, Arc<dyn Action>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the six built-in actions.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(BoilWater);
        registry.register(BrewCoffee);
        registry.register(AddSugar);
        registry.register(AddMilk);
        registry.register(TasteTest);
        registry.register(Enjoy);
        registry
    }

    /// Register an action under its own name, replacing any previous entry.
    pub fn register<A: Action + 'static>(&mut self, action: A) {
        let name = action.name().to_string();
        self.actions.insert(name, Arc::new(action));
    }

    pub fn resolve(&self, name: &str) -> std::result::Result<&dyn Action, LookupError> {
        self.actions
            .get(name)
            .map(|action| action.as_ref())
            .ok_or_else(|| LookupError::Action(name.to_string()))
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Registered actions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Action> {
        self.actions.values().map(|action| action.as_ref())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("actions", &self.names())
            .finish()
    }
}
