//! Sequential recipe execution.
//!
//! The engine threads one [`Context`] through every action named by a recipe.
//! Group steps are flattened: members run one at a time in the listed order,
//! exactly as if they had been written as single steps. The first error stops
//! the run and the partially updated context is dropped.

use tracing::{debug, instrument};

use crate::core::context::Context;
use crate::core::error::Result;
use crate::core::recipe::{Recipe, Step};
use crate::io::status::StatusSink;
use crate::registry::Registry;
use crate::select::RecipeBook;

/// Runs recipes against a fixed registry.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Registry,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}

impl Engine {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run every step of `recipe` in order and return the final context.
    #[instrument(skip_all, fields(steps = recipe.steps().len()))]
    pub fn run(
        &self,
        recipe: &Recipe,
        initial: Context,
        status: &mut dyn StatusSink,
    ) -> Result<Context> {
        let mut ctx = initial;
        for (index, step) in recipe.steps().iter().enumerate() {
            if let Step::Group(names) = step {
                debug!(step = index + 1, members = names.len(), "running group sequentially");
            }
            for name in step.names() {
                ctx = self.apply(name, ctx, status)?;
            }
        }
        debug!(?ctx, "recipe complete");
        Ok(ctx)
    }

    /// Select a recipe by operator choice, then run it.
    ///
    /// An unknown choice fails before any action executes.
    pub fn run_named(
        &self,
        book: &RecipeBook,
        choice: &str,
        initial: Context,
        status: &mut dyn StatusSink,
    ) -> Result<Context> {
        let recipe = book.select(choice)?;
        self.run(recipe, initial, status)
    }

    fn apply(&self, name: &str, ctx: Context, status: &mut dyn StatusSink) -> Result<Context> {
        let action = self.registry.resolve(name)?;
        debug!(action = name, "applying action");
        Ok(action.apply(ctx, status)?)
    }
}
