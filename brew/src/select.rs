//! Recipe selection for `brew run` and `brew check`.
//!
//! Selection is a pure lookup from operator text to a recipe. It is kept apart
//! from the interactive prompt so it can be tested without stdin.

use std::collections::BTreeMap;

use crate::core::error::LookupError;
use crate::core::recipe::{self, Recipe};

/// Trim surrounding whitespace and lowercase.
pub fn normalize_choice(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Named recipes available for selection, keyed by normalized name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `black` and `milk` recipes.
    pub fn builtin() -> Self {
        let mut book = Self::new();
        book.insert("black", recipe::black());
        book.insert("milk", recipe::milk());
        book
    }

    /// Insert under the normalized name, replacing any existing recipe.
    pub fn insert(&mut self, name: &str, recipe: Recipe) {
        self.recipes.insert(normalize_choice(name), recipe);
    }

    /// Look up a recipe by operator choice (case-insensitive, trimmed).
    pub fn select(&self, choice: &str) -> Result<&Recipe, LookupError> {
        let key = normalize_choice(choice);
        self.recipes
            .get(&key)
            .ok_or(LookupError::Recipe(key))
    }

    /// Recipe names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.recipes.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.recipes
            .iter()
            .map(|(name, recipe)| (name.as_str(), recipe))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
