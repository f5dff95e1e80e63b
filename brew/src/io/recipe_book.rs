//! Recipe book file (TOML) merged over the built-in recipes.
//!
//! ```toml
//! [recipes]
//! double = ["boil_water", "brew_coffee", ["add_sugar", "add_sugar"], "enjoy"]
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::recipe::{Recipe, Step};
use crate::select::{RecipeBook, normalize_choice};

/// On-disk recipe book.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RecipeBookFile {
    pub recipes: BTreeMap<String, Recipe>,
}

impl RecipeBookFile {
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for (name, recipe) in &self.recipes {
            let key = normalize_choice(name);
            if key.is_empty() {
                return Err(anyhow!("recipe name must not be blank"));
            }
            if !seen.insert(key) {
                return Err(anyhow!(
                    "recipe '{name}' duplicates another recipe name (names are case-insensitive)"
                ));
            }
            if recipe.is_empty() {
                return Err(anyhow!("recipe '{name}' must have at least one step"));
            }
            for (index, step) in recipe.steps().iter().enumerate() {
                if matches!(step, Step::Group(names) if names.is_empty()) {
                    return Err(anyhow!("recipe '{name}' step {}: empty group", index + 1));
                }
            }
        }
        Ok(())
    }
}

/// Load the built-in book, overlaid with recipes from `path` if given.
///
/// A given path must exist. File recipes replace built-ins with the same
/// normalized name.
pub fn load_recipe_book(path: Option<&Path>) -> Result<RecipeBook> {
    let mut book = RecipeBook::builtin();
    let Some(path) = path else {
        return Ok(book);
    };
    if !path.exists() {
        bail!("recipe book {} does not exist", path.display());
    }

    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let file: RecipeBookFile =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    file.validate()
        .with_context(|| format!("invalid recipe book {}", path.display()))?;

    info!(path = %path.display(), recipes = file.recipes.len(), "loaded recipe book");
    for (name, recipe) in file.recipes {
        book.insert(&name, recipe);
    }
    Ok(book)
}
