//! Test-only helpers for running recipes and writing recipe books.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tempfile::TempDir;

use crate::core::context::Context;
use crate::core::error::RunError;
use crate::core::recipe::Recipe;
use crate::engine::Engine;
use crate::io::status::Transcript;

/// Context holding only a beverage value.
pub fn coffee(value: &str) -> Context {
    Context {
        water: None,
        coffee: Some(value.to_string()),
    }
}

/// Run `recipe` with the built-in registry, capturing status lines.
pub fn run_recipe(recipe: &Recipe, initial: Context) -> (Result<Context, RunError>, Transcript) {
    let mut transcript = Transcript::new();
    let result = Engine::default().run(recipe, initial, &mut transcript);
    (result, transcript)
}

/// Temporary directory holding a `recipes.toml` with `contents`.
pub struct RecipeBookFixture {
    _temp: TempDir,
    pub path: PathBuf,
}

impl RecipeBookFixture {
    pub fn new(contents: &str) -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp dir")?;
        let path = temp.path().join("recipes.toml");
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(Self { _temp: temp, path })
    }
}
