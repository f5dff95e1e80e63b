//! Pre-run recipe checks not enforced by the runner itself.

use std::collections::BTreeSet;

use crate::core::context::Field;
use crate::core::recipe::Recipe;
use crate::registry::Registry;

/// Check a recipe against the registry before running it:
/// - Every action name resolves
/// - Every required field is present initially or produced by an earlier step
///
/// Returns problems in recipe order; empty means the recipe can run to
/// completion from a context holding `available`.
pub fn validate_recipe(registry: &Registry, recipe: &Recipe, available: &[Field]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut fields: BTreeSet<Field> = available.iter().copied().collect();

    for (position, name) in recipe.action_names().enumerate() {
        let action = match registry.resolve(name) {
            Ok(action) => action,
            Err(err) => {
                errors.push(format!("step {}: {}", position + 1, err));
                continue;
            }
        };
        for field in action.requires() {
            if !fields.contains(field) {
                errors.push(format!(
                    "step {}: {} requires '{}' which no earlier step sets",
                    position + 1,
                    name,
                    field
                ));
            }
        }
        fields.extend(action.produces().iter().copied());
    }

    errors
}
