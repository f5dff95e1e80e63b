//! Recipe and step types.
//!
//! A recipe is an ordered list of steps. A step names one action or a group of
//! actions. Groups read like a parallel fan-out but always run sequentially in
//! the listed order, so a group is equivalent to writing its members out as
//! single steps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of a recipe.
///
/// Serialized untagged: a string is `Single`, an array of strings is `Group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Single(String),
    Group(Vec<String>),
}

impl Step {
    pub fn single(name: &str) -> Self {
        Step::Single(name.to_string())
    }

    pub fn group(names: &[&str]) -> Self {
        Step::Group(names.iter().map(|name| name.to_string()).collect())
    }

    /// Action names of this step in execution order.
    pub fn names(&self) -> &[String] {
        match self {
            Step::Single(name) => std::slice::from_ref(name),
            Step::Group(names) => names,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Single(name) => f.write_str(name),
            Step::Group(names) => write!(f, "[{}]", names.join(", ")),
        }
    }
}

/// Ordered, immutable list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe {
    steps: Vec<Step>,
}

impl Recipe {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Every action name in execution order, with groups flattened.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .flat_map(|step| step.names().iter().map(String::as_str))
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.steps.iter().map(Step::to_string).collect();
        f.write_str(&rendered.join(", "))
    }
}

/// Five-step recipe: sugar only.
pub fn black() -> Recipe {
    Recipe::new(vec![
        Step::single("boil_water"),
        Step::single("brew_coffee"),
        Step::single("add_sugar"),
        Step::single("taste_test"),
        Step::single("enjoy"),
    ])
}

/// Like [`black`], with sugar and milk added as one group.
pub fn milk() -> Recipe {
    Recipe::new(vec![
        Step::single("boil_water"),
        Step::single("brew_coffee"),
        Step::group(&["add_sugar", "add_milk"]),
        Step::single("taste_test"),
        Step::single("enjoy"),
    ])
}
