//! Typed state threaded through a recipe run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A context field that actions can require or produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Water,
    Coffee,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Water => "water",
            Field::Coffee => "coffee",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Beverage preparation state.
///
/// A field is present when it is `Some`, including `Some("")`. Actions move
/// the context by value and hand back the updated one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coffee: Option<String>,
}

impl Context {
    /// Starting context for an interactive run: an empty beverage, no water.
    pub fn fresh() -> Self {
        Self {
            water: None,
            coffee: Some(String::new()),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Water => self.water.as_deref(),
            Field::Coffee => self.coffee.as_deref(),
        }
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Fields currently present, in declaration order.
    pub fn present_fields(&self) -> Vec<Field> {
        [Field::Water, Field::Coffee]
            .into_iter()
            .filter(|field| self.has(*field))
            .collect()
    }
}
