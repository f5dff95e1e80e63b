//! Error taxonomy for recipe runs.
//!
//! Both kinds are fatal: a run stops at the first one and nothing is retried.

use thiserror::Error;

use crate::core::context::Field;

/// A name that is not in the registry or the recipe book.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown action name: {0}")]
    Action(String),

    #[error("unknown recipe choice: {0}")]
    Recipe(String),
}

/// An action read a context field that no earlier step set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("action {action} requires field '{field}' but it is not set")]
pub struct MissingFieldError {
    pub action: String,
    pub field: Field,
}

/// Failure of a recipe run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

pub type Result<T> = std::result::Result<T, RunError>;
