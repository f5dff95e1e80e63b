//! I/O helpers for brew commands.

pub mod prompt;
pub mod recipe_book;
pub mod status;
