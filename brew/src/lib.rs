//! Sequential recipe runner.
//!
//! A fixed registry of named actions transforms a typed [`Context`](crate::core::context::Context);
//! the [`engine`] walks a recipe whose steps name one action or a group of
//! actions, running every name strictly in order.
//!
//! - **[`core`]**: Pure, deterministic types and checks (context, recipes,
//!   errors, pre-run validation). No I/O.
//! - **[`io`]**: Status output, the interactive prompt, and recipe book files.
//!
//! [`registry`], [`actions`], [`engine`] and [`select`] coordinate the two to
//! implement the CLI commands.

pub mod actions;
pub mod core;
pub mod engine;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod registry;
pub mod select;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
