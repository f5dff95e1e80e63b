//! Stable exit codes for brew CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to I/O, an invalid recipe book, or failed checks.
pub const INVALID: i32 = 1;
/// Unknown recipe choice or action name.
pub const LOOKUP: i32 = 2;
/// An action required a context field that was never set.
pub const MISSING_FIELD: i32 = 3;
