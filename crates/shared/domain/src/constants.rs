//! Domain-level constants.

// =============================================================================
// Entity kinds
// =============================================================================

/// Kind name used in errors and logs for users
pub const USER_KIND: &str = "user";

/// Kind name used in errors and logs for todos
pub const TODO_KIND: &str = "todo";
