//! Exit code constants for the litview CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Render failure (malformed template, unbound placeholder in strict mode)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Render failure: the template could not be rendered.
pub const RENDER_FAILURE: i32 = 2;
