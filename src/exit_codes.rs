//! Exit codes for the pylaunch binary
//!
//! The shim contract only distinguishes success from failure; every
//! reported failure exits with `EXIT_ERROR`.

/// Successful execution (delegate exited 0)
pub const EXIT_SUCCESS: i32 = 0;

/// Interpreter missing, delegate failed, or the shim could not start it
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;
