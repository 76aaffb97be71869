//! pylaunch - double-click launcher shim for a Python application
//!
//! Resolves its own directory, checks that a Python interpreter is on the
//! search path, runs `launcher.py` from that directory and pauses on failure
//! so the error stays readable in a console window opened by double-click.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,
)]
#![warn(
    // Documentation
    missing_docs,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::needless_continue,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod messages;
pub mod shim;
pub mod utils;
pub mod version;

pub use config::{ConsoleSettings, LaunchConfig};
pub use exceptions::ShimError;
pub use messages::{Locale, Message};
pub use shim::{Shim, launch, launch_with, pause_for_acknowledgment};
