//! Entry shim: locate the interpreter, run the delegate, report failures
//!
//! Control flow is strictly sequential:
//!
//! ```text
//! START -> CHECK_INTERPRETER -> MISSING -> report + pause -> exit 1
//!                            -> PRESENT -> RUN_LAUNCHER -> non-zero -> report + pause -> exit 1
//!                                                       -> zero -> exit 0
//! ```
//!
//! Nothing is retried and no alternate interpreter or script is tried.

use crate::config::{ConsoleSettings, LaunchConfig, resolve_base_dir};
use crate::exceptions::{Result, ShimError};
use crate::exit_codes::EXIT_SUCCESS;
use crate::messages::{Locale, Message};
use crate::utils::env_lookup;
use anyhow::Context;
use log::{debug, info, trace};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// The launcher shim for one configuration
#[derive(Debug)]
pub struct Shim {
    config: LaunchConfig,
}

impl Shim {
    /// Create a shim for `config`
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    /// Look the interpreter up on the search path
    pub fn probe_interpreter(&self) -> Result<PathBuf> {
        let search_path = self
            .config
            .search_path
            .clone()
            .or_else(|| env::var_os("PATH"));

        match which::which_in(
            &self.config.interpreter,
            search_path,
            &self.config.base_dir,
        ) {
            Ok(path) => {
                debug!(
                    "🔍 Resolved interpreter '{}' to '{}'",
                    self.config.interpreter,
                    path.display()
                );
                Ok(path)
            }
            Err(e) => {
                debug!(
                    "❌ Interpreter '{}' not found: {}",
                    self.config.interpreter, e
                );
                Err(ShimError::EnvironmentMissing {
                    interpreter: self.config.interpreter.clone(),
                })
            }
        }
    }

    /// Run the delegate script under `interpreter` and wait for it
    ///
    /// Standard streams are inherited, the working directory is always the
    /// base directory and nothing beyond the script path is passed.
    pub fn run_delegate(&self, interpreter: &Path) -> Result<()> {
        let mut cmd = Command::new(interpreter);
        cmd.arg(&self.config.script);
        cmd.current_dir(&self.config.base_dir);

        info!(
            "🚀 Spawning: {} {}",
            interpreter.display(),
            self.config.script.display()
        );
        trace!("  Working directory: {}", self.config.base_dir.display());

        let status = cmd.status().map_err(ShimError::Spawn)?;
        debug!("🏁 Delegate finished: {status}");

        if status.success() {
            Ok(())
        } else {
            Err(ShimError::DelegateFailed {
                code: status.code(),
            })
        }
    }

    /// Probe, then delegate
    pub fn run(&self) -> Result<()> {
        let interpreter = self.probe_interpreter()?;
        self.run_delegate(&interpreter)
    }

    /// Run and turn the outcome into an exit code, reporting failures on `console`
    pub fn execute<R: BufRead, W: Write>(&self, input: &mut R, console: &mut W) -> i32 {
        match self.run() {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                report_failure(&e, self.config.locale, self.config.pause, input, console);
                e.exit_code()
            }
        }
    }
}

/// Make `base_dir` the working directory of this process
pub fn enter_base_dir(base_dir: &Path) -> Result<()> {
    env::set_current_dir(base_dir)
        .with_context(|| format!("Failed to enter base directory {}", base_dir.display()))?;
    debug!("📂 Working directory set to {}", base_dir.display());
    Ok(())
}

/// Print the user-facing message for `err`, then pause if enabled
pub fn report_failure<R: BufRead, W: Write>(
    err: &ShimError,
    locale: Locale,
    pause: bool,
    input: &mut R,
    console: &mut W,
) {
    debug!("Reporting failure: {err}");

    let message = match err {
        ShimError::EnvironmentMissing { .. } => Message::InterpreterMissing,
        ShimError::DelegateFailed { .. } => Message::DelegateFailed,
        ShimError::Spawn(_) | ShimError::Config(_) | ShimError::IoError(_) => {
            // No dedicated message; show the cause before the generic guidance
            write_line(console, &err.to_string());
            Message::DelegateFailed
        }
    };
    write_line(console, message.text(locale));

    if pause {
        if let Err(e) = pause_for_acknowledgment(locale, input, console) {
            debug!("Pause interrupted: {e}");
        }
    }
}

fn write_line<W: Write>(console: &mut W, text: &str) {
    if let Err(e) = writeln!(console, "{text}") {
        debug!("Console write failed: {e}");
    }
}

/// Block until the user acknowledges by pressing Enter
///
/// The line read is discarded; end of input also ends the pause.
pub fn pause_for_acknowledgment<R: BufRead, W: Write>(
    locale: Locale,
    input: &mut R,
    console: &mut W,
) -> io::Result<()> {
    write!(console, "{}", Message::PausePrompt.text(locale))?;
    console.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Full shim run for the current process: resolve and enter the base
/// directory, then probe and delegate
pub fn launch<R: BufRead, W: Write>(input: &mut R, console: &mut W) -> i32 {
    let settings = ConsoleSettings::from_lookup(env_lookup);
    let config = resolve_base_dir()
        .map(|base_dir| LaunchConfig::from_lookup(base_dir, settings, env_lookup));
    launch_with(config, settings, input, console)
}

/// Enter the configured base directory and run the shim
///
/// `settings` drive the report when `config` could not be resolved.
pub fn launch_with<R: BufRead, W: Write>(
    config: Result<LaunchConfig>,
    settings: ConsoleSettings,
    input: &mut R,
    console: &mut W,
) -> i32 {
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            report_failure(&e, settings.locale, settings.pause(), input, console);
            return e.exit_code();
        }
    };

    if let Err(e) = enter_base_dir(&config.base_dir) {
        report_failure(&e, config.locale, config.pause, input, console);
        return e.exit_code();
    }

    Shim::new(config).execute(input, console)
}
