//! Launch configuration
//!
//! Everything is resolved once at startup from the executable location and
//! `PYLAUNCH_*` environment variables. Builder setters let callers override
//! individual fields without touching the process environment.

use crate::exceptions::Result;
use crate::messages::Locale;
use crate::utils::{env_lookup, is_var_true, var_non_empty};
use anyhow::Context;
use log::{debug, warn};
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Interpreter name searched on the path by default
pub const DEFAULT_INTERPRETER: &str = "python";

/// Delegate script run from the base directory by default
pub const DEFAULT_SCRIPT: &str = "launcher.py";

/// Interpreter name override
pub const ENV_PYTHON: &str = "PYLAUNCH_PYTHON";
/// Delegate script override
pub const ENV_SCRIPT: &str = "PYLAUNCH_SCRIPT";
/// Skip the failure pause when truthy
pub const ENV_NO_PAUSE: &str = "PYLAUNCH_NO_PAUSE";
/// Console message language
pub const ENV_LANG: &str = "PYLAUNCH_LANG";

/// Console behavior on failure
///
/// Resolved separately from [`LaunchConfig`] so a failure to build the
/// configuration itself is still reported with the requested locale and pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleSettings {
    /// Console message language
    pub locale: Locale,
    /// Skip the failure pause
    pub no_pause: bool,
}

impl ConsoleSettings {
    /// Read `PYLAUNCH_NO_PAUSE` and `PYLAUNCH_LANG` through `lookup`
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut settings = Self::default();
        if is_var_true(&lookup, ENV_NO_PAUSE) {
            debug!("⏭️ Failure pause disabled by {ENV_NO_PAUSE}");
            settings.no_pause = true;
        }
        if let Some(tag) = var_non_empty(&lookup, ENV_LANG) {
            match Locale::parse(&tag) {
                Some(locale) => settings.locale = locale,
                None => warn!("Unknown {ENV_LANG} value '{tag}', keeping default locale"),
            }
        }
        settings
    }

    /// Pause for acknowledgment on failure
    pub fn pause(&self) -> bool {
        !self.no_pause
    }
}

/// Resolved launch configuration
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Directory containing the shim; working directory of the delegate
    pub base_dir: PathBuf,
    /// Interpreter name looked up on the search path
    pub interpreter: String,
    /// Delegate script, relative to `base_dir`
    pub script: PathBuf,
    /// Search path override; `None` means the inherited `PATH`
    pub search_path: Option<OsString>,
    /// Pause for acknowledgment on failure
    pub pause: bool,
    /// Console message language
    pub locale: Locale,
}

impl LaunchConfig {
    /// Default configuration rooted at `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            interpreter: DEFAULT_INTERPRETER.to_string(),
            script: PathBuf::from(DEFAULT_SCRIPT),
            search_path: None,
            pause: true,
            locale: Locale::default(),
        }
    }

    /// Configuration for the running executable, with environment overrides applied
    pub fn from_env() -> Result<Self> {
        let console = ConsoleSettings::from_lookup(env_lookup);
        Ok(Self::from_lookup(resolve_base_dir()?, console, env_lookup))
    }

    /// Configuration rooted at `base_dir` with `PYLAUNCH_PYTHON` and
    /// `PYLAUNCH_SCRIPT` read through `lookup`; empty values keep the defaults
    pub fn from_lookup<P, F>(base_dir: P, console: ConsoleSettings, lookup: F) -> Self
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(base_dir)
            .with_pause(console.pause())
            .with_locale(console.locale);

        if let Some(interpreter) = var_non_empty(&lookup, ENV_PYTHON) {
            debug!("🐍 Interpreter override from {ENV_PYTHON}: {interpreter}");
            config.interpreter = interpreter;
        }
        if let Some(script) = var_non_empty(&lookup, ENV_SCRIPT) {
            debug!("📜 Script override from {ENV_SCRIPT}: {script}");
            config.script = PathBuf::from(script);
        }

        config
    }

    /// Override the interpreter name
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Override the delegate script
    pub fn with_script<P: AsRef<Path>>(mut self, script: P) -> Self {
        self.script = script.as_ref().to_path_buf();
        self
    }

    /// Search the given path list instead of the inherited `PATH`
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    /// Enable or disable the failure pause
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Set the console language
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Directory containing the running executable
///
/// The path is used as reported by the OS, without canonicalizing: on Windows
/// that would yield a `\\?\` verbatim path, which `cmd.exe` refuses as a
/// working directory.
pub fn resolve_base_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to get executable path")?;
    let base_dir = exe
        .parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable path {} has no parent directory", exe.display()))?;
    debug!("📍 Base directory: {}", base_dir.display());
    Ok(base_dir)
}
