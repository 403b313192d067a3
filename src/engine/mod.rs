// ctxlog/src/engine/mod.rs
//
// The structured log engine: severity levels, bound-field maps, the
// `LogEngine` trait that every engine implementation satisfies, and the
// process-wide base engine accessor.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::errors::ConfigError;

mod args;
mod capture;
mod format;
mod json;

pub use args::{ErrorInfo, LogArgs};
pub use capture::{CaptureEngine, CapturedEntry};
pub use json::JsonEngine;

// Re-exported so callers (and the `bindings!` macro) build field values
// without naming serde_json themselves.
pub use serde_json::Value;

/// A map of bound fields attached to every entry logged through a handle.
pub type Bindings = serde_json::Map<String, Value>;

/// Shared, thread-safe handle to an engine instance.
pub type EngineHandle = Arc<dyn LogEngine>;

/// Reserved binding key for the application name.
pub const APP_KEY: &str = "_app";
/// Reserved binding key for the contextual module name.
pub const MODULE_KEY: &str = "_mod";
/// Reserved binding key for the contextual class or file name.
pub const CLASS_KEY: &str = "_cls";
/// Reserved binding key for the contextual function name.
pub const FUNCTION_KEY: &str = "_fun";
/// Reserved binding key for the event name.
pub const EVENT_KEY: &str = "_event";
/// Reserved key in child contexts: overrides the child's severity level.
pub const LEVEL_KEY: &str = "level";

/// Severity levels, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// Get the lowercase string representation of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            other => Err(ConfigError::InvalidValue(
                "level".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// Contract every log engine satisfies.
///
/// An engine carries a fixed set of bound fields and a minimum severity
/// level; `child` derives a new handle with additional bindings merged over
/// the receiver's (the receiver is never mutated). The engine alone
/// interprets [`LogArgs`] shapes; the façade performs no inspection.
pub trait LogEngine: Send + Sync {
    /// Accept one entry at the given severity.
    fn log(&self, level: Level, args: LogArgs);

    /// Derive a child handle with `bindings` merged over the receiver's
    /// bindings (child wins on key collision). The reserved `level` key, if
    /// present and parseable, overrides the child's severity level instead
    /// of becoming a bound field.
    fn child(&self, bindings: Bindings) -> EngineHandle;

    /// Snapshot of the handle's effective bound fields.
    fn bindings(&self) -> Bindings;

    /// Minimum severity this handle emits at.
    fn level(&self) -> Level;
}

lazy_static! {
    static ref BASE_ENGINE: EngineHandle = JsonEngine::new(crate::config::resolve());
}

/// Get the process-wide base engine.
///
/// Built on first access from defaults, the optional configuration file and
/// environment overrides (see [`crate::config::resolve`]); every later call
/// returns the same cached handle. Configuration failures degrade silently
/// to defaults, this never fails.
pub fn base_engine() -> EngineHandle {
    BASE_ENGINE.clone()
}

/// Merge `child` over `parent`, child wins on collision. Neither input map
/// is mutated in place; callers keep their own copies intact.
pub(crate) fn merge_bindings(parent: &Bindings, child: Bindings) -> Bindings {
    let mut merged = parent.clone();
    for (key, value) in child {
        merged.insert(key, value);
    }
    merged
}

/// Pull the reserved `level` override out of a child context, falling back
/// to `current` when absent or unparseable.
pub(crate) fn split_level_override(mut bindings: Bindings, current: Level) -> (Level, Bindings) {
    let level = bindings
        .remove(LEVEL_KEY)
        .and_then(|v| v.as_str().and_then(|s| s.parse().ok()))
        .unwrap_or(current);
    (level, bindings)
}
