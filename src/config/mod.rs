// ctxlog/src/config/mod.rs
//
// Engine configuration: statically-shaped defaults, an optional JSON
// configuration source, and environment overrides, resolved with the
// precedence defaults < file < environment. Resolution never fails; a
// missing or unreadable source degrades silently to defaults.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::engine::{Bindings, Level, Value, APP_KEY};
use crate::errors::ConfigError;

/// Environment variable overriding the minimum severity level.
pub const LEVEL_VAR: &str = "CTXLOG_LEVEL";
/// Environment variable overriding the human-readable-formatting flag.
pub const PRETTY_VAR: &str = "CTXLOG_PRETTY";
/// Environment variable overriding the application name.
pub const APP_NAME_VAR: &str = "CTXLOG_APP_NAME";
/// Environment variable pointing at the configuration file.
pub const CONFIG_PATH_VAR: &str = "CTXLOG_CONFIG_PATH";

const DEFAULT_CONFIG_PATH: &str = "config/default.json";

/// Final engine configuration handed to an engine constructor.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub level: Level,
    pub pretty_print: bool,
    /// Base bindings attached to every entry (the application name).
    pub base: Bindings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            level: Level::Info,
            pretty_print: false,
            base: Bindings::new(),
        }
    }
}

/// An optional external configuration source.
pub trait ConfigSource {
    fn has(&self, key: &str) -> bool;
    fn get(&self, key: &str) -> Option<Value>;
}

/// Configuration source backed by a JSON file with top-level keys.
pub struct JsonFileSource {
    root: Value,
}

impl JsonFileSource {
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::FileError(e.to_string()))?;
        let root =
            serde_json::from_str(&text).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(JsonFileSource { root })
    }

    /// Look for the configured (or default) file; `None` when it is absent
    /// or unreadable.
    pub fn discover(env: &HashMap<String, String>) -> Option<Self> {
        let path = env
            .get(CONFIG_PATH_VAR)
            .cloned()
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        Self::open(Path::new(&path)).ok()
    }
}

impl ConfigSource for JsonFileSource {
    fn has(&self, key: &str) -> bool {
        self.root.get(key).is_some()
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.root.get(key).cloned()
    }
}

/// The typed shape of a source's `logger` section. Unknown keys are
/// ignored; present fields overlay the defaults field-wise.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LoggerSection {
    level: Option<String>,
    pretty_print: Option<bool>,
}

/// Resolve the engine configuration from the real process environment and
/// the discovered configuration file.
pub fn resolve() -> EngineConfig {
    let env: HashMap<String, String> = std::env::vars().collect();
    let source = JsonFileSource::discover(&env);
    resolve_with(source.as_ref().map(|s| s as &dyn ConfigSource), &env)
}

/// Resolve against an injected source and environment map.
///
/// Precedence per field: defaults, then the source's `logger` section and
/// `appName` key, then the environment overrides. Invalid values at any
/// stage are ignored rather than surfaced. The application-name binding
/// always resolves: when nothing supplies one it falls back to the
/// process's invocation path, then its pid.
pub fn resolve_with(source: Option<&dyn ConfigSource>, env: &HashMap<String, String>) -> EngineConfig {
    let mut config = EngineConfig::default();

    if let Some(source) = source {
        if source.has("logger") {
            let section = source
                .get("logger")
                .and_then(|v| serde_json::from_value::<LoggerSection>(v).ok())
                .unwrap_or_default();
            if let Some(level) = section.level.and_then(|s| s.parse().ok()) {
                config.level = level;
            }
            if let Some(pretty) = section.pretty_print {
                config.pretty_print = pretty;
            }
        }
        if source.has("appName") {
            if let Some(name) = source.get("appName") {
                config.base.insert(APP_KEY.to_string(), name);
            }
        }
    }

    if let Some(level) = env.get(LEVEL_VAR).and_then(|s| s.parse().ok()) {
        config.level = level;
    }
    if let Some(flag) = env.get(PRETTY_VAR) {
        config.pretty_print = is_truthy(flag);
    }
    if let Some(name) = env.get(APP_NAME_VAR) {
        config
            .base
            .insert(APP_KEY.to_string(), Value::from(name.as_str()));
    }

    if !config.base.contains_key(APP_KEY) {
        config
            .base
            .insert(APP_KEY.to_string(), Value::from(invocation_name()));
    }

    config
}

fn is_truthy(flag: &str) -> bool {
    matches!(
        flag.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// The process's primary invocation identifier, or its pid when argv is
/// empty.
fn invocation_name() -> String {
    std::env::args()
        .next()
        .filter(|arg| !arg.is_empty())
        .unwrap_or_else(|| std::process::id().to_string())
}
