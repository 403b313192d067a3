// ctxlog/src/engine/json.rs
//
// The production engine: one JSON object per line (or a human-readable
// line in pretty mode) written to a shared writer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::format::{self, ResolvedArgs};
use super::{
    merge_bindings, split_level_override, Bindings, EngineHandle, Level, LogArgs, LogEngine, Value,
};
use crate::config::EngineConfig;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Writer-backed structured log engine.
///
/// Children derived via [`LogEngine::child`] share the writer and inherit
/// configuration and bindings.
pub struct JsonEngine {
    level: Level,
    pretty: bool,
    bindings: Bindings,
    out: SharedWriter,
}

impl JsonEngine {
    /// Create an engine writing to stdout.
    pub fn new(config: EngineConfig) -> Arc<Self> {
        Self::with_writer(config, Box::new(io::stdout()))
    }

    /// Create an engine writing to the supplied writer.
    pub fn with_writer(config: EngineConfig, writer: Box<dyn Write + Send>) -> Arc<Self> {
        Arc::new(JsonEngine {
            level: config.level,
            pretty: config.pretty_print,
            bindings: config.base,
            out: Arc::new(Mutex::new(writer)),
        })
    }

    fn render_json(&self, level: Level, resolved: ResolvedArgs) -> String {
        let mut entry = Bindings::new();
        entry.insert("level".to_string(), Value::from(level.as_str()));
        entry.insert(
            "time".to_string(),
            Value::from(Utc::now().timestamp_millis()),
        );
        for (key, value) in &self.bindings {
            entry.insert(key.clone(), value.clone());
        }
        for (key, value) in resolved.fields {
            entry.insert(key, value);
        }
        if let Some(error) = &resolved.error {
            entry.insert("type".to_string(), Value::from(error.kind.as_str()));
        }
        if let Some(message) = resolved.message {
            entry.insert("msg".to_string(), Value::from(message));
        }
        Value::Object(entry).to_string()
    }

    fn render_pretty(&self, level: Level, resolved: ResolvedArgs) -> String {
        let mut context = Vec::new();
        for (key, value) in self.bindings.iter().chain(resolved.fields.iter()) {
            context.push(format!("{}={}", key, format::render_value(value)));
        }
        if let Some(error) = &resolved.error {
            context.push(format!("type={}", error.kind));
        }
        let message = resolved.message.unwrap_or_default();
        let time = Utc::now().to_rfc3339();
        if context.is_empty() {
            format!("[{}] {}: {}", time, level.as_str().to_uppercase(), message)
        } else {
            format!(
                "[{}] {} ({}): {}",
                time,
                level.as_str().to_uppercase(),
                context.join(" "),
                message
            )
        }
    }
}

impl LogEngine for JsonEngine {
    fn log(&self, level: Level, args: LogArgs) {
        if level < self.level {
            return;
        }
        let resolved = format::resolve(args);
        let line = if self.pretty {
            self.render_pretty(level, resolved)
        } else {
            self.render_json(level, resolved)
        };
        // A logger must not panic the process; poisoned or failing writers
        // lose the entry and nothing more.
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(out, "{line}");
    }

    fn child(&self, bindings: Bindings) -> EngineHandle {
        let (level, bindings) = split_level_override(bindings, self.level);
        Arc::new(JsonEngine {
            level,
            pretty: self.pretty,
            bindings: merge_bindings(&self.bindings, bindings),
            out: self.out.clone(),
        })
    }

    fn bindings(&self) -> Bindings {
        self.bindings.clone()
    }

    fn level(&self) -> Level {
        self.level
    }
}
