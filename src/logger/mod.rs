// ctxlog/src/logger/mod.rs
//
// The public façade: an immutable wrapper around one engine handle with
// conventions for module/class/function/event bindings. Every operation
// forwards (or derives an ephemeral child and forwards); the wrapper holds
// no state beyond the handle.

use crate::engine::{
    base_engine, Bindings, EngineHandle, ErrorInfo, Level, LogArgs, Value, CLASS_KEY, EVENT_KEY,
    FUNCTION_KEY, MODULE_KEY,
};

/// A contextual logger bound to an engine handle.
///
/// Obtain one with [`ContextLogger::get_context_logger`] (process-wide
/// engine) or [`ContextLogger::with_engine`] (injected engine), then call
/// the leveled methods directly or derive scoped variants.
#[derive(Clone)]
pub struct ContextLogger {
    core: EngineHandle,
}

impl ContextLogger {
    /// Get a contextual logger over the process-wide base engine, bound to
    /// an optional module name (`_mod`) and class or file name (`_cls`).
    pub fn get_context_logger(module_name: Option<&str>, class_name: Option<&str>) -> Self {
        Self::with_engine(base_engine(), module_name, class_name)
    }

    /// Same as [`get_context_logger`](Self::get_context_logger), over a
    /// caller-supplied engine. This is the seam for injecting fakes.
    pub fn with_engine(
        engine: EngineHandle,
        module_name: Option<&str>,
        class_name: Option<&str>,
    ) -> Self {
        let mut bindings = Bindings::new();
        if let Some(module) = module_name {
            bindings.insert(MODULE_KEY.to_string(), Value::from(module));
        }
        if let Some(class) = class_name {
            bindings.insert(CLASS_KEY.to_string(), Value::from(class));
        }
        ContextLogger {
            core: engine.child(bindings),
        }
    }

    /// Log a fatal level entry.
    pub fn fatal(&self, args: impl Into<LogArgs>) {
        self.core.log(Level::Fatal, args.into());
    }

    /// Log a fatal level entry in a function context (`_fun`).
    pub fn fatal_f(&self, function_name: &str, args: impl Into<LogArgs>) {
        self.function_child(function_name).log(Level::Fatal, args.into());
    }

    /// Log an error level entry.
    pub fn error(&self, args: impl Into<LogArgs>) {
        self.core.log(Level::Error, args.into());
    }

    /// Log an error level entry in a function context (`_fun`).
    pub fn error_f(&self, function_name: &str, args: impl Into<LogArgs>) {
        self.function_child(function_name).log(Level::Error, args.into());
    }

    /// Log a warning level entry.
    pub fn warn(&self, args: impl Into<LogArgs>) {
        self.core.log(Level::Warn, args.into());
    }

    /// Log a warning level entry in a function context (`_fun`).
    pub fn warn_f(&self, function_name: &str, args: impl Into<LogArgs>) {
        self.function_child(function_name).log(Level::Warn, args.into());
    }

    /// Log an informational level entry.
    pub fn info(&self, args: impl Into<LogArgs>) {
        self.core.log(Level::Info, args.into());
    }

    /// Log an informational level entry in a function context (`_fun`).
    pub fn info_f(&self, function_name: &str, args: impl Into<LogArgs>) {
        self.function_child(function_name).log(Level::Info, args.into());
    }

    /// Log a debug level entry.
    pub fn debug(&self, args: impl Into<LogArgs>) {
        self.core.log(Level::Debug, args.into());
    }

    /// Log a debug level entry in a function context (`_fun`).
    pub fn debug_f(&self, function_name: &str, args: impl Into<LogArgs>) {
        self.function_child(function_name).log(Level::Debug, args.into());
    }

    /// Log a trace level entry.
    pub fn trace(&self, args: impl Into<LogArgs>) {
        self.core.log(Level::Trace, args.into());
    }

    /// Log a trace level entry in a function context (`_fun`).
    pub fn trace_f(&self, function_name: &str, args: impl Into<LogArgs>) {
        self.function_child(function_name).log(Level::Trace, args.into());
    }

    /// Log an event at informational level. The event name is bound under
    /// the `_event` key for this entry only.
    pub fn event(&self, event_name: &str, args: impl Into<LogArgs>) {
        let mut bindings = Bindings::new();
        bindings.insert(EVENT_KEY.to_string(), Value::from(event_name));
        self.core.child(bindings).log(Level::Info, args.into());
    }

    /// Log an event at informational level in a function context. Binds
    /// both `_fun` and `_event` for this entry only.
    pub fn event_f(&self, function_name: &str, event_name: &str, args: impl Into<LogArgs>) {
        let mut bindings = Bindings::new();
        bindings.insert(FUNCTION_KEY.to_string(), Value::from(function_name));
        bindings.insert(EVENT_KEY.to_string(), Value::from(event_name));
        self.core.child(bindings).log(Level::Info, args.into());
    }

    /// Log an error-level entry if the assertion fails (`check` is false).
    ///
    /// Returns `false` when the assertion holds and nothing is emitted —
    /// note the inversion from conventional assert semantics; long-standing
    /// callers depend on it. The failing branch returns `true`, but only
    /// the holding branch's value is part of the contract.
    pub fn assert(&self, check: bool) -> bool {
        if check {
            return false;
        }
        self.core
            .log(Level::Error, LogArgs::failure(assertion_error()));
        true
    }

    /// Like [`assert`](Self::assert), attaching a message to the failure
    /// entry. Only the message portion of `message` is used; payload
    /// fields, if any, are the engine's concern elsewhere.
    pub fn assert_msg(&self, check: bool, message: impl Into<LogArgs>) -> bool {
        if check {
            return false;
        }
        let (message, params) = match message.into() {
            LogArgs::Message { template, params } => (Some(template), params),
            LogArgs::Payload {
                message, params, ..
            } => (message, params),
            LogArgs::Failure {
                error,
                message,
                params,
            } => (message.or(Some(error.message)), params),
        };
        let args = match message {
            Some(message) => LogArgs::failure_format(assertion_error(), message, params),
            None => LogArgs::failure(assertion_error()),
        };
        self.core.log(Level::Error, args);
        true
    }

    /// Get the underlying engine handle for direct use. Callers bypassing
    /// the façade take on the binding conventions themselves.
    pub fn get_core_logger(&self) -> EngineHandle {
        self.core.clone()
    }

    /// Get a child logger whose bindings are `child_context` merged over
    /// this logger's bindings. The receiver is unaffected. The reserved
    /// `level` key overrides the child's severity.
    pub fn get_child_logger(&self, child_context: Bindings) -> ContextLogger {
        ContextLogger {
            core: self.core.child(child_context),
        }
    }

    fn function_child(&self, function_name: &str) -> EngineHandle {
        let mut bindings = Bindings::new();
        bindings.insert(FUNCTION_KEY.to_string(), Value::from(function_name));
        self.core.child(bindings)
    }
}

fn assertion_error() -> ErrorInfo {
    ErrorInfo::new("Error", "Assertion failed!")
}
