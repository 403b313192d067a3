// ctxlog/src/engine/capture.rs
//
// An in-memory engine recording fully-resolved entries. Used by the test
// suites and by callers who inject a fake engine instead of relying on the
// process-wide one.

use std::sync::{Arc, Mutex};

use super::format;
use super::{
    merge_bindings, split_level_override, Bindings, EngineHandle, ErrorInfo, Level, LogArgs,
    LogEngine,
};

/// One accepted log entry, with bindings and message already resolved.
#[derive(Debug, Clone)]
pub struct CapturedEntry {
    pub level: Level,
    /// The handle's bound fields at the time of the call.
    pub bindings: Bindings,
    /// Payload fields from the call itself.
    pub fields: Bindings,
    /// Interpolated message, if the shape carried one.
    pub message: Option<String>,
    pub error: Option<ErrorInfo>,
}

type SharedSink = Arc<Mutex<Vec<CapturedEntry>>>;

/// Engine that records entries instead of writing them anywhere.
///
/// All children derived from a capture engine share its sink, so a single
/// `entries()` call observes everything logged through the family.
pub struct CaptureEngine {
    level: Level,
    bindings: Bindings,
    sink: SharedSink,
}

impl CaptureEngine {
    pub fn new(level: Level) -> Arc<Self> {
        Self::with_bindings(level, Bindings::new())
    }

    pub fn with_bindings(level: Level, bindings: Bindings) -> Arc<Self> {
        Arc::new(CaptureEngine {
            level,
            bindings,
            sink: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Snapshot of every entry accepted so far, in order.
    pub fn entries(&self) -> Vec<CapturedEntry> {
        match self.sink.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl LogEngine for CaptureEngine {
    fn log(&self, level: Level, args: LogArgs) {
        if level < self.level {
            return;
        }
        let resolved = format::resolve(args);
        let entry = CapturedEntry {
            level,
            bindings: self.bindings.clone(),
            fields: resolved.fields,
            message: resolved.message,
            error: resolved.error,
        };
        match self.sink.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }

    fn child(&self, bindings: Bindings) -> EngineHandle {
        let (level, bindings) = split_level_override(bindings, self.level);
        Arc::new(CaptureEngine {
            level,
            bindings: merge_bindings(&self.bindings, bindings),
            sink: self.sink.clone(),
        })
    }

    fn bindings(&self) -> Bindings {
        self.bindings.clone()
    }

    fn level(&self) -> Level {
        self.level
    }
}
