// ctxlog/src/lib.rs
//
// Contextual structured-logging facade: a thin wrapper over a structured
// log engine, adding conventions for contextual bindings (module, class,
// function, event) and convenience call shapes.

// Export modules
pub mod config;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod macros;

// Re-export the main types at the root level
pub use engine::{
    base_engine, Bindings, CaptureEngine, CapturedEntry, EngineHandle, ErrorInfo, JsonEngine,
    Level, LogArgs, LogEngine, Value,
};
pub use logger::ContextLogger;

// The bindings! macro is exported at the crate root via #[macro_export];
// `use ctxlog::bindings;` works without going through the macros module.
