// ctxlog/src/macros/mod.rs
//
// Convenience macros for building bound-field maps.

mod bindings_macros;
