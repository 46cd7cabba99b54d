//! Sparrow sample benchmark — Rust rewrite.
//!
//! The original sample defines `foo`, a recursive `fib`, and a key/value
//! `sum`, then times a ten-million-element `loop(1, N, 1)` with `msec()`.
//! The library holds those pieces; the `sparrow-bench` binary wires them to
//! the command line and an optional rc file.

pub mod builtins;
pub mod cli;
pub mod config;
pub mod diag;
pub mod range;
pub mod script;
pub mod value;

// Re-exports for convenience.
pub use range::{KeyValues, Loop};
pub use script::{fib, foo, sum, Report, ScriptParams};
pub use value::Value;
