//! devconsole - In-process developer command console
//!
//! This crate re-exports all layers of the devconsole system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: devconsole_runtime    — Registry, console state machine, built-ins, terminal host
//! Layer 1: devconsole_parser     — Input line parsing
//! Layer 0: devconsole_foundation — Error types
//! ```

pub use devconsole_foundation as foundation;
pub use devconsole_parser as parser;
pub use devconsole_runtime as runtime;
