//! Input parsing for the developer console.
//!
//! Turns a submitted line like `"help clear"` into a command token and its
//! parameters. There is no quoting or escaping: the trimmed line is split on
//! single spaces and nothing else.
//!
//! ```text
//! "  echo hello  world "
//!          │ trim
//!          ▼
//! "echo hello  world"
//!          │ split(' ')
//!          ▼
//! command: "echo", parameters: ["hello", "", "world"]
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert a raw line into a [`ParsedInput`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod tokenizer;

pub use tokenizer::{InputParser, ParsedInput};
