//! Core types shared by every devconsole layer.
//!
//! This crate provides:
//! - [`Error`] - The error type returned by commands and the registry
//! - [`ErrorKind`] - Categorized error kinds for pattern matching
//! - [`Result`] - Alias over [`std::result::Result`] with [`Error`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorKind, Result};
