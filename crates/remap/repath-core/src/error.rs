//! Error surface for path parsing.
//!
//! The resolver itself has no failure path for well-formed inputs: every
//! binding yields exactly one `RemapOutcome`. Errors only arise when turning
//! untrusted strings into `NodePath` values.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("path '{path}' contains an empty component")]
    EmptyComponent { path: String },
}
