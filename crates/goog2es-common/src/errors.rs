//! Fatal per-file failure conditions.
//!
//! Every error terminates the single file's transformation with no partial
//! output. The runner attaches the file path when reporting; the conditions
//! themselves stay path-agnostic so the transform remains a pure function of
//! (source, path, options).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// More than one `goog.module(...)` declaration in a file.
    #[error("goog.module already declared in this file as '{existing}'")]
    DuplicateDeclaration { existing: String },

    /// No `goog.module(...)` declaration found and tolerance is disabled.
    #[error("no goog.module declaration found in this file")]
    MissingModule,

    /// A `goog.require` declaration does not bind to a simple identifier.
    #[error("could not transform symbol '{symbol}'; destructuring is not supported")]
    UnsupportedBindingPattern { symbol: String },

    /// More than one `exports = ...` assignment in a file.
    #[error("already existing exports assignment in this file")]
    DuplicateExportAssignment,

    /// The source could not be split into top-level statements.
    #[error("parse error: {message}")]
    Parse { message: String },
}
