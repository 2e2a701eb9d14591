//! Common types and utilities for the goog2es module rewriter.
//!
//! This crate provides the pieces shared by the parser, transform, and CLI:
//! - `Comment` / leading-comment extraction
//! - `TransformOptions` - per-file configuration
//! - `TransformError` - the fatal per-file failure conditions

pub mod comments;
pub mod errors;
pub mod options;

pub use comments::{Comment, scan_leading_comments};
pub use errors::TransformError;
pub use options::TransformOptions;
