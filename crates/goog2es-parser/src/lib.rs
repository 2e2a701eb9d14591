//! Shallow JavaScript statement parser for the goog2es module rewriter.
//!
//! The rewriter only needs to recognize four legacy statement shapes
//! (`goog.module(...)`, `goog.module.declareLegacyNamespace()`,
//! `const X = goog.require(...)`, `exports = ...`); everything else must
//! round-trip unchanged. So instead of a full expression grammar, this crate
//! splits the top level into statements and classifies each one once:
//! - `scanner` - byte-level statement boundary detection
//! - `classify` - token-head matching against the legacy shapes
//! - `ast` - the `Program` / `Statement` tree the transform mutates

pub mod ast;
pub mod classify;
pub mod scanner;

mod parser;

pub use ast::{Program, Statement, VarKind};
pub use parser::parse;
