//! Source printer for the goog2es module rewriter.
//!
//! Serializes a `Program` back to JavaScript text. Raw statements and
//! captured comments are emitted byte-for-byte; synthesized statements print
//! with the single-quote string-literal convention.

mod printer;

pub use printer::{Printer, print};
