//! Command-line runner for the goog2es module rewriter.
//!
//! Discovers `.js` files, runs the per-file transform in parallel (each
//! invocation owns its own tree, so no coordination is needed), and reports
//! failing files individually without stopping the run.

pub mod args;
pub mod driver;
