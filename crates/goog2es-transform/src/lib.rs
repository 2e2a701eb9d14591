//! goog.module to ES module rewriting.
//!
//! Rewrites one file at a time from the legacy Closure module convention
//!
//! ```text
//! goog.module('a.b.C');
//! const D = goog.require('a.b.D');
//! exports = D;
//! ```
//!
//! to standard module syntax
//!
//! ```text
//! import D from './D';
//! const exports = D;
//! export default exports;
//! ```
//!
//! The rewrite runs as a fixed sequence of pure stages: strip the legacy
//! namespace marker, extract the module's own symbol, resolve each require
//! to a relative import, rewrite the exports assignment, then restore the
//! file's leading comments and attach the `@module` doc comment. The order
//! matters: require resolution needs the module symbol, and the export
//! append must come after all other statement edits.
//!
//! Everything is file-local and synchronous; a runner may process many
//! files in parallel with no coordination.

mod resolve;
mod stages;

use goog2es_common::{TransformError, TransformOptions};
use goog2es_parser::Program;

pub use resolve::symbol_to_relative_path;

/// Substitute module symbol used when a file has no `goog.module`
/// declaration and tolerant mode is enabled. Keeps require resolution
/// functioning; no export statements are synthesized in that case.
pub const PLACEHOLDER_MODULE_SYMBOL: &str = "a.fake.symbol.since.there.is.no.module.in.this.file";

/// Rewrite a parsed program in place of its legacy constructs.
///
/// `path` is the file's path relative to the project root, used only for
/// the `@module` doc comment. Fails with a `TransformError` condition on
/// the first violated invariant; no partial output is produced.
pub fn rewrite_program(
    program: Program,
    path: &str,
    options: &TransformOptions,
) -> Result<Program, TransformError> {
    let program = stages::strip_legacy_namespace(program);
    let (program, declared) = stages::extract_module_symbol(program)?;

    let (base_symbol, synthesize_export) = match declared {
        Some(symbol) => (symbol, true),
        None if options.allow_no_goog_module => {
            tracing::debug!(path, "no goog.module declaration; using placeholder symbol");
            (PLACEHOLDER_MODULE_SYMBOL.to_string(), false)
        }
        None => return Err(TransformError::MissingModule),
    };

    let program = stages::rewrite_requires(program, &base_symbol)?;
    let program = if synthesize_export {
        stages::rewrite_exports(program)?
    } else {
        program
    };

    Ok(stages::attach_module_doc(
        program,
        path,
        &options.source_root,
    ))
}

/// Parse, rewrite, and print one file's source text.
pub fn transform(
    source: &str,
    path: &str,
    options: &TransformOptions,
) -> Result<String, TransformError> {
    let _span = tracing::debug_span!("transform", path).entered();
    let program = goog2es_parser::parse(source)?;
    let program = rewrite_program(program, path, options)?;
    Ok(goog2es_emitter::print(&program))
}
