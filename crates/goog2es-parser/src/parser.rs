use goog2es_common::{TransformError, scan_leading_comments};

use crate::ast::Program;
use crate::classify::classify;
use crate::scanner::split_statements;

/// Parse one file into a `Program`.
///
/// Leading comments are captured onto the program itself before any
/// statement work happens, so later insertion or removal at position 0
/// cannot detach them.
pub fn parse(source: &str) -> Result<Program, TransformError> {
    let (leading_comments, code_start) = scan_leading_comments(source)?;
    let statements = split_statements(&source[code_start..])?;
    let body = statements.into_iter().map(classify).collect::<Vec<_>>();
    tracing::debug!(
        statements = body.len(),
        leading_comments = leading_comments.len(),
        "parsed source file"
    );
    Ok(Program::new(leading_comments, body))
}
