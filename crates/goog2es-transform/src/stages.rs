//! The rewriting pipeline stages.
//!
//! Each stage is a pure function taking the program by value and returning
//! the edited program. Stage order is fixed by data flow: the module symbol
//! extracted here feeds require resolution, and the export append must come
//! after every other statement mutation so it lands at the end of the body.

use goog2es_common::{Comment, TransformError};
use goog2es_parser::{Program, Statement, VarKind};

use crate::resolve::symbol_to_relative_path;

const EXPORTS_BINDING: &str = "exports";

/// Drop every `goog.module.declareLegacyNamespace()` call.
pub(crate) fn strip_legacy_namespace(mut program: Program) -> Program {
    program
        .body
        .retain(|stmt| !matches!(stmt, Statement::DeclareLegacyNamespace));
    program
}

/// Find and remove the `goog.module(...)` declaration.
///
/// Returns the declared symbol, or `None` when the file has no declaration.
/// A second declaration anywhere in the file is fatal: module identity must
/// be unambiguous.
pub(crate) fn extract_module_symbol(
    program: Program,
) -> Result<(Program, Option<String>), TransformError> {
    let mut found: Option<String> = None;
    let mut body = Vec::with_capacity(program.body.len());

    for stmt in program.body {
        match stmt {
            Statement::ModuleDecl { symbol } => {
                if let Some(existing) = found {
                    return Err(TransformError::DuplicateDeclaration { existing });
                }
                found = Some(symbol);
            }
            other => body.push(other),
        }
    }

    Ok((
        Program {
            leading_comments: program.leading_comments,
            body,
        },
        found,
    ))
}

/// Replace each `goog.require` binding with a default import.
///
/// The specifier is resolved relative to `base_symbol`, the current module's
/// own dotted symbol (or the placeholder in tolerant mode).
pub(crate) fn rewrite_requires(
    program: Program,
    base_symbol: &str,
) -> Result<Program, TransformError> {
    let mut body = Vec::with_capacity(program.body.len());

    for stmt in program.body {
        match stmt {
            Statement::RequireBinding { name, symbol, .. } => {
                let Some(name) = name else {
                    return Err(TransformError::UnsupportedBindingPattern { symbol });
                };
                let specifier = symbol_to_relative_path(base_symbol, &symbol);
                tracing::trace!(%symbol, %specifier, "rewrote require");
                body.push(Statement::Import { name, specifier });
            }
            other => body.push(other),
        }
    }

    Ok(Program {
        leading_comments: program.leading_comments,
        body,
    })
}

/// Rewrite the exports assignment and append the default export.
///
/// Value case: `exports = <rhs>;` becomes `const exports = <rhs>;`.
/// Namespace case (no assignment): `let exports = {};` is prepended so any
/// `exports.foo = ...` augmentation statements keep working. Either way
/// exactly one `export default exports;` is appended, last.
pub(crate) fn rewrite_exports(program: Program) -> Result<Program, TransformError> {
    let mut found_assignment = false;
    let mut body = Vec::with_capacity(program.body.len() + 2);

    for stmt in program.body {
        match stmt {
            Statement::ExportsAssignment { rhs } => {
                if found_assignment {
                    return Err(TransformError::DuplicateExportAssignment);
                }
                found_assignment = true;
                body.push(Statement::VarDecl {
                    kind: VarKind::Const,
                    name: EXPORTS_BINDING.to_string(),
                    init: rhs,
                });
            }
            other => body.push(other),
        }
    }

    if !found_assignment {
        body.insert(
            0,
            Statement::VarDecl {
                kind: VarKind::Let,
                name: EXPORTS_BINDING.to_string(),
                init: "{}".to_string(),
            },
        );
    }
    body.push(Statement::ExportDefault {
        name: EXPORTS_BINDING.to_string(),
    });

    Ok(Program {
        leading_comments: program.leading_comments,
        body,
    })
}

/// Prepend a `@module` doc comment for files under the source root.
///
/// The module name is the file path with the root prefix and the `.js`
/// extension stripped. Restored leading comments follow the doc comment.
pub(crate) fn attach_module_doc(mut program: Program, path: &str, source_root: &str) -> Program {
    let path = path.strip_prefix("./").unwrap_or(path);
    let Some(below_root) = path
        .strip_prefix(source_root)
        .and_then(|rest| rest.strip_prefix('/'))
    else {
        return program;
    };
    let module_name = below_root.strip_suffix(".js").unwrap_or(below_root);
    program
        .leading_comments
        .insert(0, Comment::module_doc(module_name));
    program
}
