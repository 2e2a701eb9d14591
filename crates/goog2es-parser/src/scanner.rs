//! Byte-level statement boundary detection.
//!
//! Splits the top level of a file into statements without building an
//! expression tree. A statement ends at a `;` at bracket depth zero, or at
//! the depth-zero `}` that closes a brace-bodied form (`function`, `class`,
//! `if`, `for`, `while`, `switch`, `try`, a bare block). Strings, template
//! literals, and comments are skipped so their contents never count toward
//! depth.
//!
//! Not supported: automatic semicolon insertion and top-level regex literals
//! containing `;` or brackets. Files relying on either are outside the
//! legacy-module subset this tool rewrites.

use goog2es_common::TransformError;
use memchr::memchr;

fn parse_err(message: &str) -> TransformError {
    TransformError::Parse {
        message: message.to_string(),
    }
}

/// Split `code` into top-level statement slices.
///
/// Each slice is trimmed of surrounding whitespace; empty statements (stray
/// semicolons) are dropped. Comments between statements attach to the
/// following statement's slice.
pub fn split_statements(code: &str) -> Result<Vec<&str>, TransformError> {
    let bytes = code.as_bytes();
    let len = bytes.len();
    let mut statements = Vec::new();
    let mut pos = 0;

    while pos < len {
        // Skip inter-statement whitespace.
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= len {
            break;
        }

        let start = pos;
        let brace_terminated = is_brace_terminated(code, start);
        let mut depth: usize = 0;

        while pos < len {
            match bytes[pos] {
                b'/' if pos + 1 < len && bytes[pos + 1] == b'/' => {
                    pos = skip_line_comment(bytes, pos);
                }
                b'/' if pos + 1 < len && bytes[pos + 1] == b'*' => {
                    pos = skip_block_comment(bytes, pos)?;
                }
                b'\'' | b'"' => {
                    pos = skip_string(bytes, pos)?;
                }
                b'`' => {
                    pos = skip_template(bytes, pos)?;
                }
                b'(' | b'[' | b'{' => {
                    depth += 1;
                    pos += 1;
                }
                b')' | b']' | b'}' => {
                    let closer = bytes[pos];
                    if depth == 0 {
                        return Err(parse_err("unbalanced bracket at top level"));
                    }
                    depth -= 1;
                    pos += 1;
                    if depth == 0 && closer == b'}' && brace_terminated {
                        if continues_after_brace(code, pos) {
                            continue;
                        }
                        pos = swallow_semicolon(bytes, pos);
                        break;
                    }
                }
                b';' if depth == 0 => {
                    pos += 1;
                    break;
                }
                _ => {
                    pos += 1;
                }
            }
        }

        if depth > 0 {
            return Err(parse_err("unbalanced bracket at end of file"));
        }

        let stmt = code[start..pos].trim();
        if !stmt.is_empty() && stmt != ";" {
            statements.push(stmt);
        }
    }

    Ok(statements)
}

fn skip_line_comment(bytes: &[u8], pos: usize) -> usize {
    match memchr(b'\n', &bytes[pos..]) {
        Some(off) => pos + off + 1,
        None => bytes.len(),
    }
}

fn skip_block_comment(bytes: &[u8], mut pos: usize) -> Result<usize, TransformError> {
    pos += 2;
    while pos + 1 < bytes.len() {
        if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
            return Ok(pos + 2);
        }
        pos += 1;
    }
    Err(parse_err("unterminated block comment"))
}

fn skip_string(bytes: &[u8], mut pos: usize) -> Result<usize, TransformError> {
    let quote = bytes[pos];
    pos += 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'\n' => break,
            b if b == quote => return Ok(pos + 1),
            _ => pos += 1,
        }
    }
    Err(parse_err("unterminated string literal"))
}

fn skip_template(bytes: &[u8], mut pos: usize) -> Result<usize, TransformError> {
    pos += 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'`' => return Ok(pos + 1),
            b'$' if pos + 1 < bytes.len() && bytes[pos + 1] == b'{' => {
                pos = skip_template_expression(bytes, pos + 2)?;
            }
            _ => pos += 1,
        }
    }
    Err(parse_err("unterminated template literal"))
}

/// Skip a `${ ... }` substitution body; `pos` is just past the `{`.
fn skip_template_expression(bytes: &[u8], mut pos: usize) -> Result<usize, TransformError> {
    let mut depth: usize = 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'/' if pos + 1 < bytes.len() && bytes[pos + 1] == b'/' => {
                pos = skip_line_comment(bytes, pos);
            }
            b'/' if pos + 1 < bytes.len() && bytes[pos + 1] == b'*' => {
                pos = skip_block_comment(bytes, pos)?;
            }
            b'\'' | b'"' => {
                pos = skip_string(bytes, pos)?;
            }
            b'`' => {
                pos = skip_template(bytes, pos)?;
            }
            b'{' => {
                depth += 1;
                pos += 1;
            }
            b'}' => {
                depth -= 1;
                pos += 1;
                if depth == 0 {
                    return Ok(pos);
                }
            }
            _ => pos += 1,
        }
    }
    Err(parse_err("unterminated template substitution"))
}

/// Consume an immediate trailing `;` after a brace-terminated statement.
fn swallow_semicolon(bytes: &[u8], mut pos: usize) -> usize {
    let mut probe = pos;
    while probe < bytes.len() && (bytes[probe] == b' ' || bytes[probe] == b'\t') {
        probe += 1;
    }
    if probe < bytes.len() && bytes[probe] == b';' {
        pos = probe + 1;
    }
    pos
}

/// Whether a depth-zero `}` is followed by a clause keyword that keeps the
/// statement going (`else`, `catch`, `finally`).
fn continues_after_brace(code: &str, pos: usize) -> bool {
    matches!(
        leading_keywords(code, pos).first(),
        Some(&"else") | Some(&"catch") | Some(&"finally")
    )
}

/// Whether the statement starting at `start` ends at its closing `}` rather
/// than at a semicolon.
fn is_brace_terminated(code: &str, start: usize) -> bool {
    let keywords = leading_keywords(code, start);
    let Some(&first) = keywords.first() else {
        // A bare block statement.
        return code.as_bytes().get(start) == Some(&b'{');
    };
    match first {
        "function" | "class" | "if" | "for" | "while" | "switch" | "try" => true,
        "async" => keywords.get(1) == Some(&"function"),
        "export" => match keywords.get(1) {
            Some(&"function") | Some(&"class") => true,
            Some(&"async") | Some(&"default") => {
                matches!(keywords.get(2), Some(&"function") | Some(&"class"))
            }
            _ => false,
        },
        _ => false,
    }
}

/// Up to three leading identifier tokens, skipping trivia.
fn leading_keywords(code: &str, start: usize) -> Vec<&str> {
    let bytes = code.as_bytes();
    let mut keywords = Vec::new();
    let mut pos = start;

    while pos < bytes.len() && keywords.len() < 3 {
        let b = bytes[pos];
        if b.is_ascii_whitespace() {
            pos += 1;
        } else if b == b'/' && pos + 1 < bytes.len() && bytes[pos + 1] == b'/' {
            pos = skip_line_comment(bytes, pos);
        } else if b == b'/' && pos + 1 < bytes.len() && bytes[pos + 1] == b'*' {
            match skip_block_comment(bytes, pos) {
                Ok(next) => pos = next,
                Err(_) => break,
            }
        } else if b.is_ascii_alphabetic() || b == b'_' || b == b'$' {
            let word_start = pos;
            while pos < bytes.len() && is_ident_byte(bytes[pos]) {
                pos += 1;
            }
            keywords.push(&code[word_start..pos]);
        } else {
            break;
        }
    }

    keywords
}

pub(crate) fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_semicolons() {
        let stmts = split_statements("const a = 1;\nconst b = 2;").unwrap();
        assert_eq!(stmts, vec!["const a = 1;", "const b = 2;"]);
    }

    #[test]
    fn semicolon_inside_string_does_not_split() {
        let stmts = split_statements("const a = 'x; y';").unwrap();
        assert_eq!(stmts, vec!["const a = 'x; y';"]);
    }

    #[test]
    fn semicolon_inside_template_expression_does_not_split() {
        let stmts = split_statements("const a = `v=${f(';')}`;").unwrap();
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn function_declaration_ends_at_closing_brace() {
        let source = "function f() {\n  return 1;\n}\nconst x = f();";
        let stmts = split_statements(source).unwrap();
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].starts_with("function f()"));
        assert_eq!(stmts[1], "const x = f();");
    }

    #[test]
    fn class_with_trailing_semicolon_is_one_statement() {
        let stmts = split_statements("class A {};\nlet b;").unwrap();
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0], "class A {};");
    }

    #[test]
    fn object_literal_statement_waits_for_semicolon() {
        let stmts = split_statements("const o = {\n  a: 1,\n};\nlet z;").unwrap();
        assert_eq!(stmts.len(), 2);
    }

    #[test]
    fn arrow_function_body_is_not_a_boundary() {
        let stmts = split_statements("const f = () => {\n  g();\n};\nf();").unwrap();
        assert_eq!(stmts.len(), 2);
    }

    #[test]
    fn comment_between_statements_attaches_to_next() {
        let stmts = split_statements("a();\n// note\nb();").unwrap();
        assert_eq!(stmts, vec!["a();", "// note\nb();"]);
    }

    #[test]
    fn unbalanced_brace_is_an_error() {
        assert!(split_statements("function f() {").is_err());
        assert!(split_statements("}").is_err());
    }

    #[test]
    fn if_else_chain_is_one_statement() {
        let source = "if (a) {\n  x();\n} else if (b) {\n  y();\n} else {\n  z();\n}\nnext();";
        let stmts = split_statements(source).unwrap();
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[1], "next();");
    }

    #[test]
    fn try_catch_finally_is_one_statement() {
        let source = "try {\n  x();\n} catch (e) {\n  y();\n} finally {\n  z();\n}\nnext();";
        let stmts = split_statements(source).unwrap();
        assert_eq!(stmts.len(), 2);
    }

    #[test]
    fn export_default_class_is_brace_terminated() {
        let stmts = split_statements("export default class A {}\nlet x;").unwrap();
        assert_eq!(stmts.len(), 2);
    }
}
