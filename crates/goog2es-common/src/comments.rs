//! Comment Preservation
//!
//! This module handles extracting the comment block that precedes the first
//! statement of a file. Comments are not part of the statement tree, so they
//! are captured separately before transformation and re-emitted by the
//! printer ahead of the (possibly re-ordered) statement list.

use memchr::memchr;

use crate::errors::TransformError;

/// A single comment, stored with its delimiters.
///
/// The text is owned rather than a source offset because the transform
/// inserts and removes statements, so byte positions in the original text do
/// not survive to emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    /// Full comment text including `//` or `/* */` delimiters.
    pub text: String,
    /// Whether this is a `/* */` comment.
    pub is_block: bool,
}

impl Comment {
    /// Create a line comment from its body (without the `//` prefix).
    pub fn line(body: &str) -> Self {
        Comment {
            text: format!("//{body}"),
            is_block: false,
        }
    }

    /// Create a block comment from its body (without the `/*` `*/` delimiters).
    pub fn block(body: &str) -> Self {
        Comment {
            text: format!("/*{body}*/"),
            is_block: true,
        }
    }

    /// Create a `/** ... */` documentation comment naming a module.
    pub fn module_doc(module_name: &str) -> Self {
        Comment {
            text: format!("/**\n * @module {module_name}\n */"),
            is_block: true,
        }
    }
}

/// Scan the leading trivia of a source file.
///
/// Returns the comments that appear before the first code byte, and the
/// offset at which code starts. Whitespace between leading comments is
/// discarded; the printer re-emits one comment per line.
pub fn scan_leading_comments(source: &str) -> Result<(Vec<Comment>, usize), TransformError> {
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut comments = Vec::new();
    let mut pos = 0;

    while pos < len {
        let ch = bytes[pos];

        if ch == b' ' || ch == b'\t' || ch == b'\r' || ch == b'\n' {
            pos += 1;
            continue;
        }

        if ch == b'/' && pos + 1 < len {
            let next = bytes[pos + 1];

            if next == b'/' {
                // Single-line comment: scan to end of line.
                let start = pos;
                pos = match memchr(b'\n', &bytes[pos..]) {
                    Some(off) => pos + off,
                    None => len,
                };
                let mut end = pos;
                if end > start && bytes[end - 1] == b'\r' {
                    end -= 1;
                }
                comments.push(Comment {
                    text: source[start..end].to_string(),
                    is_block: false,
                });
                continue;
            } else if next == b'*' {
                // Multi-line comment: scan to closing */.
                let start = pos;
                pos += 2;
                loop {
                    if pos + 1 >= len {
                        return Err(TransformError::Parse {
                            message: "unterminated block comment".to_string(),
                        });
                    }
                    if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
                        pos += 2;
                        break;
                    }
                    pos += 1;
                }
                comments.push(Comment {
                    text: source[start..pos].to_string(),
                    is_block: true,
                });
                continue;
            }
        }

        // First code byte; leading trivia ends here.
        break;
    }

    Ok((comments, pos))
}
