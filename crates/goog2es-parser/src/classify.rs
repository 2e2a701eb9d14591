//! Legacy statement shape matching.
//!
//! Each top-level statement is classified exactly once against the four
//! legacy shapes. The match is structural, over a token cursor, so spacing
//! and interior comments do not matter; anything that does not match a shape
//! completely becomes `Raw`.

use crate::ast::{Statement, VarKind};
use crate::scanner::is_ident_byte;

/// Classify one top-level statement.
///
/// A comment between statements travels in the following statement's slice.
/// When that statement is a legacy shape the transform replaces, the comment
/// goes with it; only the file's leading comment block is preserved across
/// replacement.
pub fn classify(stmt: &str) -> Statement {
    if let Some(classified) = match_goog_call(stmt) {
        return classified;
    }
    if let Some(classified) = match_require(stmt) {
        return classified;
    }
    if let Some(classified) = match_exports_assignment(stmt) {
        return classified;
    }
    Statement::Raw {
        text: stmt.to_string(),
    }
}

/// `goog.module('<symbol>');` or `goog.module.declareLegacyNamespace();`
fn match_goog_call(stmt: &str) -> Option<Statement> {
    let mut cursor = Cursor::new(stmt);
    cursor.eat_keyword("goog")?;
    cursor.eat_byte(b'.')?;
    cursor.eat_keyword("module")?;

    if cursor.peek_byte() == Some(b'.') {
        cursor.eat_byte(b'.')?;
        cursor.eat_keyword("declareLegacyNamespace")?;
        cursor.eat_byte(b'(')?;
        cursor.eat_byte(b')')?;
        cursor.eat_terminator()?;
        return Some(Statement::DeclareLegacyNamespace);
    }

    cursor.eat_byte(b'(')?;
    let symbol = cursor.eat_string_literal()?;
    cursor.eat_byte(b')')?;
    cursor.eat_terminator()?;
    Some(Statement::ModuleDecl { symbol })
}

/// `const <name> = goog.require('<symbol>');`
///
/// A destructuring target still matches the shape but yields `name: None`;
/// the transform turns that into the unsupported-binding-pattern failure.
fn match_require(stmt: &str) -> Option<Statement> {
    let mut cursor = Cursor::new(stmt);
    let keyword = cursor.eat_ident()?;
    VarKind::from_keyword(keyword)?;

    let name = match cursor.peek_byte()? {
        b'{' | b'[' => {
            cursor.skip_balanced()?;
            None
        }
        _ => Some(cursor.eat_ident()?.to_string()),
    };

    cursor.eat_byte(b'=')?;
    cursor.eat_keyword("goog")?;
    cursor.eat_byte(b'.')?;
    cursor.eat_keyword("require")?;
    cursor.eat_byte(b'(')?;
    let symbol = cursor.eat_string_literal()?;
    cursor.eat_byte(b')')?;
    cursor.eat_terminator()?;

    Some(Statement::RequireBinding {
        name,
        symbol,
        raw: stmt.to_string(),
    })
}

/// `exports = <expr>;` - assignment to the whole `exports` identifier.
///
/// Member writes (`exports.foo = ...`) are namespace augmentation and stay
/// raw; `==`/`===` comparisons and `=>` arrows do not match.
fn match_exports_assignment(stmt: &str) -> Option<Statement> {
    let mut cursor = Cursor::new(stmt);
    cursor.eat_keyword("exports")?;
    cursor.eat_byte(b'=')?;
    match cursor.peek_raw_byte() {
        Some(b'=') | Some(b'>') => return None,
        _ => {}
    }

    let mut rhs = cursor.rest().trim();
    rhs = rhs.strip_suffix(';').unwrap_or(rhs).trim_end();
    if rhs.is_empty() {
        return None;
    }
    Some(Statement::ExportsAssignment {
        rhs: rhs.to_string(),
    })
}

impl VarKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "const" => Some(VarKind::Const),
            "let" => Some(VarKind::Let),
            "var" => Some(VarKind::Var),
            _ => None,
        }
    }
}

/// Token cursor over one statement's text.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    fn skip_trivia(&mut self) {
        let bytes = self.bytes();
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'/' && bytes.get(self.pos + 1) == Some(&b'/') {
                while self.pos < bytes.len() && bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else if b == b'/' && bytes.get(self.pos + 1) == Some(&b'*') {
                // The scanner already rejected unterminated comments.
                self.pos += 2;
                while self.pos + 1 < bytes.len()
                    && !(bytes[self.pos] == b'*' && bytes[self.pos + 1] == b'/')
                {
                    self.pos += 1;
                }
                self.pos = (self.pos + 2).min(bytes.len());
            } else {
                break;
            }
        }
    }

    /// Next meaningful byte, without consuming it.
    fn peek_byte(&mut self) -> Option<u8> {
        self.skip_trivia();
        self.bytes().get(self.pos).copied()
    }

    /// Next byte with no trivia skipping (for `==` / `=>` lookahead).
    fn peek_raw_byte(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn eat_byte(&mut self, expected: u8) -> Option<()> {
        if self.peek_byte() == Some(expected) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    fn eat_ident(&mut self) -> Option<&'a str> {
        self.skip_trivia();
        let bytes = self.bytes();
        let start = self.pos;
        if start >= bytes.len() || bytes[start].is_ascii_digit() || !is_ident_byte(bytes[start]) {
            return None;
        }
        let mut end = start;
        while end < bytes.len() && is_ident_byte(bytes[end]) {
            end += 1;
        }
        self.pos = end;
        Some(&self.src[start..end])
    }

    fn eat_keyword(&mut self, expected: &str) -> Option<()> {
        if self.eat_ident()? == expected {
            Some(())
        } else {
            None
        }
    }

    /// A `'...'` or `"..."` literal; returns the inner text verbatim.
    fn eat_string_literal(&mut self) -> Option<String> {
        let quote = self.peek_byte()?;
        if quote != b'\'' && quote != b'"' {
            return None;
        }
        let bytes = self.bytes();
        let start = self.pos + 1;
        let mut end = start;
        while end < bytes.len() {
            match bytes[end] {
                b'\\' => end += 2,
                b if b == quote => {
                    self.pos = end + 1;
                    return Some(self.src[start..end].to_string());
                }
                _ => end += 1,
            }
        }
        None
    }

    /// Skip a balanced `{...}` or `[...]` destructuring pattern.
    fn skip_balanced(&mut self) -> Option<()> {
        self.skip_trivia();
        let bytes = self.bytes();
        let mut depth: usize = 0;
        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'\'' | b'"' => {
                    let quote = bytes[self.pos];
                    self.pos += 1;
                    while self.pos < bytes.len() {
                        match bytes[self.pos] {
                            b'\\' => self.pos += 2,
                            b if b == quote => {
                                self.pos += 1;
                                break;
                            }
                            _ => self.pos += 1,
                        }
                    }
                }
                b'{' | b'[' | b'(' => {
                    depth += 1;
                    self.pos += 1;
                }
                b'}' | b']' | b')' => {
                    depth = depth.checked_sub(1)?;
                    self.pos += 1;
                    if depth == 0 {
                        return Some(());
                    }
                }
                _ => self.pos += 1,
            }
        }
        None
    }

    /// Optional `;`, then end of statement.
    fn eat_terminator(&mut self) -> Option<()> {
        if self.peek_byte() == Some(b';') {
            self.pos += 1;
        }
        if self.peek_byte().is_none() {
            Some(())
        } else {
            None
        }
    }

    /// Unconsumed remainder of the statement.
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }
}
