//! Statement tree for one source file.

use goog2es_common::Comment;

/// Variable declaration keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VarKind {
    Const,
    Let,
    Var,
}

impl VarKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            VarKind::Const => "const",
            VarKind::Let => "let",
            VarKind::Var => "var",
        }
    }
}

/// One top-level statement, classified exactly once at parse time.
///
/// The first four variants are the legacy shapes the transform consumes; the
/// next three are the standard-module shapes it synthesizes; `Raw` is every
/// other statement, kept verbatim so it prints byte-for-byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `goog.module.declareLegacyNamespace();`
    DeclareLegacyNamespace,
    /// `goog.module('<dotted symbol>');`
    ModuleDecl { symbol: String },
    /// `const <name> = goog.require('<dotted symbol>');`
    ///
    /// `name` is `None` when the declarator target is a destructuring
    /// pattern, which the transform rejects. `raw` keeps the original text
    /// so an untransformed tree still prints faithfully.
    RequireBinding {
        name: Option<String>,
        symbol: String,
        raw: String,
    },
    /// `exports = <expr>;` with the right-hand side kept as source text.
    ExportsAssignment { rhs: String },
    /// Synthesized `import <name> from '<specifier>';`
    Import { name: String, specifier: String },
    /// Synthesized `<kind> <name> = <init>;`
    VarDecl {
        kind: VarKind,
        name: String,
        init: String,
    },
    /// Synthesized `export default <name>;`
    ExportDefault { name: String },
    /// Any other top-level statement, verbatim.
    Raw { text: String },
}

/// The parsed file: leading comments plus an ordered statement list.
///
/// Leading comments are owned by the program rather than by whatever
/// statement happens to sit at position 0, so they survive statement
/// insertion and removal at the front of the body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub leading_comments: Vec<Comment>,
    pub body: Vec<Statement>,
}

impl Program {
    pub fn new(leading_comments: Vec<Comment>, body: Vec<Statement>) -> Self {
        Program {
            leading_comments,
            body,
        }
    }
}
