use goog2es_parser::{Program, Statement};

/// Builds the output text for one program.
pub struct Printer {
    out: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Printer { out: String::new() }
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn write_line(&mut self) {
        self.out.push('\n');
    }

    pub fn print(&mut self, program: &Program) {
        for comment in &program.leading_comments {
            self.write(&comment.text);
            self.write_line();
        }
        if !program.leading_comments.is_empty() && !program.body.is_empty() {
            self.write_line();
        }
        for statement in &program.body {
            self.print_statement(statement);
            self.write_line();
        }
    }

    fn print_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::DeclareLegacyNamespace => {
                self.write("goog.module.declareLegacyNamespace();");
            }
            Statement::ModuleDecl { symbol } => {
                self.write("goog.module(");
                self.write_quoted(symbol);
                self.write(");");
            }
            Statement::RequireBinding { raw, .. } => {
                // Untransformed trees print the original text verbatim.
                self.write(raw);
            }
            Statement::ExportsAssignment { rhs } => {
                self.write("exports = ");
                self.write(rhs);
                self.write(";");
            }
            Statement::Import { name, specifier } => {
                self.write("import ");
                self.write(name);
                self.write(" from ");
                self.write_quoted(specifier);
                self.write(";");
            }
            Statement::VarDecl { kind, name, init } => {
                self.write(kind.keyword());
                self.write(" ");
                self.write(name);
                self.write(" = ");
                self.write(init);
                self.write(";");
            }
            Statement::ExportDefault { name } => {
                self.write("export default ");
                self.write(name);
                self.write(";");
            }
            Statement::Raw { text } => {
                self.write(text);
            }
        }
    }

    /// Single-quoted string literal with `\` and `'` escaped.
    fn write_quoted(&mut self, value: &str) {
        self.out.push('\'');
        for ch in value.chars() {
            match ch {
                '\\' => self.out.push_str("\\\\"),
                '\'' => self.out.push_str("\\'"),
                _ => self.out.push(ch),
            }
        }
        self.out.push('\'');
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Print a whole program to source text.
pub fn print(program: &Program) -> String {
    let mut printer = Printer::new();
    printer.print(program);
    let output = printer.finish();
    tracing::debug!(
        statements = program.body.len(),
        bytes = output.len(),
        "printed program"
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use goog2es_common::Comment;
    use goog2es_parser::VarKind;

    #[test]
    fn prints_synthesized_module_statements() {
        let program = Program::new(
            Vec::new(),
            vec![
                Statement::Import {
                    name: "D".to_string(),
                    specifier: "./D".to_string(),
                },
                Statement::VarDecl {
                    kind: VarKind::Const,
                    name: "exports".to_string(),
                    init: "D".to_string(),
                },
                Statement::ExportDefault {
                    name: "exports".to_string(),
                },
            ],
        );
        assert_eq!(
            print(&program),
            "import D from './D';\nconst exports = D;\nexport default exports;\n"
        );
    }

    #[test]
    fn comments_precede_statements_with_blank_line() {
        let program = Program::new(
            vec![Comment::line(" banner")],
            vec![Statement::Raw {
                text: "f();".to_string(),
            }],
        );
        assert_eq!(print(&program), "// banner\n\nf();\n");
    }

    #[test]
    fn block_comment_prints_verbatim() {
        let program = Program::new(
            vec![Comment::block(" legal text ")],
            vec![Statement::Raw {
                text: "f();".to_string(),
            }],
        );
        assert_eq!(print(&program), "/* legal text */\n\nf();\n");
    }

    #[test]
    fn raw_statement_round_trips() {
        let text = "const o = { a: 1, b: 'x;' };";
        let program = Program::new(
            Vec::new(),
            vec![Statement::Raw {
                text: text.to_string(),
            }],
        );
        assert_eq!(print(&program), format!("{text}\n"));
    }

    #[test]
    fn quoting_escapes_single_quotes() {
        let mut printer = Printer::new();
        printer.write_quoted("it's");
        assert_eq!(printer.finish(), "'it\\'s'");
    }

    #[test]
    fn empty_program_prints_nothing() {
        assert_eq!(print(&Program::default()), "");
    }
}
