//! End-to-end rewriting tests: source text in, source text out.

use goog2es_common::{TransformError, TransformOptions};
use goog2es_transform::transform;

fn run(source: &str) -> Result<String, TransformError> {
    transform(source, "test.js", &TransformOptions::default())
}

fn tolerant() -> TransformOptions {
    TransformOptions {
        allow_no_goog_module: true,
        ..TransformOptions::default()
    }
}

#[test]
fn rewrites_module_require_and_exports() {
    let source = "goog.module('a.b.C');\nconst D = goog.require('a.b.D');\nexports = D;\n";
    let output = run(source).unwrap();
    assert_eq!(
        output,
        "import D from './D';\nconst exports = D;\nexport default exports;\n"
    );
}

#[test]
fn namespace_augmentation_gets_exports_object() {
    let source = "goog.module('a.b.C');\nexports.foo = 1;\nexports.bar = 2;\n";
    let output = run(source).unwrap();
    assert_eq!(
        output,
        "let exports = {};\nexports.foo = 1;\nexports.bar = 2;\nexport default exports;\n"
    );
}

#[test]
fn strips_declare_legacy_namespace() {
    let source = "goog.module('a.b.C');\ngoog.module.declareLegacyNamespace();\nexports = 1;\n";
    let output = run(source).unwrap();
    assert!(!output.contains("declareLegacyNamespace"));
    assert!(output.contains("const exports = 1;"));
}

#[test]
fn duplicate_module_declaration_is_fatal() {
    let source = "goog.module('a.b.C');\ngoog.module('a.b.Other');\n";
    assert_eq!(
        run(source).unwrap_err(),
        TransformError::DuplicateDeclaration {
            existing: "a.b.C".to_string()
        }
    );
}

#[test]
fn destructured_require_is_fatal() {
    let source = "goog.module('a.b.C');\nconst {foo} = goog.require('a.b.D');\n";
    assert_eq!(
        run(source).unwrap_err(),
        TransformError::UnsupportedBindingPattern {
            symbol: "a.b.D".to_string()
        }
    );
}

#[test]
fn duplicate_exports_assignment_is_fatal() {
    let source = "goog.module('a.b.C');\nexports = 1;\nexports = 2;\n";
    assert_eq!(
        run(source).unwrap_err(),
        TransformError::DuplicateExportAssignment
    );
}

#[test]
fn missing_module_is_fatal_by_default() {
    let source = "const D = goog.require('a.b.D');\n";
    assert_eq!(run(source).unwrap_err(), TransformError::MissingModule);
}

#[test]
fn tolerant_mode_resolves_from_placeholder_and_skips_export() {
    let source = "const D = goog.require('a.b.D');\nexports = D;\n";
    let output = transform(source, "test.js", &tolerant()).unwrap();
    // Placeholder symbol has a ten-segment directory sharing only the
    // leading `a` with the required symbol.
    assert_eq!(
        output,
        "import D from '../../../../../../../../../b/D';\nexports = D;\n"
    );
    assert!(!output.contains("export default"));
}

#[test]
fn tolerant_mode_passes_standard_module_through() {
    let source = "import D from './D';\nexport default D;\n";
    let output = transform(source, "test.js", &tolerant()).unwrap();
    assert_eq!(output, source);
}

#[test]
fn rerunning_on_output_is_fatal_without_tolerance() {
    let source = "goog.module('a.b.C');\nexports = 1;\n";
    let output = run(source).unwrap();
    assert_eq!(run(&output).unwrap_err(), TransformError::MissingModule);
}

#[test]
fn exactly_one_default_export_for_supported_files() {
    for source in [
        "goog.module('a.b.C');\nexports = 1;\n",
        "goog.module('a.b.C');\n",
        "goog.module('a.b.C');\nconst D = goog.require('a.D');\nexports = D;\n",
    ] {
        let output = run(source).unwrap();
        assert_eq!(output.matches("export default").count(), 1, "{source}");
        assert!(output.ends_with("export default exports;\n"));
    }
}

#[test]
fn leading_comments_survive_the_rewrite() {
    let source = "\
// Copyright 2016.
/** @fileoverview Widget. */
goog.module('app.Widget');

exports = 1;
";
    let output = run(source).unwrap();
    assert!(output.starts_with("// Copyright 2016.\n/** @fileoverview Widget. */\n"));
    assert!(output.contains("const exports = 1;"));
}

#[test]
fn comment_above_replaced_require_goes_with_it() {
    // Only the file's leading comment block survives statement replacement;
    // a comment attached to a rewritten require is part of the replaced
    // statement and is dropped with it.
    let source = "\
goog.module('a.b.C');
// dom helpers
const dom = goog.require('a.b.dom');
exports = dom;
";
    let output = run(source).unwrap();
    assert!(output.contains("import dom from './dom';"));
    assert!(!output.contains("// dom helpers"));
}

#[test]
fn src_file_gets_module_doc_comment() {
    let source = "goog.module('foo.bar');\n";
    let output = transform(source, "src/foo/bar.js", &TransformOptions::default()).unwrap();
    assert_eq!(
        output,
        "/**\n * @module foo/bar\n */\n\nlet exports = {};\nexport default exports;\n"
    );
}

#[test]
fn module_doc_comment_precedes_restored_comments() {
    let source = "// banner\ngoog.module('foo.bar');\nexports = 1;\n";
    let output = transform(source, "src/foo/bar.js", &TransformOptions::default()).unwrap();
    assert!(output.starts_with("/**\n * @module foo/bar\n */\n// banner\n"));
}

#[test]
fn unrelated_statements_keep_their_order() {
    let source = "\
goog.module('a.b.C');
const D = goog.require('a.b.D');

function helper() {
  return D.thing();
}

exports = helper;
";
    let output = run(source).unwrap();
    let import_at = output.find("import D from './D';").unwrap();
    let helper_at = output.find("function helper()").unwrap();
    let exports_at = output.find("const exports = helper;").unwrap();
    let default_at = output.find("export default exports;").unwrap();
    assert!(import_at < helper_at);
    assert!(helper_at < exports_at);
    assert!(exports_at < default_at);
}

#[test]
fn requires_resolve_across_directories() {
    let source = "\
goog.module('app.ui.Button');
const theme = goog.require('app.theme');
const dom = goog.require('app.ui.dom');
const events = goog.require('lib.events');
exports = {theme, dom, events};
";
    let output = run(source).unwrap();
    assert!(output.contains("import theme from '../theme';"));
    assert!(output.contains("import dom from './dom';"));
    assert!(output.contains("import events from '../../lib/events';"));
    assert!(output.contains("const exports = {theme, dom, events};"));
}
