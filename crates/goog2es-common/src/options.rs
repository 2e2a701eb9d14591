//! Transform configuration.

use serde::{Deserialize, Serialize};

/// Options recognized by the transform.
///
/// Field names serialize with kebab-case keys, matching the option names
/// accepted on the command line:
/// `{"allow-no-goog-module": true, "source-root": "src"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransformOptions {
    /// Tolerate a missing `goog.module` declaration by substituting a
    /// placeholder symbol and skipping export-statement synthesis.
    pub allow_no_goog_module: bool,

    /// Directory prefix under which files get a `@module` doc comment.
    pub source_root: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions {
            allow_no_goog_module: false,
            source_root: "src".to_string(),
        }
    }
}
