use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the goog2es binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "goog2es",
    version,
    about = "Rewrite goog.module files to standard ES modules"
)]
pub struct CliArgs {
    /// Files or directories to rewrite.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Rewrite files in place instead of printing to stdout.
    #[arg(short = 'w', long)]
    pub write: bool,

    /// Tolerate files without a goog.module declaration.
    #[arg(long = "allowNoGoogModule", alias = "allow-no-goog-module")]
    pub allow_no_goog_module: bool,

    /// Directory prefix under which files get a @module doc comment.
    #[arg(long = "sourceRoot", alias = "source-root")]
    pub source_root: Option<String>,

    /// Only rewrite files whose path matches one of these globs.
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Skip files whose path matches one of these globs.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// JSON file with transform options (kebab-case keys).
    #[arg(long = "optionsFile", alias = "options-file")]
    pub options_file: Option<PathBuf>,
}
