//! File discovery and per-file transform execution.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use walkdir::WalkDir;

use goog2es_common::{TransformError, TransformOptions};

use crate::args::CliArgs;

/// Run the rewriter over every discovered file.
///
/// Returns `Ok(true)` when every file transformed cleanly. Per-file failures
/// are reported to stderr and do not stop other files: each invocation is
/// independent, so one bad file only fails itself.
pub fn run(args: &CliArgs) -> Result<bool> {
    let options = load_options(args)?;
    let files = discover_files(args)?;
    tracing::info!(files = files.len(), "starting rewrite");

    let results: Vec<(PathBuf, Result<String, TransformError>)> = files
        .par_iter()
        .map(|path| (path.clone(), process_file(path, &options)))
        .collect();

    let mut failure_counts: FxHashMap<&'static str, usize> = FxHashMap::default();
    let mut ok = true;
    let print_headers = !args.write && results.len() > 1;

    for (path, result) in results {
        match result {
            Ok(output) => {
                if args.write {
                    fs::write(&path, output)
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::debug!(path = %path.display(), "rewrote file");
                } else {
                    if print_headers {
                        println!("// {}", path.display());
                    }
                    print!("{output}");
                }
            }
            Err(err) => {
                ok = false;
                *failure_counts.entry(condition_name(&err)).or_default() += 1;
                eprintln!("{}: {err}", path.display().to_string().red());
            }
        }
    }

    if !ok {
        let summary = failure_counts
            .iter()
            .map(|(condition, count)| format!("{condition}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!("{} {summary}", "failed files by condition:".red().bold());
    }

    Ok(ok)
}

fn process_file(path: &Path, options: &TransformOptions) -> Result<String, TransformError> {
    let source = fs::read_to_string(path).map_err(|err| TransformError::Parse {
        message: format!("could not read file: {err}"),
    })?;
    let rel = path.to_string_lossy();
    goog2es_transform::transform(&source, &rel, options)
}

/// Options file first, then command-line flags on top.
fn load_options(args: &CliArgs) -> Result<TransformOptions> {
    let mut options = match &args.options_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading options file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing options file {}", path.display()))?
        }
        None => TransformOptions::default(),
    };
    if args.allow_no_goog_module {
        options.allow_no_goog_module = true;
    }
    if let Some(root) = &args.source_root {
        options.source_root = root.clone();
    }
    Ok(options)
}

fn discover_files(args: &CliArgs) -> Result<Vec<PathBuf>> {
    let include = build_globset(&args.include)?;
    let exclude = build_globset(&args.exclude)?;
    let mut files = Vec::new();

    for root in &args.paths {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.with_context(|| format!("walking {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "js") {
                continue;
            }
            if let Some(include) = &include
                && !include.is_match(path)
            {
                continue;
            }
            if let Some(exclude) = &exclude
                && exclude.is_match(path)
            {
                continue;
            }
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("invalid glob '{pattern}'"))?);
    }
    Ok(Some(builder.build()?))
}

fn condition_name(err: &TransformError) -> &'static str {
    match err {
        TransformError::DuplicateDeclaration { .. } => "DuplicateDeclaration",
        TransformError::MissingModule => "MissingModule",
        TransformError::UnsupportedBindingPattern { .. } => "UnsupportedBindingPattern",
        TransformError::DuplicateExportAssignment => "DuplicateExportAssignment",
        TransformError::Parse { .. } => "Parse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_options_file_defaults() {
        let args = CliArgs {
            allow_no_goog_module: true,
            source_root: Some("lib".to_string()),
            ..CliArgs::default()
        };
        let options = load_options(&args).unwrap();
        assert!(options.allow_no_goog_module);
        assert_eq!(options.source_root, "lib");
    }

    #[test]
    fn condition_names_are_stable() {
        assert_eq!(
            condition_name(&TransformError::MissingModule),
            "MissingModule"
        );
        assert_eq!(
            condition_name(&TransformError::DuplicateExportAssignment),
            "DuplicateExportAssignment"
        );
    }
}
