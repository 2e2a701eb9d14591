//! Dotted-symbol to relative-path resolution.

/// Compute the relative import specifier from one module symbol to another.
///
/// Both symbols are treated as slash-joined paths; the final segment of
/// `from` is the importing file's own name and is dropped to get its
/// directory. The result is always relative (`./` or `../`-prefixed), never
/// a bare specifier. Purely syntactic: no filesystem lookup and no check
/// that the target exists.
pub fn symbol_to_relative_path(from: &str, to: &str) -> String {
    let from_dir: Vec<&str> = {
        let mut parts: Vec<&str> = from.split('.').collect();
        parts.pop();
        parts
    };
    let to_parts: Vec<&str> = to.split('.').collect();

    // Shared leading directories; the target's final segment is its file
    // name and never counts as shared.
    let max_common = to_parts.len().saturating_sub(1);
    let mut common = 0;
    while common < from_dir.len()
        && common < max_common
        && from_dir[common] == to_parts[common]
    {
        common += 1;
    }

    let ups = from_dir.len() - common;
    let rest = to_parts[common..].join("/");
    if ups == 0 {
        format!("./{rest}")
    } else {
        let mut specifier = "../".repeat(ups);
        specifier.push_str(&rest);
        specifier
    }
}
