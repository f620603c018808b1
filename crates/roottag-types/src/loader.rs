//! Type list loading from plain text files

use roottag_core::{Result, RootTagError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Split type list content into names, one per line.
///
/// Lines end in `\n` or `\r\n`. Only the empty element left behind by a
/// final newline is dropped. Blank lines in the middle and surrounding
/// whitespace are kept as-is.
pub fn parse_type_list(content: &str) -> Vec<String> {
    let mut names: Vec<String> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    if names.last().map(|n| n.is_empty()).unwrap_or(false) {
        names.pop();
    }
    names
}

/// Load the type list at `path`
pub fn load_type_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(RootTagError::SourceUnreadable {
            path: String::new(),
            reason: "no type list path configured".to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| RootTagError::SourceUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let names = parse_type_list(&content);
    debug!(path = %path.display(), count = names.len(), "loaded GameObject type list");
    Ok(names)
}
