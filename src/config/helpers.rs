// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use super::*;

/// Expand a leading "~/" against the home directory.
pub(super) fn expand_home(path: &Path) -> Result<PathBuf, YConfError> {
    let raw = path.to_string_lossy();
    match raw.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| YConfError::FileError {
                message: "Could not determine home directory for ~ expansion".into(),
                path: raw.to_string(),
                hint: Some("Set HOME or use an absolute path".into()),
                code: Some(300),
            })?;
            Ok(home.join(rest))
        }
        None => Ok(path.to_path_buf()),
    }
}

/// Spellings tried for one path segment: as written, snake_case, kebab-case.
pub(super) fn segment_variants(seg: &str) -> Vec<String> {
    let mut out = vec![seg.to_string()];

    let snake = seg.replace('-', "_");
    if snake != seg {
        out.push(snake);
    }

    let kebab = seg.replace('_', "-");
    if kebab != seg {
        out.push(kebab);
    }

    out
}

/// Find an entry, trying snake/kebab spellings per segment when the exact
/// path is missing.
pub(super) fn find_flexible<'a>(document: &'a Document, path: &str) -> Option<&'a Entry> {
    if let Some(entry) = document.entries.get(path) {
        return Some(entry);
    }

    fn dfs<'a>(document: &'a Document, segs: &[&str], cur: &mut Vec<String>) -> Option<&'a Entry> {
        let Some((first, rest)) = segs.split_first() else {
            return document.entries.get(&cur.join("."));
        };
        for variant in segment_variants(first) {
            cur.push(variant);
            let found = dfs(document, rest, cur);
            cur.pop();
            if found.is_some() {
                return found;
            }
        }
        None
    }

    let segs: Vec<&str> = path.split('.').collect();
    dfs(document, &segs, &mut Vec::with_capacity(segs.len()))
}

/// Immediate child segment names beneath `prefix`, in first-seen order.
pub(super) fn child_segments(document: &Document, prefix: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for path in document.entries.keys() {
        let tail = if prefix.is_empty() {
            Some(path.as_str())
        } else {
            path.strip_prefix(prefix).and_then(|t| t.strip_prefix('.'))
        };
        let Some(tail) = tail else { continue };

        let child = tail.split('.').next().unwrap_or(tail);
        if !child.is_empty() && !out.iter().any(|c| c == child) {
            out.push(child.to_string());
        }
    }

    out
}
