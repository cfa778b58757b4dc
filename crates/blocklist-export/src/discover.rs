//! Input file discovery

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Collect every file under `root`.
///
/// A directory is walked recursively; a plain file becomes a
/// single-element list with a warning; anything else warns and yields
/// an empty list so the group proceeds with no inputs. Unreadable
/// directories are warned about and skipped, never silently dropped.
pub fn discover_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if root.is_dir() {
        walk_into(root, &mut files);
    } else if root.is_file() {
        warn!(
            path = %root.display(),
            "input path is a file, proceeding with only it in the file list"
        );
        files.push(root.to_path_buf());
    } else {
        warn!(
            path = %root.display(),
            "input path is not a file or directory, proceeding with no files"
        );
    }
    files
}

/// [`discover_files`], sorted case-insensitively by path.
///
/// Input order determines output order, so discovery must not depend
/// on the platform's directory iteration order.
pub fn discover_files_sorted(root: &Path) -> Vec<PathBuf> {
    let mut files = discover_files(root);
    files.sort_by_key(|p| p.to_string_lossy().to_lowercase());
    files
}

fn walk_into(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
            return;
        }
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_into(&path, out);
        } else {
            out.push(path);
        }
    }
}
