//! Discovery of article pages in an extracted Wikipedia archive

use jwalk::WalkDir;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ListError;
use crate::utils::{BACKUP_MARKER, HTML_EXTENSION};

/// List every `*.html` file under `root`, recursively, as absolute paths.
///
/// Paths containing `~` below the root are skipped as editor backups. Entries
/// the walk cannot read are logged and skipped. Order is unspecified.
///
/// # Errors
///
/// * [`ListError::InvalidPath`] if `root` does not exist
/// * [`ListError::NotDirectory`] if `root` is not a directory
/// * [`ListError::Io`] if `root` cannot be inspected
pub fn list_html_files(root: &Path) -> Result<Vec<PathBuf>, ListError> {
    check_root(root)?;

    let root = std::path::absolute(root).map_err(|source| ListError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let files: Vec<PathBuf> = WalkDir::new(&root)
        // Serial: one directory handle open at a time
        .parallelism(jwalk::Parallelism::Serial)
        .skip_hidden(false)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => {
                let file_type = entry.file_type();
                let path = entry.path();
                let is_file =
                    file_type.is_file() || (file_type.is_symlink() && path.is_file());
                (is_file && is_listed(&root, &path)).then_some(path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable archive entry");
                None
            }
        })
        .collect();

    tracing::debug!(root = %root.display(), count = files.len(), "Listed archive pages");
    Ok(files)
}

fn check_root(root: &Path) -> Result<(), ListError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ListError::NotDirectory(root.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ListError::InvalidPath(root.to_path_buf()))
        }
        Err(source) => Err(ListError::Io {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// `*.html` with no backup marker anywhere below the root
fn is_listed(root: &Path, path: &Path) -> bool {
    let has_html_extension = path
        .extension()
        .is_some_and(|ext| ext == HTML_EXTENSION);

    let relative = path.strip_prefix(root).unwrap_or(path);
    let is_backup = relative.to_string_lossy().contains(BACKUP_MARKER);

    has_html_extension && !is_backup
}
