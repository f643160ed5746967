//! Entry catalog scanning.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::repo::entry::{parse_dir_name, PromptEntry};

/// Enumerates the prompt directories of one repository as [`PromptEntry`] values.
///
/// The repository lives at `base.join(repo)`; each immediate subdirectory is
/// one generation result. The returned entries are **unsorted** — build an
/// [`crate::repo::index::OrderingIndex`] to impose the canonical order.
///
/// A subdirectory whose name does not follow the repository naming convention
/// is logged and skipped, never fatal: one corrupt entry must not block
/// browsing the rest. Plain files at the repository level are ignored.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the repository path does not exist.
/// - [`CoreError::NotADirectory`] — the repository path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error.
pub fn scan_repository(base: &Path, repo: &str) -> CoreResult<Vec<PromptEntry>> {
    let repo_path = base.join(repo);
    if !repo_path.exists() {
        return Err(CoreError::NotFound(repo_path));
    }
    if !repo_path.is_dir() {
        return Err(CoreError::NotADirectory(repo_path));
    }

    let read_dir = std::fs::read_dir(&repo_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CoreError::PermissionDenied(repo_path.clone())
        } else {
            CoreError::Io(e)
        }
    })?;

    let mut entries = Vec::new();

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = dir_entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = dir_entry.file_name().to_string_lossy().into_owned();
        let (date, time, prompt) = match parse_dir_name(&name) {
            Ok(parts) => parts,
            Err(_) => {
                tracing::warn!("skipping malformed prompt directory: {}", path.display());
                continue;
            }
        };

        let image_paths = match read_variant_images(&path) {
            Ok(paths) => paths,
            Err(e) => {
                tracing::warn!("skipping unreadable prompt directory {}: {e}", path.display());
                continue;
            }
        };

        entries.push(PromptEntry::new(
            prompt,
            repo.to_string(),
            date,
            time,
            image_paths,
        ));
    }

    Ok(entries)
}

/// Collects the variant image files of one prompt directory.
///
/// Variants are written as zero-padded `NNN.png`, so sorting by file name
/// yields a stable variant order regardless of directory iteration order.
fn read_variant_images(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|ext| ext.eq_ignore_ascii_case("png"))
                    .unwrap_or(false)
        })
        .collect();
    paths.sort();
    Ok(paths)
}
