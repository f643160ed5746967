//! Error types for `easel-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.
//!
//! Note that [`RepoManager::get_page`](crate::repo::pager::RepoManager::get_page)
//! deliberately does **not** return `CoreResult`: at that boundary every
//! failure is folded into the page result's `error_message` field so the UI
//! can degrade gracefully instead of unwinding through callback chains.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A prompt directory name does not follow the repository naming
    /// convention (`YYYY-MM-DD_HH-MM-SS_<prompt>`).
    #[error("invalid prompt directory name: {0}")]
    InvalidEntryName(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `easel-core`.
pub type CoreResult<T> = Result<T, CoreError>;
