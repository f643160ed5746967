//! Cursor-based pagination over a generation repository.
//!
//! [`RepoManager`] turns a directory tree of image-generation results into a
//! stable, bidirectionally navigable sequence. The ordering index is rebuilt
//! from the filesystem on every page request, and continuation cursors carry
//! an entry's identity rather than a positional index, so the catalog may
//! grow while a user is browsing without breaking held cursors.
//!
//! # Boundary semantics
//!
//! A [`NextToken`] names the entry on the **newer** side of a page boundary.
//! [`Direction::Forward`] (toward older history) returns up to `page_size`
//! entries strictly older than the named entry; [`Direction::Backward`]
//! (toward newer history) returns the page that *ends with* the named entry.
//! Under this convention the two-bookmark discipline of
//! [`PageBookmarks`](crate::repo::bookmarks::PageBookmarks) reproduces a
//! previously shown page exactly.
//!
//! # Error handling
//!
//! [`RepoManager::get_page`] never panics and never returns `Err`: scan and
//! I/O failures are folded into [`PageResult::error_message`] with an empty
//! result list, so a browsing UI shows a notice and keeps its current page
//! instead of crashing.
//!
//! # Scheduling
//!
//! `get_page` performs blocking filesystem I/O. Invoke it off any
//! latency-sensitive thread — [`crate::task::spawn_page_fetch`] runs it on a
//! worker and delivers the result over a channel. A single call is
//! sequential (scan, order, slice) and has no side effects, so abandoning an
//! in-flight call is always safe.

use std::path::{Path, PathBuf};

use crate::error::CoreResult;
use crate::repo::cursor::NextToken;
use crate::repo::entry::PromptEntry;
use crate::repo::index::{Boundary, OrderingIndex};
use crate::repo::scanner::scan_repository;

/// Paging direction relative to the canonical newest-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward older history (down the newest-first order).
    Forward,
    /// Toward newer history (back up the newest-first order).
    Backward,
}

/// The outcome of one page request.
///
/// `error_message` present means the scan or I/O step failed; `results` is
/// still well-formed (empty) in that case. A freshly constructed vector is
/// allocated per call — results are never shared between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    results: Vec<PromptEntry>,
    next_token: Option<NextToken>,
    error_message: Option<String>,
}

impl PageResult {
    fn page(results: Vec<PromptEntry>, next_token: Option<NextToken>) -> Self {
        Self {
            results,
            next_token,
            error_message: None,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            results: Vec::new(),
            next_token: None,
            error_message: Some(message),
        }
    }

    /// The returned entries, in canonical (newest-first) index order.
    pub fn results(&self) -> &[PromptEntry] {
        &self.results
    }

    /// Continuation cursor for the requested direction.
    ///
    /// Absent means no further page exists in that direction — exhaustion,
    /// not an error. The corresponding navigation control should be
    /// disabled.
    pub fn next_token(&self) -> Option<&NextToken> {
        self.next_token.as_ref()
    }

    /// Failure description when the scan or I/O step failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns `true` if this result carries an error message.
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Consumes the result, yielding the entries for display.
    pub fn into_results(self) -> Vec<PromptEntry> {
        self.results
    }
}

/// Pagination engine over one repository of generation results.
///
/// The repository lives at `base_path/{repo}/` and is mutated only by an
/// external writer that appends new prompt directories; `RepoManager` never
/// creates or deletes entries and takes no locks. A concurrent append is
/// simply not seen until the next rebuild (eventually consistent).
///
/// Callers browsing pages are expected to hold **two** cursors — see
/// [`PageBookmarks`](crate::repo::bookmarks::PageBookmarks) — so that
/// navigating forward then back reproduces the previous page exactly.
#[derive(Debug, Clone)]
pub struct RepoManager {
    base_path: PathBuf,
    repo: String,
}

impl RepoManager {
    /// Creates a manager for the repository `repo` under `base_path`.
    pub fn new(base_path: PathBuf, repo: String) -> Self {
        Self { base_path, repo }
    }

    /// The base path holding all repositories.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The name of the repository being browsed.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns a manager pointed at a different repository.
    pub fn with_repo(self, repo: String) -> Self {
        Self { repo, ..self }
    }

    /// Fetches one page of entries.
    ///
    /// With `token` absent the first (newest) page is returned regardless of
    /// `direction` — backward from nowhere is not a meaningful caller state.
    /// With `token` present, the boundary is located by exact `(date, time)`
    /// match; a token whose entry has since been removed falls back to the
    /// nearest position it would occupy today, never an error.
    ///
    /// The continuation token is absent once the direction is exhausted:
    /// forward, when fewer than `page_size` entries remain beyond the
    /// boundary; backward, when the page already starts at the newest entry.
    /// A `page_size` of `0` yields an empty page with no continuation.
    pub fn get_page(
        &self,
        page_size: usize,
        token: Option<&NextToken>,
        direction: Direction,
    ) -> PageResult {
        let index = match self.load_index() {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!("page request failed for repo '{}': {e}", self.repo);
                return PageResult::failure(e.to_string());
            }
        };

        if page_size == 0 {
            return PageResult::page(Vec::new(), None);
        }

        let entries = index.entries();

        let Some(token) = token else {
            // First page: the newest `page_size` entries.
            let end = page_size.min(entries.len());
            let results = entries[..end].to_vec();
            let next = (results.len() == page_size)
                .then(|| NextToken::for_entry(&entries[end - 1]));
            return PageResult::page(results, next);
        };

        let boundary = index.locate(token.date(), token.time());
        tracing::debug!(
            "page request: repo '{}', size {page_size}, {direction:?}, boundary {boundary:?}",
            self.repo
        );

        match direction {
            Direction::Forward => {
                // Entries strictly older than the boundary. When the named
                // entry is gone, the nearest position already points at the
                // first entry older than it.
                let start = match boundary {
                    Boundary::Exact(pos) => pos + 1,
                    Boundary::Nearest(pos) => pos,
                };
                let end = (start + page_size).min(entries.len());
                let results = entries[start..end].to_vec();
                let next = (results.len() == page_size)
                    .then(|| NextToken::for_entry(&entries[end - 1]));
                PageResult::page(results, next)
            }
            Direction::Backward => {
                // The page ending with the named entry, inclusive. When the
                // named entry is gone, the page ends just above its slot.
                let end = match boundary {
                    Boundary::Exact(pos) => pos + 1,
                    Boundary::Nearest(pos) => pos,
                };
                let start = end.saturating_sub(page_size);
                let results = entries[start..end].to_vec();
                let next = (start > 0 && !results.is_empty())
                    .then(|| NextToken::for_entry(&entries[start - 1]));
                PageResult::page(results, next)
            }
        }
    }

    fn load_index(&self) -> CoreResult<OrderingIndex> {
        let entries = scan_repository(&self.base_path, &self.repo)?;
        Ok(OrderingIndex::build(entries))
    }
}
