//! The repository manager: catalog scanning, ordering, and cursor-based
//! pagination over on-disk image-generation results.
//!
//! Data flows [`scanner`] → [`index`] → [`pager`], which consumes and
//! produces [`cursor`] values; a browsing caller keeps its place with
//! [`bookmarks`].

pub mod bookmarks;
pub mod cursor;
pub mod entry;
pub mod index;
pub mod pager;
pub mod scanner;

pub use bookmarks::PageBookmarks;
pub use cursor::{NextToken, TokenError};
pub use entry::PromptEntry;
pub use index::{Boundary, OrderingIndex};
pub use pager::{Direction, PageResult, RepoManager};
pub use scanner::scan_repository;
