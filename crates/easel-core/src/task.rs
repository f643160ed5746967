//! Background page fetching.
//!
//! [`RepoManager::get_page`](crate::repo::pager::RepoManager::get_page)
//! performs blocking filesystem I/O and must stay off latency-sensitive
//! threads. [`spawn_page_fetch`] runs it on a blocking worker and delivers
//! the outcome to the caller's event loop through an unbounded mpsc channel.
//! The fetch has no side effects, so dropping the receiver mid-flight is
//! always safe.

use tokio::sync::mpsc::UnboundedSender;

use crate::repo::cursor::NextToken;
use crate::repo::pager::{Direction, PageResult, RepoManager};

/// Messages sent from a background page fetch to the caller's event loop.
#[derive(Debug)]
pub enum FetchMessage {
    /// The fetch has started; the UI may show a loading state.
    Started,
    /// The fetch finished. Errors are inside the [`PageResult`].
    Page(PageResult),
}

/// Spawns a background page fetch.
///
/// Sends [`FetchMessage::Started`] immediately, then runs `get_page` on a
/// blocking thread and sends the result as [`FetchMessage::Page`]. Send
/// failures are ignored: a dropped receiver means the caller navigated away
/// and abandoned the result.
pub fn spawn_page_fetch(
    manager: RepoManager,
    page_size: usize,
    token: Option<NextToken>,
    direction: Direction,
    tx: UnboundedSender<FetchMessage>,
) {
    tokio::task::spawn_blocking(move || {
        let _ = tx.send(FetchMessage::Started);
        let page = manager.get_page(page_size, token.as_ref(), direction);
        let _ = tx.send(FetchMessage::Page(page));
    });
}
