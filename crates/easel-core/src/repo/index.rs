//! Ordering index over a repository's catalog.
//!
//! The canonical browsing order is descending by `(date, time)` — most
//! recent generation first. Ties are broken by prompt text so the order is
//! deterministic across rebuilds; that stability is what lets a cursor
//! computed from one scan still locate the same boundary in a later scan.

use std::cmp::Ordering;

use crate::repo::entry::PromptEntry;

/// Where a cursor's `(date, time)` key sits in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The key matched an entry at this position.
    Exact(usize),
    /// No entry carries the key (it was removed since the cursor was
    /// issued); this is the position the entry would occupy today.
    Nearest(usize),
}

/// Catalog entries in canonical order.
///
/// The index is rebuilt from the scanner's output on every page request —
/// the filesystem is the source of truth and no durable index is kept.
#[derive(Debug, Clone, Default)]
pub struct OrderingIndex {
    entries: Vec<PromptEntry>,
}

impl OrderingIndex {
    /// Sorts the scanner's output into canonical order.
    pub fn build(mut entries: Vec<PromptEntry>) -> Self {
        entries.sort_by(canonical_order);
        Self { entries }
    }

    /// The ordered entries, newest first.
    pub fn entries(&self) -> &[PromptEntry] {
        &self.entries
    }

    /// Number of entries in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Locates the boundary position for a cursor key.
    ///
    /// Exact match on `(date, time)` when the entry still exists; otherwise
    /// the nearest position the key would occupy, so a stale cursor degrades
    /// to "resume from the best-known neighboring position" instead of
    /// failing the page request.
    pub fn locate(&self, date: &str, time: &str) -> Boundary {
        let pos = self
            .entries
            .partition_point(|e| (e.date(), e.time()) > (date, time));

        match self.entries.get(pos) {
            Some(e) if e.date() == date && e.time() == time => Boundary::Exact(pos),
            _ => Boundary::Nearest(pos),
        }
    }
}

/// Descending `(date, time)`, then ascending prompt.
fn canonical_order(a: &PromptEntry, b: &PromptEntry) -> Ordering {
    (b.date(), b.time())
        .cmp(&(a.date(), a.time()))
        .then_with(|| a.prompt().cmp(b.prompt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, time: &str, prompt: &str) -> PromptEntry {
        PromptEntry::new(
            prompt.to_string(),
            "default".to_string(),
            date.to_string(),
            time.to_string(),
            vec![],
        )
    }

    #[test]
    fn build_orders_newest_first() {
        let index = OrderingIndex::build(vec![
            entry("2024-01-01", "09-00-00", "old"),
            entry("2024-03-01", "09-00-00", "new"),
            entry("2024-02-01", "09-00-00", "mid"),
        ]);

        let prompts: Vec<&str> = index.entries().iter().map(|e| e.prompt()).collect();
        assert_eq!(prompts, vec!["new", "mid", "old"]);
    }

    #[test]
    fn same_date_orders_by_time() {
        let index = OrderingIndex::build(vec![
            entry("2024-01-01", "08-00-00", "morning"),
            entry("2024-01-01", "20-00-00", "evening"),
        ]);

        assert_eq!(index.entries()[0].prompt(), "evening");
        assert_eq!(index.entries()[1].prompt(), "morning");
    }

    #[test]
    fn timestamp_ties_break_by_prompt() {
        let index = OrderingIndex::build(vec![
            entry("2024-01-01", "09-00-00", "zebra"),
            entry("2024-01-01", "09-00-00", "apple"),
        ]);

        assert_eq!(index.entries()[0].prompt(), "apple");
        assert_eq!(index.entries()[1].prompt(), "zebra");
    }

    #[test]
    fn order_is_stable_across_rebuilds() {
        let items = vec![
            entry("2024-01-02", "09-00-00", "b"),
            entry("2024-01-01", "09-00-00", "a"),
            entry("2024-01-03", "09-00-00", "c"),
        ];
        let first = OrderingIndex::build(items.clone());
        let mut shuffled = items;
        shuffled.reverse();
        let second = OrderingIndex::build(shuffled);

        assert_eq!(first.entries(), second.entries());
    }

    #[test]
    fn locate_exact_match() {
        let index = OrderingIndex::build(vec![
            entry("2024-01-03", "09-00-00", "c"),
            entry("2024-01-02", "09-00-00", "b"),
            entry("2024-01-01", "09-00-00", "a"),
        ]);

        assert_eq!(index.locate("2024-01-02", "09-00-00"), Boundary::Exact(1));
        assert_eq!(index.locate("2024-01-03", "09-00-00"), Boundary::Exact(0));
        assert_eq!(index.locate("2024-01-01", "09-00-00"), Boundary::Exact(2));
    }

    #[test]
    fn locate_removed_key_falls_back_to_neighbor() {
        let index = OrderingIndex::build(vec![
            entry("2024-01-03", "09-00-00", "c"),
            entry("2024-01-01", "09-00-00", "a"),
        ]);

        // A key between the two remaining entries lands where it would sit.
        assert_eq!(index.locate("2024-01-02", "09-00-00"), Boundary::Nearest(1));
    }

    #[test]
    fn locate_key_newer_than_all_entries() {
        let index = OrderingIndex::build(vec![entry("2024-01-01", "09-00-00", "a")]);
        assert_eq!(index.locate("2024-06-01", "00-00-00"), Boundary::Nearest(0));
    }

    #[test]
    fn locate_key_older_than_all_entries() {
        let index = OrderingIndex::build(vec![entry("2024-01-01", "09-00-00", "a")]);
        assert_eq!(index.locate("2020-01-01", "00-00-00"), Boundary::Nearest(1));
    }

    #[test]
    fn locate_on_empty_index() {
        let index = OrderingIndex::build(vec![]);
        assert!(index.is_empty());
        assert_eq!(index.locate("2024-01-01", "00-00-00"), Boundary::Nearest(0));
    }
}
