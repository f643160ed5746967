//! Two-cursor bookmark discipline for page browsing.

use crate::repo::cursor::NextToken;
use crate::repo::pager::Direction;

/// The pair of cursors a browsing caller holds between page requests.
///
/// `left` resumes backward (toward newer history), `right` resumes forward
/// (toward older history). On every navigation the cursor just used becomes
/// the opposite edge and the page's continuation token becomes the new edge
/// in the direction travelled — this is what makes forward-then-back land on
/// the exact previous page. A `None` edge means that direction is exhausted
/// and its navigation control should be disabled.
///
/// Every mutation returns a **new** `PageBookmarks` instance, following the
/// project-wide immutability convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageBookmarks {
    left: Option<NextToken>,
    right: Option<NextToken>,
}

impl PageBookmarks {
    /// Creates bookmarks with both directions disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookmarks for a freshly loaded first page.
    ///
    /// The first page has nothing newer than it, so `left` is empty;
    /// `right` is the page's continuation token (absent when the whole
    /// catalog fit on one page).
    pub fn first_page(continuation: Option<NextToken>) -> Self {
        Self {
            left: None,
            right: continuation,
        }
    }

    /// The backward (toward newer history) cursor.
    pub fn left(&self) -> Option<&NextToken> {
        self.left.as_ref()
    }

    /// The forward (toward older history) cursor.
    pub fn right(&self) -> Option<&NextToken> {
        self.right.as_ref()
    }

    /// Returns `true` if a forward page exists.
    pub fn can_go_forward(&self) -> bool {
        self.right.is_some()
    }

    /// Returns `true` if a backward page exists.
    pub fn can_go_back(&self) -> bool {
        self.left.is_some()
    }

    /// Returns the bookmarks after navigating one page in `direction`,
    /// where `continuation` is the token of the page just received.
    pub fn advanced(self, direction: Direction, continuation: Option<NextToken>) -> Self {
        match direction {
            Direction::Forward => Self {
                left: self.right,
                right: continuation,
            },
            Direction::Backward => Self {
                right: self.left,
                left: continuation,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(time: &str) -> NextToken {
        NextToken::new(
            "prompt".into(),
            "default".into(),
            "2024-01-01".into(),
            time.into(),
        )
    }

    #[test]
    fn new_bookmarks_disable_both_directions() {
        let bookmarks = PageBookmarks::new();
        assert!(!bookmarks.can_go_forward());
        assert!(!bookmarks.can_go_back());
    }

    #[test]
    fn first_page_enables_forward_only() {
        let bookmarks = PageBookmarks::first_page(Some(token("00-00-16")));
        assert!(bookmarks.can_go_forward());
        assert!(!bookmarks.can_go_back());
    }

    #[test]
    fn first_page_of_a_small_catalog_is_terminal() {
        let bookmarks = PageBookmarks::first_page(None);
        assert!(!bookmarks.can_go_forward());
        assert!(!bookmarks.can_go_back());
    }

    #[test]
    fn forward_moves_right_cursor_to_left() {
        let bookmarks = PageBookmarks::first_page(Some(token("00-00-16")));
        let bookmarks = bookmarks.advanced(Direction::Forward, Some(token("00-00-06")));

        assert_eq!(bookmarks.left(), Some(&token("00-00-16")));
        assert_eq!(bookmarks.right(), Some(&token("00-00-06")));
    }

    #[test]
    fn forward_to_last_page_disables_forward() {
        let bookmarks = PageBookmarks::first_page(Some(token("00-00-16")));
        let bookmarks = bookmarks.advanced(Direction::Forward, None);

        assert!(!bookmarks.can_go_forward());
        assert!(bookmarks.can_go_back());
    }

    #[test]
    fn backward_moves_left_cursor_to_right() {
        let bookmarks = PageBookmarks::first_page(Some(token("00-00-16")))
            .advanced(Direction::Forward, Some(token("00-00-06")))
            .advanced(Direction::Forward, None);

        // On the last page: back with the left cursor, which returns the
        // middle page whose own backward continuation is the first page.
        let bookmarks = bookmarks.advanced(Direction::Backward, Some(token("00-00-16")));
        assert_eq!(bookmarks.right(), Some(&token("00-00-06")));
        assert_eq!(bookmarks.left(), Some(&token("00-00-16")));

        // Back once more lands on the first page: backward exhausted.
        let bookmarks = bookmarks.advanced(Direction::Backward, None);
        assert!(!bookmarks.can_go_back());
        assert_eq!(bookmarks.right(), Some(&token("00-00-16")));
    }

    #[test]
    fn forward_backward_forward_restores_the_right_cursor() {
        let start = PageBookmarks::first_page(Some(token("00-00-16")));
        let after_forward = start.clone().advanced(Direction::Forward, Some(token("00-00-06")));
        let after_back = after_forward.advanced(Direction::Backward, None);

        assert_eq!(after_back, start);
    }
}
