//! Which page numbers the pagination bar renders.
//!
//! The window is a contiguous run of at most `max_visible` pages that
//! contains the current page whenever the total allows it. It is re-anchored
//! at the edges so it never shrinks near the first or the last page.
//! Pages outside the window are reachable through the first/last buttons,
//! with an ellipsis between them and the window when more than one page is
//! skipped.

use contracts::shared::pagination::PageDescriptor;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationWindow {
    pub pages: Vec<u32>,
    pub show_leading_ellipsis: bool,
    pub show_trailing_ellipsis: bool,
    pub show_first: bool,
    pub show_last: bool,
}

impl PaginationWindow {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Computes the page window. Never panics: zero pages give an empty window,
/// `current_page` is clamped into `1..=last_page`, a zero `max_visible`
/// is treated as 1.
pub fn compute_window(current_page: u32, last_page: u32, max_visible: u32) -> PaginationWindow {
    if last_page < 1 {
        return PaginationWindow::default();
    }

    let max_visible = max_visible.max(1);
    let current_page = current_page.clamp(1, last_page);

    let mut start = current_page.saturating_sub(max_visible / 2).max(1);
    let end = last_page.min(start.saturating_add(max_visible - 1));

    if end - start + 1 < max_visible {
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    PaginationWindow {
        pages: (start..=end).collect(),
        show_leading_ellipsis: start > 2,
        show_trailing_ellipsis: end.saturating_add(1) < last_page,
        show_first: start > 1,
        show_last: end < last_page,
    }
}

/// Window for a page descriptor built from an API response.
/// Nothing is rendered for an empty collection.
pub fn window_for(descriptor: &PageDescriptor) -> PaginationWindow {
    if descriptor.total_items == 0 {
        return PaginationWindow::default();
    }
    compute_window(
        descriptor.current_page,
        descriptor.last_page,
        descriptor.max_visible,
    )
}

/// Targets of the prev/next/first/last buttons; `None` means the button is
/// disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    current_page: u32,
    last_page: u32,
}

impl PageNav {
    pub fn new(current_page: u32, last_page: u32) -> Self {
        Self {
            current_page,
            last_page,
        }
    }

    pub fn prev(&self) -> Option<u32> {
        (self.current_page > 1).then(|| (self.current_page - 1).min(self.last_page.max(1)))
    }

    pub fn next(&self) -> Option<u32> {
        (self.current_page < self.last_page).then(|| self.current_page.max(1) + 1)
    }

    pub fn first(&self) -> Option<u32> {
        (self.last_page >= 1 && self.current_page != 1).then_some(1)
    }

    pub fn last(&self) -> Option<u32> {
        (self.last_page >= 1 && self.current_page != self.last_page).then_some(self.last_page)
    }
}

impl From<&PageDescriptor> for PageNav {
    fn from(descriptor: &PageDescriptor) -> Self {
        Self::new(descriptor.current_page, descriptor.last_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(current: u32, last: u32, max: u32) -> Vec<u32> {
        compute_window(current, last, max).pages
    }

    #[test]
    fn test_window_length() {
        for last in 1..=30 {
            for max in 1..=9 {
                for current in 1..=last {
                    let window = compute_window(current, last, max);
                    assert_eq!(
                        window.pages.len() as u32,
                        max.min(last),
                        "current={current} last={last} max={max}"
                    );
                    assert!(window.pages.windows(2).all(|w| w[1] == w[0] + 1));
                    assert!(window.pages[0] >= 1);
                    assert!(*window.pages.last().unwrap() <= last);
                    if last >= max {
                        assert!(window.pages.contains(&current));
                    }
                }
            }
        }
    }

    #[test]
    fn test_anchoring_at_edges() {
        assert_eq!(pages(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(pages(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(pages(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(pages(9, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_ellipsis_suppression() {
        let w = compute_window(3, 10, 5);
        assert_eq!(w.pages[0], 1);
        assert!(!w.show_first);
        assert!(!w.show_leading_ellipsis);

        let w = compute_window(4, 10, 5);
        assert_eq!(w.pages[0], 2);
        assert!(w.show_first);
        assert!(!w.show_leading_ellipsis);

        let w = compute_window(6, 10, 5);
        assert_eq!(w.pages[0], 4);
        assert!(w.show_leading_ellipsis);
        assert!(w.show_trailing_ellipsis);

        let w = compute_window(7, 10, 5);
        assert_eq!(w.pages, vec![5, 6, 7, 8, 9]);
        assert!(w.show_last);
        assert!(!w.show_trailing_ellipsis);
    }

    #[test]
    fn test_single_page() {
        assert_eq!(
            compute_window(1, 1, 5),
            PaginationWindow {
                pages: vec![1],
                show_leading_ellipsis: false,
                show_trailing_ellipsis: false,
                show_first: false,
                show_last: false,
            }
        );
    }

    #[test]
    fn test_whole_range_fits() {
        // 23 items at 5 per page
        let w = compute_window(3, 5, 5);
        assert_eq!(w.pages, vec![1, 2, 3, 4, 5]);
        assert!(!w.show_first && !w.show_last);
        assert!(!w.show_leading_ellipsis && !w.show_trailing_ellipsis);

        assert_eq!(pages(2, 3, 10), vec![1, 2, 3]);
    }

    #[test]
    fn test_hundred_items_page_eight() {
        let w = compute_window(8, 10, 5);
        assert_eq!(w.pages, vec![6, 7, 8, 9, 10]);
        assert!(w.show_first);
        assert!(w.show_leading_ellipsis);
        assert!(!w.show_last);
        assert!(!w.show_trailing_ellipsis);
    }

    #[test]
    fn test_degenerate_inputs_clamp() {
        assert!(compute_window(1, 0, 5).is_empty());
        assert!(compute_window(0, 0, 0).is_empty());
        assert_eq!(pages(0, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(pages(3, 10, 0), vec![3]);
        // current past the end while a new page loads
        assert_eq!(pages(14, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(pages(u32::MAX, u32::MAX, 5).len(), 5);
    }

    #[test]
    fn test_window_for_empty_collection() {
        let loading = PageDescriptor {
            last_page: 0,
            ..PageDescriptor::default()
        };
        assert!(window_for(&loading).is_empty());

        let empty = PageDescriptor::default();
        assert!(window_for(&empty).is_empty());

        let filled = PageDescriptor {
            current_page: 8,
            last_page: 10,
            total_items: 100,
            range_start: 71,
            range_end: 80,
            ..PageDescriptor::default()
        };
        assert_eq!(window_for(&filled).pages, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_nav_clamps() {
        let nav = PageNav::new(1, 10);
        assert_eq!(nav.prev(), None);
        assert_eq!(nav.first(), None);
        assert_eq!(nav.next(), Some(2));
        assert_eq!(nav.last(), Some(10));

        let nav = PageNav::new(10, 10);
        assert_eq!(nav.next(), None);
        assert_eq!(nav.last(), None);
        assert_eq!(nav.prev(), Some(9));

        let nav = PageNav::new(1, 1);
        assert_eq!((nav.prev(), nav.next()), (None, None));

        let nav = PageNav::new(0, 0);
        assert_eq!((nav.prev(), nav.next(), nav.first(), nav.last()), (None, None, None, None));
    }
}
