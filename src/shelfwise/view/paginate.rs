use std::fmt;
use std::num::NonZeroUsize;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(size) => size,
    None => unreachable!(),
};

/// Page pickers list every page up to this many pages, then compact.
const COMPACT_THRESHOLD: usize = 7;

/// 1-based inclusive bounds of the visible slice. `start` and `end` are zero
/// when the slice is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageButton::Page(n) => write!(f, "{}", n),
            PageButton::Ellipsis => f.write_str("..."),
        }
    }
}

pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// The `page`-th slice of `items`; empty when the page is out of range.
pub fn page_slice<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Bounds of the `page`-th slice; `start` and `end` are zero when the page
/// holds nothing, matching [`page_slice`].
pub fn pagination_info(count: usize, page: usize, page_size: NonZeroUsize) -> PaginationInfo {
    let size = page_size.get();
    let skipped = page.saturating_sub(1).saturating_mul(size);
    if page == 0 || skipped >= count {
        return PaginationInfo {
            start: 0,
            end: 0,
            total: count,
        };
    }
    PaginationInfo {
        start: skipped + 1,
        end: skipped.saturating_add(size).min(count),
        total: count,
    }
}

pub fn pagination_buttons(current: usize, total_pages: usize) -> Vec<PageButton> {
    if total_pages <= COMPACT_THRESHOLD {
        return (1..=total_pages).map(PageButton::Page).collect();
    }

    let mut buttons = vec![PageButton::Page(1)];
    if current > 3 {
        buttons.push(PageButton::Ellipsis);
    }
    let from = current.saturating_sub(1).max(2);
    let to = (current + 1).min(total_pages - 1);
    buttons.extend((from..=to).map(PageButton::Page));
    if current + 2 < total_pages {
        buttons.push(PageButton::Ellipsis);
    }
    buttons.push(PageButton::Page(total_pages));
    buttons
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    page_size: NonZeroUsize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pulls the current page back into `[1, max(1, total_pages)]`.
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    /// Returns whether the page changed. Out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page >= 1 && page <= total_pages {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.current_page < total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageButton::{Ellipsis, Page};

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, size(5)), 0);
        assert_eq!(total_pages(1, size(5)), 1);
        assert_eq!(total_pages(5, size(5)), 1);
        assert_eq!(total_pages(6, size(5)), 2);
        assert_eq!(total_pages(3, size(2)), 2);
    }

    #[test]
    fn slices_pages() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(page_slice(&items, 1, size(3)), &[1, 2, 3]);
        assert_eq!(page_slice(&items, 3, size(3)), &[7]);
        assert!(page_slice(&items, 4, size(3)).is_empty());
        assert!(page_slice(&items, 0, size(3)).is_empty());
        assert!(page_slice::<u32>(&[], 1, size(3)).is_empty());
    }

    #[test]
    fn info_on_last_partial_page() {
        assert_eq!(
            pagination_info(3, 2, size(2)),
            PaginationInfo {
                start: 3,
                end: 3,
                total: 3
            }
        );
    }

    #[test]
    fn info_is_zero_when_empty() {
        assert_eq!(
            pagination_info(0, 1, size(5)),
            PaginationInfo {
                start: 0,
                end: 0,
                total: 0
            }
        );
    }

    #[test]
    fn info_is_empty_outside_the_page_range() {
        let empty = PaginationInfo {
            start: 0,
            end: 0,
            total: 3,
        };
        assert_eq!(pagination_info(3, 5, size(2)), empty);
        assert_eq!(pagination_info(3, 0, size(2)), empty);
        assert_eq!(pagination_info(3, usize::MAX, size(2)), empty);
        assert_eq!(pagination_info(3, 2, size(usize::MAX)), empty);
        assert_eq!(
            pagination_info(3, 1, size(usize::MAX)),
            PaginationInfo {
                start: 1,
                end: 3,
                total: 3
            }
        );
    }

    #[test]
    fn info_agrees_with_slice() {
        let items: Vec<u32> = (1..=7).collect();
        for page in 0..=5 {
            let info = pagination_info(items.len(), page, size(3));
            let slice = page_slice(&items, page, size(3));
            let shown = if info.start == 0 {
                0
            } else {
                info.end - info.start + 1
            };
            assert_eq!(shown, slice.len(), "page {}", page);
        }
    }

    #[test]
    fn few_pages_list_every_button() {
        assert!(pagination_buttons(1, 0).is_empty());
        assert_eq!(pagination_buttons(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            pagination_buttons(4, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn compacts_around_the_middle() {
        assert_eq!(
            pagination_buttons(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn compacts_at_the_edges() {
        assert_eq!(
            pagination_buttons(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            pagination_buttons(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            pagination_buttons(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            pagination_buttons(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn navigation_ignores_out_of_range() {
        let mut state = PaginationState::new(size(5));
        assert!(!state.go_to_page(999, 1));
        assert!(!state.go_to_page(0, 1));
        assert_eq!(state.current_page(), 1);

        assert!(!state.previous_page());
        assert!(!state.next_page(1));
        assert_eq!(state.current_page(), 1);

        assert!(state.go_to_page(3, 3));
        assert!(!state.next_page(3));
        assert!(state.previous_page());
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn clamp_keeps_page_in_bounds() {
        let mut state = PaginationState::new(size(5));
        state.go_to_page(4, 4);
        state.clamp(2);
        assert_eq!(state.current_page(), 2);
        state.clamp(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn default_page_size_is_five() {
        assert_eq!(PaginationState::default().page_size().get(), 5);
    }
}
