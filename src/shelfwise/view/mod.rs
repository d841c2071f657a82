//! # Book List View
//!
//! The "My Books" list is a one-way pipeline:
//!
//! ```text
//! source ──▶ filter ──▶ sort ──▶ paginate ──▶ rows
//!   │          │          │          │
//!   │     FilterState  SortState  PaginationState
//!   └──▶ status counts (unfiltered)
//! ```
//!
//! Each stage is a pure function in its own module, usable on its own.
//! [`BookListView`] owns the source collection plus the control state and
//! wires the stages together: every mutation recomputes the filtered and
//! sorted collection eagerly, keeps it until the next mutation, and pulls
//! the current page back into range.
//!
//! Nothing here fails. Out-of-range pages and unknown sort columns are
//! ignored, and an empty source simply yields empty pages.

use crate::model::BookRecord;
use std::num::NonZeroUsize;

pub mod counts;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use counts::{status_counts, StatusCounts};
pub use filter::{filter_books, FilterState, StatusFilter};
pub use paginate::{
    page_slice, pagination_buttons, pagination_info, total_pages, PageButton, PaginationInfo,
    PaginationState, DEFAULT_PAGE_SIZE,
};
pub use sort::{sort_books, sort_books_by, SortColumn, SortDirection, SortState};

#[derive(Debug, Clone)]
pub struct BookListView {
    books: Vec<BookRecord>,
    filter: FilterState,
    sort: SortState,
    pagination: PaginationState,
    // filtered + sorted, rebuilt on every mutation
    visible: Vec<BookRecord>,
}

impl Default for BookListView {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

impl BookListView {
    pub fn new(books: Vec<BookRecord>, page_size: NonZeroUsize) -> Self {
        let mut view = Self {
            books,
            filter: FilterState::default(),
            sort: SortState::default(),
            pagination: PaginationState::new(page_size),
            visible: Vec::new(),
        };
        view.recompute();
        view
    }

    /// Replaces the source collection, keeping the control state.
    pub fn set_books(&mut self, books: Vec<BookRecord>) {
        self.books = books;
        self.recompute();
    }

    pub fn select_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.pagination.reset();
        self.recompute();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.pagination.reset();
        self.recompute();
    }

    /// Toggles by column identifier. Unknown identifiers are ignored.
    pub fn toggle_sort(&mut self, column_id: &str) -> bool {
        match column_id.parse::<SortColumn>() {
            Ok(column) => {
                self.toggle_sort_column(column);
                true
            }
            Err(_) => {
                tracing::debug!(column_id, "ignoring unknown sort column");
                false
            }
        }
    }

    pub fn toggle_sort_column(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.recompute();
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let moved = self.pagination.go_to_page(page, self.total_pages());
        if !moved {
            tracing::debug!(page, total_pages = self.total_pages(), "page out of range");
        }
        moved
    }

    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous_page()
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pagination.next_page(total)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.pagination.page_size()
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn filtered_count(&self) -> usize {
        self.visible.len()
    }

    /// The filtered and sorted collection, across all pages.
    pub fn sorted_books(&self) -> &[BookRecord] {
        &self.visible
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible.len(), self.page_size())
    }

    pub fn page_rows(&self) -> &[BookRecord] {
        page_slice(&self.visible, self.current_page(), self.page_size())
    }

    pub fn pagination_info(&self) -> PaginationInfo {
        pagination_info(self.visible.len(), self.current_page(), self.page_size())
    }

    pub fn pagination_buttons(&self) -> Vec<PageButton> {
        pagination_buttons(self.current_page(), self.total_pages())
    }

    pub fn status_counts(&self) -> StatusCounts {
        status_counts(&self.books)
    }

    fn recompute(&mut self) {
        let filtered = filter_books(&self.books, &self.filter);
        self.visible = sort_books(filtered, &self.sort);
        self.pagination.clamp(self.total_pages());
        tracing::debug!(
            source = self.books.len(),
            visible = self.visible.len(),
            page = self.current_page(),
            "recomputed book list"
        );
    }
}
