use crate::config::ShelfConfig;
use crate::model::{BookRecord, ReadingStatus};
use crate::view::{
    PageButton, PaginationInfo, SortDirection, SortState, StatusCounts, StatusFilter,
};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod helpers;
pub mod init;
pub mod list;
pub mod mark;
pub mod stats;

#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Everything a client needs to render one page of the book list.
#[derive(Debug, Clone)]
pub struct PageSummary {
    pub status: StatusFilter,
    pub query: String,
    pub sort: SortState,
    pub current_page: usize,
    pub total_pages: usize,
    pub info: PaginationInfo,
    pub buttons: Vec<PageButton>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<BookRecord>,
    pub listed_books: Vec<BookRecord>,
    pub page: Option<PageSummary>,
    pub counts: Option<StatusCounts>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<BookRecord>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<BookRecord>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_page(mut self, page: PageSummary) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_counts(mut self, counts: StatusCounts) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Control inputs for one rendering of the book list.
///
/// Applied in order: status, search, sort, page. A `sort_column` without a
/// `direction` behaves like clicking the column header once.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub status: StatusFilter,
    pub search: Option<String>,
    pub sort_column: Option<String>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub status: ReadingStatus,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, status: ReadingStatus) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            status,
        }
    }
}
