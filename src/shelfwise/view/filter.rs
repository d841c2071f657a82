use crate::model::{BookRecord, ReadingStatus};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Status half of the filter. `All` is the "no status filter" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReadingStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: &ReadingStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        let status = s.parse::<ReadingStatus>()?;
        Ok(StatusFilter::Only(status))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub status: StatusFilter,
    /// Matched as-is against title and author. Not trimmed: a query of
    /// spaces only matches records that contain those spaces.
    pub query: String,
}

impl FilterState {
    pub fn matches(&self, book: &BookRecord) -> bool {
        self.status.matches(&book.status) && query_matches(&self.query, book)
    }
}

fn query_matches(query: &str, book: &BookRecord) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    book.title.to_lowercase().contains(&needle) || book.author.to_lowercase().contains(&needle)
}

/// Keeps the records accepted by `filter`, in input order.
pub fn filter_books(books: &[BookRecord], filter: &FilterState) -> Vec<BookRecord> {
    books
        .iter()
        .filter(|book| filter.matches(book))
        .cloned()
        .collect()
}
