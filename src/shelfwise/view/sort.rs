use crate::model::BookRecord;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortColumn {
    Title,
    Author,
    Status,
    DateRead,
    #[default]
    DateAdded,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Title,
        SortColumn::Author,
        SortColumn::Status,
        SortColumn::DateRead,
        SortColumn::DateAdded,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SortColumn::Title => "title",
            SortColumn::Author => "author",
            SortColumn::Status => "status",
            SortColumn::DateRead => "dateRead",
            SortColumn::DateAdded => "dateAdded",
        }
    }

    fn key(&self, book: &BookRecord) -> SortKey {
        match self {
            SortColumn::Title => SortKey::Text(book.title.to_lowercase()),
            SortColumn::Author => SortKey::Text(book.author.to_lowercase()),
            SortColumn::Status => SortKey::Text(book.status.label().to_lowercase()),
            SortColumn::DateRead => {
                if book.status.is_complete() {
                    SortKey::Time(book.updated_at.timestamp_millis())
                } else {
                    SortKey::Time(0)
                }
            }
            SortColumn::DateAdded => SortKey::Time(book.created_at.timestamp_millis()),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.id() == s)
            .ok_or_else(|| format!("Unknown sort column: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Same column flips direction; a new column starts descending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = SortDirection::Desc;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Time(i64),
}

/// Orders `books` by the active column. Equal keys keep their input order.
pub fn sort_books(mut books: Vec<BookRecord>, sort: &SortState) -> Vec<BookRecord> {
    let column = sort.column;
    match sort.direction {
        SortDirection::Asc => books.sort_by_cached_key(|book| column.key(book)),
        SortDirection::Desc => books.sort_by_cached_key(|book| Reverse(column.key(book))),
    }
    books
}

/// Like [`sort_books`], but takes a raw column identifier. Unknown
/// identifiers leave the input untouched.
pub fn sort_books_by(
    books: Vec<BookRecord>,
    column_id: &str,
    direction: SortDirection,
) -> Vec<BookRecord> {
    match column_id.parse::<SortColumn>() {
        Ok(column) => sort_books(books, &SortState::new(column, direction)),
        Err(_) => {
            tracing::debug!(column_id, "ignoring unknown sort column");
            books
        }
    }
}
