use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::BookRecord;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    // insertion order doubles as storage order
    books: Vec<BookRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookRecord>) -> Self {
        Self { books }
    }
}

impl DataStore for InMemoryStore {
    fn fetch_books(&self, user_id: &str) -> Result<Vec<BookRecord>> {
        Ok(self
            .books
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    fn get_book(&self, id: &Uuid) -> Result<BookRecord> {
        self.books
            .iter()
            .find(|b| b.id == *id)
            .cloned()
            .ok_or(ShelfError::BookNotFound(*id))
    }

    fn save_book(&mut self, book: &BookRecord) -> Result<()> {
        match self.books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => self.books.push(book.clone()),
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ReadingStatus;
    use chrono::{Duration, TimeZone, Utc};

    pub const USER: &str = "reader";

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_day: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_day: 0,
            }
        }

        /// Adds a book for [`USER`]. Each book is added one day after the
        /// previous one, so "date added" ordering is deterministic.
        pub fn with_book(mut self, title: &str, author: &str, status: ReadingStatus) -> Self {
            let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
            let mut book = BookRecord::new(USER, title, author, status);
            book.created_at = base + Duration::days(self.next_day);
            book.updated_at = book.created_at;
            self.next_day += 1;
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn with_books(mut self, count: usize, status: ReadingStatus) -> Self {
            for i in 0..count {
                let title = format!("Test Book {}", i + 1);
                self = self.with_book(&title, "Test Author", status.clone());
            }
            self
        }

        pub fn with_foreign_book(mut self, user: &str, title: &str) -> Self {
            let book = BookRecord::new(user, title, "Someone Else", ReadingStatus::Reading);
            self.store.save_book(&book).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{StoreFixture, USER};
    use super::*;
    use crate::model::ReadingStatus;

    #[test]
    fn fetch_only_returns_the_users_books() {
        let fixture = StoreFixture::new()
            .with_book("Mine", "A", ReadingStatus::Reading)
            .with_foreign_book("someone", "Theirs");

        let books = fixture.store.fetch_books(USER).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Mine");
    }

    #[test]
    fn save_updates_in_place() {
        let mut fixture = StoreFixture::new()
            .with_book("First", "A", ReadingStatus::Reading)
            .with_book("Second", "B", ReadingStatus::Reading);
        let mut book = fixture.store.fetch_books(USER).unwrap()[0].clone();
        book.status = ReadingStatus::Finished;
        fixture.store.save_book(&book).unwrap();

        let books = fixture.store.fetch_books(USER).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].status, ReadingStatus::Finished);
        assert_eq!(books[1].title, "Second");
    }

    #[test]
    fn missing_book_is_an_error() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.get_book(&id),
            Err(ShelfError::BookNotFound(missing)) if missing == id
        ));
    }
}
