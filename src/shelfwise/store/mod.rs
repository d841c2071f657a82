//! # Storage Layer
//!
//! The list view never fetches anything itself: it is handed a collection
//! of [`BookRecord`]s that some data-access collaborator already loaded.
//! [`DataStore`] is that collaborator's interface.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single `books.json` array in the data directory,
//!   shared by every user and filtered on read.
//! - [`memory::InMemoryStore`]: no persistence; the stub used by tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── books.json      # JSON array of book records (camelCase keys)
//! └── config.json     # ShelfConfig
//! ```

use crate::error::Result;
use crate::model::BookRecord;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for book storage.
pub trait DataStore {
    /// All books owned by `user_id`, in storage order.
    fn fetch_books(&self, user_id: &str) -> Result<Vec<BookRecord>>;

    /// Get a book by ID
    fn get_book(&self, id: &Uuid) -> Result<BookRecord>;

    /// Save a book (create or update)
    fn save_book(&mut self, book: &BookRecord) -> Result<()>;
}
