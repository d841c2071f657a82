use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::BookRecord;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const BOOKS_FILENAME: &str = "books.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn books_path(&self) -> PathBuf {
        self.root.join(BOOKS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<BookRecord>> {
        let path = self.books_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(ShelfError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let books: Vec<BookRecord> =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        tracing::debug!(path = %path.display(), count = books.len(), "loaded books");
        Ok(books)
    }

    fn save_all(&self, books: &[BookRecord]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;
        fs::write(self.books_path(), content).map_err(ShelfError::Io)?;
        tracing::debug!(count = books.len(), "saved books");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn fetch_books(&self, user_id: &str) -> Result<Vec<BookRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|b| b.user_id == user_id)
            .collect())
    }

    fn get_book(&self, id: &Uuid) -> Result<BookRecord> {
        self.load_all()?
            .into_iter()
            .find(|b| b.id == *id)
            .ok_or(ShelfError::BookNotFound(*id))
    }

    fn save_book(&mut self, book: &BookRecord) -> Result<()> {
        let mut books = self.load_all()?;
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }
        self.save_all(&books)
    }
}
