use crate::commands::{CmdMessage, CmdResult, NewBook};
use crate::error::{Result, ShelfError};
use crate::model::BookRecord;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, user: &str, new_book: NewBook) -> Result<CmdResult> {
    let title = new_book.title.trim();
    let author = new_book.author.trim();
    if title.is_empty() {
        return Err(ShelfError::Api("Title cannot be empty".into()));
    }
    if author.is_empty() {
        return Err(ShelfError::Api("Author cannot be empty".into()));
    }

    let book = BookRecord::new(user, title, author, new_book.status);
    store.save_book(&book)?;
    tracing::debug!(id = %book.id, user, "added book");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {} \"{}\" as {}",
        book.short_id(),
        book.title,
        book.status
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReadingStatus;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_trimmed_book_for_user() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            "me",
            NewBook::new("  Dune ", "Frank Herbert", ReadingStatus::Reading),
        )
        .unwrap();

        assert_eq!(result.affected_books.len(), 1);
        let books = store.fetch_books("me").unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].status, ReadingStatus::Reading);
    }

    #[test]
    fn rejects_blank_title_or_author() {
        let mut store = InMemoryStore::new();
        assert!(run(&mut store, "me", NewBook::new(" ", "A", ReadingStatus::Reading)).is_err());
        assert!(run(&mut store, "me", NewBook::new("T", "", ReadingStatus::Reading)).is_err());
        assert!(store.fetch_books("me").unwrap().is_empty());
    }
}
