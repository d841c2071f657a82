use crate::error::{Result, ShelfError};
use crate::model::BookRecord;
use crate::store::DataStore;

/// Finds the single book of `user` whose id starts with `prefix`.
///
/// Accepts both the hyphenated and the short (simple) id forms.
pub fn resolve_book<S: DataStore>(store: &S, user: &str, prefix: &str) -> Result<BookRecord> {
    let needle = prefix.replace('-', "").to_lowercase();
    if needle.is_empty() {
        return Err(ShelfError::Api("Book id cannot be empty".into()));
    }

    let mut matches: Vec<BookRecord> = store
        .fetch_books(user)?
        .into_iter()
        .filter(|b| b.id.simple().to_string().starts_with(&needle))
        .collect();

    match matches.len() {
        0 => Err(ShelfError::Api(format!("No book matches id {}", prefix))),
        1 => Ok(matches.remove(0)),
        n => Err(ShelfError::Api(format!(
            "Id {} is ambiguous ({} books match), use more characters",
            prefix, n
        ))),
    }
}
