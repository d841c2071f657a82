use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ReadingStatus;
use crate::store::DataStore;
use chrono::Utc;

use super::helpers::resolve_book;

/// Moves a book to `status`. The update time doubles as the "date read"
/// once a book is finished.
pub fn run<S: DataStore>(
    store: &mut S,
    user: &str,
    id_prefix: &str,
    status: ReadingStatus,
) -> Result<CmdResult> {
    let mut book = resolve_book(store, user, id_prefix)?;
    let mut result = CmdResult::default();

    if book.status == status {
        result.add_message(CmdMessage::info(format!(
            "\"{}\" is already {}",
            book.title, status
        )));
        return Ok(result.with_affected_books(vec![book]));
    }

    let previous = std::mem::replace(&mut book.status, status);
    book.updated_at = Utc::now();
    store.save_book(&book)?;
    tracing::debug!(id = %book.id, from = %previous, to = %book.status, "status changed");

    result.add_message(CmdMessage::success(format!(
        "\"{}\": {} -> {}",
        book.title, previous, book.status
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{StoreFixture, USER};

    #[test]
    fn marks_book_finished_and_bumps_update_time() {
        let mut fixture = StoreFixture::new().with_book("Dune", "Herbert", ReadingStatus::Reading);
        let before = fixture.store.fetch_books(USER).unwrap()[0].clone();

        let result = run(
            &mut fixture.store,
            USER,
            &before.short_id(),
            ReadingStatus::Finished,
        )
        .unwrap();

        let after = fixture.store.get_book(&before.id).unwrap();
        assert_eq!(after.status, ReadingStatus::Finished);
        assert!(after.updated_at > before.updated_at);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(result.affected_books[0].id, before.id);
    }

    #[test]
    fn same_status_is_reported_not_saved() {
        let mut fixture = StoreFixture::new().with_book("Dune", "Herbert", ReadingStatus::Reading);
        let before = fixture.store.fetch_books(USER).unwrap()[0].clone();

        let result = run(
            &mut fixture.store,
            USER,
            &before.short_id(),
            ReadingStatus::Reading,
        )
        .unwrap();

        assert!(result.messages[0].content.contains("already Reading"));
        let after = fixture.store.get_book(&before.id).unwrap();
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut fixture = StoreFixture::new().with_book("Dune", "Herbert", ReadingStatus::Reading);
        assert!(run(&mut fixture.store, USER, "zzzz", ReadingStatus::Finished).is_err());
    }
}
