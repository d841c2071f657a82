use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use crate::view::status_counts;

/// Dashboard numbers: how many books sit under each status.
pub fn run<S: DataStore>(store: &S, user: &str) -> Result<CmdResult> {
    let books = store.fetch_books(user)?;
    Ok(CmdResult::default().with_counts(status_counts(&books)))
}
