//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every client. It dispatches to `commands/*.rs`, fills in
//! session-level inputs (page size from config), and returns
//! `Result<CmdResult>`. It never prints.
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! `ShelfApi<FileStore>` in the binary, `ShelfApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::ReadingStatus;
use crate::store::DataStore;

pub struct ShelfApi<S: DataStore> {
    store: S,
    paths: commands::ShelfPaths,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S, paths: commands::ShelfPaths) -> Self {
        Self { store, paths }
    }

    pub fn list_books(&self, user: &str, query: ListQuery) -> Result<commands::CmdResult> {
        let config = ShelfConfig::load(&self.paths.data_dir)?;
        commands::list::run(&self.store, user, config.page_size, query)
    }

    pub fn book_stats(&self, user: &str) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, user)
    }

    pub fn add_book(&mut self, user: &str, book: NewBook) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, user, book)
    }

    pub fn mark_book(
        &mut self,
        user: &str,
        id_prefix: &str,
        status: ReadingStatus,
    ) -> Result<commands::CmdResult> {
        commands::mark::run(&mut self.store, user, id_prefix, status)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, ListQuery, MessageLevel, NewBook, PageSummary, ShelfPaths,
};
