//! # Shelfwise Architecture
//!
//! Shelfwise is a **UI-agnostic book-tracking library**. The `shelf` binary is
//! one client of it; a web front end or a TUI would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, formats output, owns stdout and exit   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade over commands, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)          View (view/)             │
//! │  - Business logic per command      - filter → sort → page   │
//! │                                    - status counts          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr, calls
//! `std::process::exit`, or assumes a terminal. Diagnostics go through
//! `tracing`; the binary decides whether anyone is listening.
//!
//! ## The list view
//!
//! [`view::BookListView`] is the heart of the crate: it takes a user's
//! books, already fetched, and derives the visible page from four control
//! inputs (status, search text, sort column and direction, current page)
//! and a fixed page size. See the [`view`] module docs for the pipeline.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`view`]: The list pipeline and its state
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`BookRecord`, `ReadingStatus`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod view;
