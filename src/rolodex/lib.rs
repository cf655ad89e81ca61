//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic contact book library** with a REPL client. The
//! interactive loop is a thin shell; everything it does goes through the same
//! layered core any other UI would use.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (view.rs + main.rs)                              │
//! │  - REPL loop, flag parsing, terminal rendering              │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the hydrated AddressBook                            │
//! │  - Persists after every mutating command                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, no I/O assumptions                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Storage (model.rs, book.rs, store/)                │
//! │  - Validated field types, the book, the ContactStore trait  │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, never touches stdout/stderr, and never assumes a
//! terminal. The [`view::View`] trait is the single presentation boundary,
//! and only the REPL in `main.rs` calls it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: Validated field types (`Name`, `Phone`, `Birthday`) and `Record`
//! - [`book`]: The `AddressBook` and the upcoming-birthday query
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`view`]: The presentation boundary and its console implementation
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod view;
