//! # Storage Layer
//!
//! The [`ContactStore`] trait is the durable-store boundary: the whole
//! address book goes in and out as one blob. The book is hydrated once at
//! startup and written back after every mutating command, so the contract is
//! deliberately coarse.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file at a configurable
//!   path, replaced atomically on save
//! - [`memory::InMemoryStore`]: in-memory storage for testing, no persistence

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait ContactStore {
    /// Read the whole book. A missing or empty location yields a fresh empty
    /// book; only structurally corrupt data is an error.
    fn load(&self) -> Result<AddressBook>;

    /// Persist the whole book, replacing any previous save.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
