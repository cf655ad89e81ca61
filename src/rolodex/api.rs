//! # API Facade
//!
//! [`RolodexApi`] is the single entry point for all operations, regardless of
//! the UI driving it. It owns the hydrated [`AddressBook`] and the store, and
//! it enforces the persistence contract: the book is loaded once at
//! [`open`](RolodexApi::open), written back after every mutating command, and
//! written one final time at [`close`](RolodexApi::close).
//!
//! The facade holds no business logic (that lives in `commands/*.rs`) and
//! performs no terminal I/O.

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::ContactStore;

/// The main API facade. Generic over [`ContactStore`] so tests can run
/// against [`InMemoryStore`](crate::store::memory::InMemoryStore).
pub struct RolodexApi<S: ContactStore> {
    store: S,
    book: AddressBook,
}

impl<S: ContactStore> RolodexApi<S> {
    /// Hydrate the book from the store. A missing or empty store yields an
    /// empty book; corrupt data is fatal here.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self { store, book })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.book, name, phone)?;
        self.store.save(&self.book)?;
        Ok(result)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<commands::CmdResult> {
        let result = commands::change::run(&mut self.book, name, old, new)?;
        self.store.save(&self.book)?;
        Ok(result)
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.book, name)?;
        self.store.save(&self.book)?;
        Ok(result)
    }

    pub fn add_birthday(&mut self, name: &str, raw: &str) -> Result<commands::CmdResult> {
        let result = commands::birthday::add(&mut self.book, name, raw)?;
        self.store.save(&self.book)?;
        Ok(result)
    }

    pub fn show_phone(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    pub fn upcoming_birthdays(&self, days: i64) -> Result<commands::CmdResult> {
        commands::birthday::upcoming(&self.book, days)
    }

    /// Final persist on the explicit exit path.
    pub fn close(mut self) -> Result<()> {
        self.store.save(&self.book)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn mutating_commands_persist_immediately() {
        let mut api = RolodexApi::open(InMemoryStore::new()).unwrap();
        api.add_contact("Anna", "0501234567").unwrap();

        // A fresh api over the same store sees the contact: the add was
        // persisted, not batched for close().
        let RolodexApi { store, .. } = api;
        let api = RolodexApi::open(store).unwrap();
        assert!(api.book().find("Anna").is_some());
    }

    #[test]
    fn failed_commands_do_not_persist() {
        let mut api = RolodexApi::open(InMemoryStore::new()).unwrap();
        assert!(api.add_contact("Anna", "bad").is_err());

        let RolodexApi { store, .. } = api;
        let api = RolodexApi::open(store).unwrap();
        assert!(api.book().is_empty());
    }

    #[test]
    fn read_commands_reach_the_hydrated_book() {
        let mut api = RolodexApi::open(InMemoryStore::new()).unwrap();
        api.add_contact("Anna", "0501234567").unwrap();
        api.add_birthday("Anna", "12.03.1990").unwrap();

        let result = api.show_birthday("Anna").unwrap();
        assert_eq!(result.messages[0].content, "Anna's birthday is 12.03.1990.");
        assert_eq!(api.list_contacts().unwrap().listed_contacts.len(), 1);
    }
}
