use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Remove a contact by name.
pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    book.delete(name)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Contact deleted.")))
}
