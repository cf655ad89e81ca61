use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

/// Replace one of a contact's phone numbers in place.
pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| RolodexError::NotFound(format!("Contact not found: {name}")))?;
    record.edit_phone(old, new)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Contact updated.")))
}
