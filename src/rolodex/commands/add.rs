use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

/// Add a phone to a contact, creating the contact first if needed. The phone
/// is validated before a new record touches the book, so a bad number never
/// leaves a phoneless contact behind.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(CmdResult::default().with_message(CmdMessage::success("Contact updated.")));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(CmdResult::default().with_message(CmdMessage::success("Contact saved.")))
}
