//! The birthday command family: set, show, and the upcoming-birthday report.

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};

/// Set a contact's birthday. An existing birthday is overwritten.
pub fn add(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| RolodexError::NotFound(format!("Contact not found: {name}")))?;
    record.add_birthday(raw)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Birthday added.")))
}

/// Show a contact's birthday, if one is set.
pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| RolodexError::NotFound(format!("Contact not found: {name}")))?;
    let message = match record.birthday() {
        Some(birthday) => CmdMessage::info(format!("{name}'s birthday is {birthday}.")),
        None => CmdMessage::info(format!("{name} has no birthday set.")),
    };
    Ok(CmdResult::default().with_message(message))
}

/// Report birthdays falling within the next `days` days.
pub fn upcoming(book: &AddressBook, days: i64) -> Result<CmdResult> {
    let lines = book.get_upcoming_birthdays(days);
    if lines.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No upcoming birthdays.")));
    }
    Ok(CmdResult::default().with_lines(lines))
}
