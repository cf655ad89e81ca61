use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RolodexError};
use crate::model::Phone;

/// Show a contact's phone numbers.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| RolodexError::NotFound(format!("Contact not found: {name}")))?;
    let numbers: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "The phone number for {name} is {}.",
        numbers.join(", ")
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn lists_all_numbers() {
        let mut book = BookFixture::new().with_contact("Anna", "0501234567").book;
        book.find_mut("Anna").unwrap().add_phone("0507654321").unwrap();

        let result = run(&book, "Anna").unwrap();
        assert_eq!(
            result.messages[0].content,
            "The phone number for Anna is 0501234567, 0507654321."
        );
    }

    #[test]
    fn unknown_contact_is_not_found() {
        let book = AddressBook::new();
        assert!(matches!(
            run(&book, "Anna"),
            Err(RolodexError::NotFound(_))
        ));
    }
}
