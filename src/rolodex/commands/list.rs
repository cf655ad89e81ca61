use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

/// List every contact, in insertion order.
pub fn run(book: &AddressBook) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_contacts(book.records().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn lists_contacts_in_insertion_order() {
        let book = BookFixture::new()
            .with_contact("Ben", "0501111111")
            .with_contact("Anna", "0502222222")
            .book;

        let result = run(&book).unwrap();
        let names: Vec<&str> = result.listed_contacts.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Ben", "Anna"]);
    }

    #[test]
    fn empty_book_lists_nothing() {
        let result = run(&AddressBook::new()).unwrap();
        assert!(result.listed_contacts.is_empty());
    }
}
