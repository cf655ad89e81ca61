//! The presentation boundary. The core (model, book, store, commands, api)
//! never calls into this module; the REPL in `main.rs` does, passing command
//! results through.

use crate::model::Record;
use std::io::{self, BufRead, Write};

/// A pluggable rendering and input surface.
pub trait View {
    /// Render a list of contacts
    fn display_contacts(&self, contacts: &[Record]);

    /// Render the command table, preserving the given order
    fn display_commands(&self, commands: &[(&str, &str)]);

    /// Render one line of text
    fn display_message(&self, message: &str);

    /// Render note-like lines (e.g. the upcoming-birthday report)
    fn display_notes(&self, notes: &[String]);

    /// Read one line of input given a prompt; `None` means end of input
    fn get_input(&self, prompt: &str) -> io::Result<Option<String>>;
}

/// Console implementation over stdout/stdin.
pub struct ConsoleView;

impl View for ConsoleView {
    fn display_contacts(&self, contacts: &[Record]) {
        if contacts.is_empty() {
            println!("No contacts saved.");
            return;
        }
        println!("Contacts:");
        for record in contacts {
            println!("{record}");
        }
    }

    fn display_commands(&self, commands: &[(&str, &str)]) {
        println!("\nCommands:");
        for (name, description) in commands {
            println!("{name}: {description}");
        }
    }

    fn display_message(&self, message: &str) {
        println!("{message}");
    }

    fn display_notes(&self, notes: &[String]) {
        for note in notes {
            println!("{note}");
        }
    }

    fn get_input(&self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod capture {
    use super::View;
    use crate::model::Record;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io;

    /// A view that records everything rendered and replays scripted input,
    /// for driving the REPL glue without a terminal.
    #[derive(Default)]
    pub struct CaptureView {
        pub output: RefCell<Vec<String>>,
        pub input: RefCell<VecDeque<String>>,
    }

    impl CaptureView {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_input(lines: &[&str]) -> Self {
            Self {
                output: RefCell::new(Vec::new()),
                input: RefCell::new(lines.iter().map(|l| l.to_string()).collect()),
            }
        }
    }

    impl View for CaptureView {
        fn display_contacts(&self, contacts: &[Record]) {
            let mut output = self.output.borrow_mut();
            if contacts.is_empty() {
                output.push("No contacts saved.".to_string());
                return;
            }
            output.push("Contacts:".to_string());
            for record in contacts {
                output.push(record.to_string());
            }
        }

        fn display_commands(&self, commands: &[(&str, &str)]) {
            let mut output = self.output.borrow_mut();
            for (name, description) in commands {
                output.push(format!("{name}: {description}"));
            }
        }

        fn display_message(&self, message: &str) {
            self.output.borrow_mut().push(message.to_string());
        }

        fn display_notes(&self, notes: &[String]) {
            self.output.borrow_mut().extend(notes.iter().cloned());
        }

        fn get_input(&self, _prompt: &str) -> io::Result<Option<String>> {
            Ok(self.input.borrow_mut().pop_front())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::capture::CaptureView;
    use super::View;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn contacts_render_one_line_each() {
        let book = BookFixture::new()
            .with_birthday_contact("Anna", "0501234567", "12.03.1990")
            .book;

        let view = CaptureView::new();
        view.display_contacts(book.records());

        let output = view.output.borrow();
        assert_eq!(
            *output,
            [
                "Contacts:",
                "Name: Anna, phone: 0501234567, birthday: 12.03.1990",
            ]
        );
    }

    #[test]
    fn empty_contact_list_has_a_placeholder() {
        let view = CaptureView::new();
        view.display_contacts(&[]);
        assert_eq!(*view.output.borrow(), ["No contacts saved."]);
    }

    #[test]
    fn scripted_input_ends_with_none() {
        let view = CaptureView::with_input(&["hello"]);
        assert_eq!(view.get_input("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(view.get_input("> ").unwrap(), None);
    }
}
