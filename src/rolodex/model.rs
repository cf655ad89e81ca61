use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, RolodexError};

/// Textual form used for all birthday I/O (display, parsing, persistence).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Contact name. Non-empty, immutable once constructed; its string value is
/// the address book key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(RolodexError::Validation("Name cannot be empty.".to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = RolodexError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly 10 ASCII digits, stored as entered. Separators are
/// not stripped; "050-123-4567" is a validation failure, not a normalization
/// candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        if raw.len() != 10 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RolodexError::Validation(
                "Phone must contain exactly 10 digits".to_string(),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = RolodexError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> String {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, parsed from the exact `DD.MM.YYYY` pattern and stored as a
/// date, not as the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self> {
        // chrono accepts unpadded day/month for %d.%m, so the two-digit
        // shape is checked up front.
        if !well_formed(raw) {
            return Err(invalid_birthday());
        }
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| invalid_birthday())?;
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

fn well_formed(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
}

fn invalid_birthday() -> RolodexError {
    RolodexError::Validation("Birthday must be in the format DD.MM.YYYY.".to_string())
}

impl TryFrom<String> for Birthday {
    type Error = RolodexError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> String {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// One contact: an immutable name, an ordered set of phones (unique by string
/// value), and at most one birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// A record starts with a validated name only; a bad name aborts
    /// construction entirely.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Add a phone. Adding a value already present is a no-op, not an error.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::new(raw)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<()> {
        let pos = self
            .position(raw)
            .ok_or_else(|| RolodexError::NotFound(format!("Phone not found: {raw}")))?;
        self.phones.remove(pos);
        Ok(())
    }

    /// Replace `old` with a validated `new` value in place, keeping its
    /// position in the list. Fails without touching the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self
            .position(old)
            .ok_or_else(|| RolodexError::NotFound(format!("Old phone not found: {old}")))?;
        self.phones[pos] = Phone::new(new)?;
        Ok(())
    }

    /// Set the birthday; an existing one is overwritten without complaint.
    pub fn add_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    fn position(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Name: {}, phone: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {birthday}")?;
        }
        Ok(())
    }
}
