//! The address book and its upcoming-birthday query.
//!
//! Records keep their insertion order; every listing (including the birthday
//! query) iterates in that order rather than sorting.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RolodexError};
use crate::model::{Record, BIRTHDAY_FORMAT};

/// Insertion-ordered collection of records, unique by name string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Insert a record under its name. An existing record with the same name
    /// is silently replaced (no merge), keeping its original position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    /// Exact-name lookup. Never errors.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|pos| &self.records[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(move |pos| &mut self.records[pos])
    }

    /// Remove a record by name. Deleting an absent name is an error, not a
    /// no-op.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let pos = self
            .position(name)
            .ok_or_else(|| RolodexError::NotFound(format!("Contact not found: {name}")))?;
        self.records.remove(pos);
        Ok(())
    }

    /// Birthdays falling within the next `days` days, formatted one line per
    /// contact. See [`upcoming_birthdays_on`](Self::upcoming_birthdays_on)
    /// for the algorithm.
    pub fn get_upcoming_birthdays(&self, days: i64) -> Vec<String> {
        self.upcoming_birthdays_on(Local::now().date_naive(), days)
    }

    /// The query against an explicit `today`, so the window logic is
    /// deterministic under test.
    ///
    /// For each record with a birthday: project the birthday onto this year,
    /// roll to next year if it already passed, keep it when `days_until` is
    /// within `[0, days]` inclusive, then shift a Saturday or Sunday
    /// occurrence to the following Monday. The shifted date is what gets
    /// reported; it is not re-checked against the window.
    pub fn upcoming_birthdays_on(&self, today: NaiveDate, days: i64) -> Vec<String> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let mut occurrence = project_onto(birthday.date(), today.year());
            if occurrence < today {
                occurrence = project_onto(birthday.date(), today.year() + 1);
            }
            let days_until = (occurrence - today).num_days();
            if !(0..=days).contains(&days_until) {
                continue;
            }
            let from_monday = i64::from(occurrence.weekday().num_days_from_monday());
            if from_monday >= 5 {
                occurrence = occurrence + Duration::days(7 - from_monday);
            }
            upcoming.push(format!(
                "Name: {}, birthday: {}",
                record.name(),
                occurrence.format(BIRTHDAY_FORMAT)
            ));
        }

        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

/// Project a birthday onto `year`. Feb 29 clamps to Feb 28 when `year` has
/// no leap day.
fn project_onto(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .expect("Feb 28 exists in every year")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn record(name: &str, birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone("0501234567").unwrap();
        if let Some(raw) = birthday {
            record.add_birthday(raw).unwrap();
        }
        record
    }

    fn march_10_2024() -> NaiveDate {
        // A Sunday.
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn add_record_replaces_same_name_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", None));
        book.add_record(record("Ben", None));
        book.add_record(record("Anna", Some("12.03.1990")));

        assert_eq!(book.len(), 2);
        assert_eq!(book.records()[0].name(), "Anna");
        assert!(book.records()[0].birthday().is_some());
    }

    #[test]
    fn find_is_exact_and_silent() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", None));
        assert!(book.find("Anna").is_some());
        assert!(book.find("anna").is_none());
        assert!(book.find("Ann").is_none());
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", None));
        assert!(matches!(
            book.delete("Ben"),
            Err(RolodexError::NotFound(_))
        ));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn delete_removes_exactly_one_entry() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", None));
        book.add_record(record("Ben", None));
        book.add_record(record("Cid", None));

        book.delete("Ben").unwrap();
        let names: Vec<&str> = book.records().iter().map(Record::name).collect();
        assert_eq!(names, ["Anna", "Cid"]);
    }

    #[test]
    fn weekday_birthday_in_window_is_unshifted() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", Some("12.03.1990")));

        let lines = book.upcoming_birthdays_on(march_10_2024(), 7);
        assert_eq!(lines, ["Name: Anna, birthday: 12.03.2024"]);
    }

    #[test]
    fn saturday_birthday_shifts_to_monday() {
        // 16.03.2024 is a Saturday, six days out: inside the window, and the
        // reported date moves to Monday the 18th even though that lands
        // outside the original window.
        let mut book = AddressBook::new();
        book.add_record(record("Ben", Some("16.03.1985")));

        let lines = book.upcoming_birthdays_on(march_10_2024(), 7);
        assert_eq!(lines, ["Name: Ben, birthday: 18.03.2024"]);
    }

    #[test]
    fn todays_birthday_counts_and_sunday_shifts_by_one() {
        // today itself is a Sunday, so days_until is 0 and the report shifts
        // to Monday.
        let mut book = AddressBook::new();
        book.add_record(record("Dora", Some("10.03.1999")));

        let lines = book.upcoming_birthdays_on(march_10_2024(), 7);
        assert_eq!(lines, ["Name: Dora, birthday: 11.03.2024"]);
    }

    #[test]
    fn yesterdays_birthday_rolls_a_full_year_ahead() {
        let mut book = AddressBook::new();
        book.add_record(record("Cid", Some("09.03.1970")));

        let lines = book.upcoming_birthdays_on(march_10_2024(), 7);
        assert!(lines.is_empty());
    }

    #[test]
    fn out_of_window_birthday_is_excluded() {
        let mut book = AddressBook::new();
        book.add_record(record("Eve", Some("20.03.1970")));

        assert!(book.upcoming_birthdays_on(march_10_2024(), 7).is_empty());
        assert_eq!(book.upcoming_birthdays_on(march_10_2024(), 10).len(), 1);
    }

    #[test]
    fn leap_day_clamps_to_feb_28_in_non_leap_years() {
        let mut book = AddressBook::new();
        book.add_record(record("Leap", Some("29.02.2000")));

        // 2025 has no Feb 29; the occurrence clamps to Friday the 28th.
        let today = NaiveDate::from_ymd_opt(2025, 2, 24).unwrap();
        let lines = book.upcoming_birthdays_on(today, 7);
        assert_eq!(lines, ["Name: Leap, birthday: 28.02.2025"]);
    }

    #[test]
    fn results_follow_insertion_order_not_date_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Late", Some("14.03.1990")));
        book.add_record(record("Early", Some("11.03.1990")));

        let lines = book.upcoming_birthdays_on(march_10_2024(), 7);
        assert_eq!(
            lines,
            [
                "Name: Late, birthday: 14.03.2024",
                "Name: Early, birthday: 11.03.2024",
            ]
        );
    }

    #[test]
    fn records_without_birthdays_are_skipped() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", None));
        assert!(book.upcoming_birthdays_on(march_10_2024(), 7).is_empty());
    }
}
