//! # Contact Book
//!
//! An in-memory mapping from contact name to [`Contact`]. The book enforces
//! the record invariants (every stored phone, email and birthday has passed
//! validation) but knows nothing about persistence: the API layer saves the
//! whole map after each successful mutation.
//!
//! Names are unique keys. Adding an existing name silently replaces the old
//! record, and there is no rename: delete and add again instead.
//!
//! The map is a `BTreeMap`, so searches and window queries report contacts in
//! ascending name order, and that order survives a save/load cycle.

use crate::error::{Result, RoloError, ValidationError};
use crate::model::{Contact, ContactEntry, ContactField, LeapDayPolicy, UpcomingBirthday};
use crate::validate::{parse_date, validate_email, validate_phone};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactBook {
    contacts: BTreeMap<String, Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(contacts: BTreeMap<String, Contact>) -> Self {
        Self { contacts }
    }

    pub fn as_map(&self) -> &BTreeMap<String, Contact> {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Validates birthday, then phone, then email, and inserts the record.
    ///
    /// The first failing check is reported; nothing is stored in that case.
    pub fn add(
        &mut self,
        name: &str,
        address: &str,
        phone: &str,
        email: &str,
        birthday: &str,
    ) -> Result<()> {
        let birthday = parse_date(birthday).ok_or(ValidationError::Birthday)?;
        if !validate_phone(phone) {
            return Err(ValidationError::Phone.into());
        }
        if !validate_email(email) {
            return Err(ValidationError::Email.into());
        }

        let contact = Contact::new(
            address.to_string(),
            phone.to_string(),
            email.to_string(),
            birthday,
        );
        self.contacts.insert(name.to_string(), contact);
        Ok(())
    }

    /// Case-insensitive substring match against contact names only.
    pub fn search(&self, query: &str) -> Vec<ContactEntry> {
        let query = query.to_lowercase();
        self.contacts
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&query))
            .map(|(name, contact)| ContactEntry {
                name: name.clone(),
                contact: contact.clone(),
            })
            .collect()
    }

    /// Contacts whose next birthday is between 0 and `window_days` days from
    /// `today`, both ends inclusive.
    pub fn upcoming_birthdays(
        &self,
        window_days: u32,
        today: NaiveDate,
        policy: LeapDayPolicy,
    ) -> Vec<UpcomingBirthday> {
        let window = i64::from(window_days);
        self.contacts
            .iter()
            .filter_map(|(name, contact)| {
                let date = next_occurrence(contact.birthday, today, policy)?;
                let days_away = (date - today).num_days();
                (0..=window).contains(&days_away).then(|| UpcomingBirthday {
                    name: name.clone(),
                    date,
                })
            })
            .collect()
    }

    /// Returns whether a contact was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        self.contacts.remove(name).is_some()
    }

    /// Replaces one field of an existing contact.
    ///
    /// The contact is looked up first, then the field name, then the value is
    /// validated with the same rules as [`ContactBook::add`]. Addresses are
    /// free text.
    pub fn edit(&mut self, name: &str, field: &str, value: &str) -> Result<ContactField> {
        let contact = self
            .contacts
            .get_mut(name)
            .ok_or_else(|| RoloError::ContactNotFound(name.to_string()))?;
        let field: ContactField = field.parse()?;

        match field {
            ContactField::Address => contact.address = value.to_string(),
            ContactField::Phone => {
                if !validate_phone(value) {
                    return Err(ValidationError::Phone.into());
                }
                contact.phone = value.to_string();
            }
            ContactField::Email => {
                if !validate_email(value) {
                    return Err(ValidationError::Email.into());
                }
                contact.email = value.to_string();
            }
            ContactField::Birthday => {
                contact.birthday = parse_date(value).ok_or(ValidationError::Birthday)?;
            }
        }
        Ok(field)
    }
}

/// The first anniversary of `birthday` on or after `today`.
///
/// Returns `None` only when the date cannot be represented (years far
/// outside chrono's range).
pub fn next_occurrence(
    birthday: NaiveDate,
    today: NaiveDate,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, today.year(), policy)?;
    if this_year >= today {
        Some(this_year)
    } else {
        anniversary_in(birthday, today.year() + 1, policy)
    }
}

fn anniversary_in(birthday: NaiveDate, year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        // Only Feb 29 can be missing from a year.
        match policy {
            LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book_with(entries: &[(&str, &str)]) -> ContactBook {
        let mut book = ContactBook::new();
        for (name, birthday) in entries {
            book.add(name, "Somewhere 1", "1234567890", "x@y.com", birthday)
                .unwrap();
        }
        book
    }

    #[test]
    fn add_then_search_returns_all_fields() {
        let mut book = ContactBook::new();
        book.add("Alice", "123 St", "1234567890", "alice@x.com", "1990-05-01")
            .unwrap();

        let found = book.search("Alice");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alice");
        assert_eq!(found[0].contact.address, "123 St");
        assert_eq!(found[0].contact.phone, "1234567890");
        assert_eq!(found[0].contact.email, "alice@x.com");
        assert_eq!(found[0].contact.birthday, date(1990, 5, 1));
    }

    #[test]
    fn add_reports_birthday_before_phone_before_email() {
        let mut book = ContactBook::new();
        let err = book.add("A", "", "bad", "bad", "bad").unwrap_err();
        assert!(matches!(
            err,
            RoloError::Validation(ValidationError::Birthday)
        ));

        let err = book.add("A", "", "bad", "bad", "1990-01-01").unwrap_err();
        assert!(matches!(err, RoloError::Validation(ValidationError::Phone)));

        let err = book
            .add("A", "", "1234567890", "bad", "1990-01-01")
            .unwrap_err();
        assert!(matches!(err, RoloError::Validation(ValidationError::Email)));

        assert!(book.is_empty());
    }

    #[test]
    fn add_with_existing_name_overwrites_silently() {
        let mut book = ContactBook::new();
        book.add("Bob", "Old Rd", "1111111111", "bob@old.com", "1980-01-01")
            .unwrap();
        book.add("Bob", "New Rd", "2222222222", "bob@new.com", "1981-02-02")
            .unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Bob").unwrap().address, "New Rd");
    }

    #[test]
    fn search_is_case_insensitive_on_names_only() {
        let mut book = ContactBook::new();
        book.add("Alice", "Bobby Lane", "1234567890", "a@x.com", "1990-05-01")
            .unwrap();
        book.add("Alfred", "Elm", "1234567890", "b@x.com", "1990-05-01")
            .unwrap();

        let names: Vec<_> = book.search("AL").into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Alfred", "Alice"]);
        assert!(book.search("bobby").is_empty());
    }

    #[test]
    fn delete_absent_name_leaves_book_unchanged() {
        let mut book = book_with(&[("Alice", "1990-05-01")]);
        let before = book.clone();

        assert!(!book.delete("Mallory"));
        assert_eq!(book, before);

        assert!(book.delete("Alice"));
        assert!(book.is_empty());
    }

    #[test]
    fn edit_updates_a_single_field() {
        let mut book = book_with(&[("Alice", "1990-05-01")]);
        let field = book.edit("Alice", "email", "alice@new.org").unwrap();

        assert_eq!(field, ContactField::Email);
        let alice = book.get("Alice").unwrap();
        assert_eq!(alice.email, "alice@new.org");
        assert_eq!(alice.phone, "1234567890");
    }

    #[test]
    fn edit_address_is_free_text() {
        let mut book = book_with(&[("Alice", "1990-05-01")]);
        book.edit("Alice", "address", "").unwrap();
        assert_eq!(book.get("Alice").unwrap().address, "");
    }

    #[test]
    fn edit_with_invalid_phone_keeps_old_value() {
        let mut book = book_with(&[("Alice", "1990-05-01")]);
        let err = book.edit("Alice", "phone", "12-34").unwrap_err();

        assert!(matches!(err, RoloError::Validation(ValidationError::Phone)));
        assert_eq!(book.get("Alice").unwrap().phone, "1234567890");
    }

    #[test]
    fn edit_birthday_is_validated() {
        let mut book = book_with(&[("Alice", "1990-05-01")]);
        assert!(book.edit("Alice", "birthday", "1990-02-30").is_err());
        book.edit("Alice", "birthday", "1991-06-15").unwrap();
        assert_eq!(book.get("Alice").unwrap().birthday, date(1991, 6, 15));
    }

    #[test]
    fn edit_reports_missing_contact_before_bad_field() {
        let mut book = book_with(&[("Alice", "1990-05-01")]);
        assert!(matches!(
            book.edit("Zed", "nickname", "z"),
            Err(RoloError::ContactNotFound(n)) if n == "Zed"
        ));
        assert!(matches!(
            book.edit("Alice", "nickname", "z"),
            Err(RoloError::InvalidField(f)) if f == "nickname"
        ));
    }

    #[test]
    fn window_includes_today_and_both_edges() {
        let today = date(2024, 6, 10);
        let book = book_with(&[
            ("Today", "1990-06-10"),
            ("Edge", "1985-06-17"),
            ("Beyond", "1985-06-18"),
        ]);

        let upcoming = book.upcoming_birthdays(7, today, LeapDayPolicy::Feb28);
        let names: Vec<_> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Edge", "Today"]);
        assert_eq!(upcoming[1].date, today);
        assert_eq!(upcoming[0].date, date(2024, 6, 17));
    }

    #[test]
    fn past_birthdays_roll_into_next_year() {
        let today = date(2024, 12, 30);
        let book = book_with(&[("NewYear", "2000-01-02"), ("Gone", "2000-12-29")]);

        let upcoming = book.upcoming_birthdays(5, today, LeapDayPolicy::Feb28);
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "NewYear".into(),
                date: date(2025, 1, 2),
            }]
        );

        let year = book.upcoming_birthdays(365, today, LeapDayPolicy::Feb28);
        let gone = year.iter().find(|u| u.name == "Gone").unwrap();
        assert_eq!(gone.date, date(2025, 12, 29));
    }

    #[test]
    fn zero_window_only_matches_today() {
        let today = date(2024, 3, 5);
        let book = book_with(&[("A", "1970-03-05"), ("B", "1970-03-06")]);
        let upcoming = book.upcoming_birthdays(0, today, LeapDayPolicy::Feb28);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "A");
    }

    #[test]
    fn leap_day_birthday_follows_policy_in_common_years() {
        let leapling = date(2000, 2, 29);

        let today = date(2025, 2, 1);
        assert_eq!(
            next_occurrence(leapling, today, LeapDayPolicy::Feb28),
            Some(date(2025, 2, 28))
        );
        assert_eq!(
            next_occurrence(leapling, today, LeapDayPolicy::Mar1),
            Some(date(2025, 3, 1))
        );

        // In a leap year the real date is used.
        let today = date(2028, 2, 1);
        assert_eq!(
            next_occurrence(leapling, today, LeapDayPolicy::Feb28),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn leap_day_birthday_rolls_into_a_leap_year() {
        // 2027-03-01 is after the common-year stand-in, so the next one is 2028.
        let today = date(2027, 3, 1);
        assert_eq!(
            next_occurrence(date(1996, 2, 29), today, LeapDayPolicy::Feb28),
            Some(date(2028, 2, 29))
        );
        assert_eq!(
            next_occurrence(date(1996, 2, 29), today, LeapDayPolicy::Mar1),
            Some(date(2027, 3, 1))
        );
    }
}
