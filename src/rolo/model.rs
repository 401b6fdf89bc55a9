use crate::error::RoloError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A contact record. The name is the key it is stored under, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub birthday: NaiveDate,
}

impl Contact {
    pub fn new(address: String, phone: String, email: String, birthday: NaiveDate) -> Self {
        Self {
            address,
            phone,
            email,
            birthday,
        }
    }
}

/// A contact paired with its name, as returned by searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub name: String,
    pub contact: Contact,
}

/// The next birthday of a contact that falls inside a window query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

/// Editable contact fields. The name is not editable: it is the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Address,
    Phone,
    Email,
    Birthday,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Address => "address",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
            ContactField::Birthday => "birthday",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = RoloError;

    /// Field names are matched exactly, so `Phone` is not a field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(ContactField::Address),
            "phone" => Ok(ContactField::Phone),
            "email" => Ok(ContactField::Email),
            "birthday" => Ok(ContactField::Birthday),
            other => Err(RoloError::InvalidField(other.to_string())),
        }
    }
}

/// Where a Feb 29 birthday lands in a year without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    #[default]
    Feb28,
    Mar1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_fields() {
        assert_eq!(
            "birthday".parse::<ContactField>().unwrap(),
            ContactField::Birthday
        );
        assert_eq!(
            "address".parse::<ContactField>().unwrap(),
            ContactField::Address
        );
    }

    #[test]
    fn rejects_unknown_or_miscased_fields() {
        assert!(matches!(
            "name".parse::<ContactField>(),
            Err(RoloError::InvalidField(f)) if f == "name"
        ));
        assert!("Phone".parse::<ContactField>().is_err());
    }

    #[test]
    fn contact_serializes_birthday_as_iso_date() {
        let contact = Contact::new(
            "1 Main St".into(),
            "1234567890".into(),
            "a@b.co".into(),
            NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
        );
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("\"birthday\":\"1990-05-01\""));
    }

    #[test]
    fn leap_day_policy_uses_lowercase_names() {
        let policy: LeapDayPolicy = serde_json::from_str("\"mar1\"").unwrap();
        assert_eq!(policy, LeapDayPolicy::Mar1);
        assert_eq!(LeapDayPolicy::default(), LeapDayPolicy::Feb28);
    }
}
