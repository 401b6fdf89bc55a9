use colored::Colorize;
use rolo::api::{CmdMessage, MessageLevel};
use rolo::model::{ContactEntry, UpcomingBirthday};
use std::io::{self, Write};

pub(super) fn format_contact(entry: &ContactEntry) -> String {
    let c = &entry.contact;
    format!(
        "Name: {}, Address: {}, Phone: {}, Email: {}, Birthday: {}",
        entry.name,
        c.address,
        c.phone,
        c.email,
        c.birthday.format("%Y-%m-%d")
    )
}

pub(super) fn format_birthday(upcoming: &UpcomingBirthday) -> String {
    format!(
        "Name: {}, Birthday: {}",
        upcoming.name,
        upcoming.date.format("%Y-%m-%d")
    )
}

fn paint(level: MessageLevel, text: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match level {
        MessageLevel::Success => text.green().to_string(),
        MessageLevel::Warning => text.yellow().to_string(),
        MessageLevel::Error => text.red().to_string(),
    }
}

pub(super) fn print_messages<W: Write>(
    out: &mut W,
    messages: &[CmdMessage],
    color: bool,
) -> io::Result<()> {
    for message in messages {
        writeln!(out, "{}", paint(message.level, &message.content, color))?;
    }
    Ok(())
}

pub(super) fn print_contacts<W: Write>(out: &mut W, contacts: &[ContactEntry]) -> io::Result<()> {
    if contacts.is_empty() {
        return writeln!(out, "No contacts found.");
    }
    for entry in contacts {
        writeln!(out, "{}", format_contact(entry))?;
    }
    Ok(())
}

pub(super) fn print_birthdays<W: Write>(
    out: &mut W,
    birthdays: &[UpcomingBirthday],
) -> io::Result<()> {
    if birthdays.is_empty() {
        return writeln!(out, "No upcoming birthdays.");
    }
    for upcoming in birthdays {
        writeln!(out, "{}", format_birthday(upcoming))?;
    }
    Ok(())
}

pub(super) fn print_notes<W: Write>(out: &mut W, notes: &[String]) -> io::Result<()> {
    if notes.is_empty() {
        return writeln!(out, "No notes found.");
    }
    for note in notes {
        writeln!(out, "{}", note.trim())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rolo::model::Contact;

    #[test]
    fn contact_line_lists_every_field() {
        let entry = ContactEntry {
            name: "Alice".into(),
            contact: Contact::new(
                "123 St".into(),
                "1234567890".into(),
                "alice@x.com".into(),
                NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            ),
        };
        assert_eq!(
            format_contact(&entry),
            "Name: Alice, Address: 123 St, Phone: 1234567890, Email: alice@x.com, Birthday: 1990-05-01"
        );
    }

    #[test]
    fn birthday_line_uses_iso_date() {
        let upcoming = UpcomingBirthday {
            name: "Bob".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        };
        assert_eq!(format_birthday(&upcoming), "Name: Bob, Birthday: 2025-01-02");
    }

    #[test]
    fn empty_listings_say_so() {
        let mut out = Vec::new();
        print_contacts(&mut out, &[]).unwrap();
        print_birthdays(&mut out, &[]).unwrap();
        print_notes(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No contacts found.\nNo upcoming birthdays.\nNo notes found.\n"
        );
    }

    #[test]
    fn uncolored_messages_are_plain() {
        let mut out = Vec::new();
        print_messages(
            &mut out,
            &[CmdMessage::success("Note added."), CmdMessage::error("Note not found.")],
            false,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Note added.\nNote not found.\n");
    }
}
