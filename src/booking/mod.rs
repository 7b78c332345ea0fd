//! Catering booking form
//!
//! Holds the visitor's draft and acknowledges submissions. Nothing is
//! persisted or sent anywhere: a submission is written to the log, one
//! acknowledgment is shown, and the draft is cleared.

use serde::Serialize;

use crate::logger;

/// Message shown once per accepted submission
pub const ACKNOWLEDGMENT: &str = "Thank you for your message! We'll get back to you soon.";

/// Receives the acknowledgment for an accepted submission
pub trait Notifier {
    fn acknowledge(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn acknowledge(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Email,
    Phone,
    EventType,
    EventDate,
    GuestCount,
    Message,
}

impl BookingField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::EventType,
        Self::EventDate,
        Self::GuestCount,
        Self::Message,
    ];

    /// Fields the browser refuses to submit empty
    pub const REQUIRED: [Self; 2] = [Self::Name, Self::Email];

    /// HTML form control name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::EventType => "eventType",
            Self::EventDate => "eventDate",
            Self::GuestCount => "guestCount",
            Self::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

/// Event type options, in display order
pub const EVENT_TYPES: [(&str, &str); 5] = [
    ("corporate", "Corporate Event"),
    ("wedding", "Wedding"),
    ("birthday", "Birthday Party"),
    ("private", "Private Dinner"),
    ("other", "Other"),
];

/// Uncommitted field values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_date: String,
    pub guest_count: String,
    pub message: String,
}

impl BookingDraft {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Email => &self.email,
            BookingField::Phone => &self.phone,
            BookingField::EventType => &self.event_type,
            BookingField::EventDate => &self.event_date,
            BookingField::GuestCount => &self.guest_count,
            BookingField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: BookingField) -> &mut String {
        match field {
            BookingField::Name => &mut self.name,
            BookingField::Email => &mut self.email,
            BookingField::Phone => &mut self.phone,
            BookingField::EventType => &mut self.event_type,
            BookingField::EventDate => &mut self.event_date,
            BookingField::GuestCount => &mut self.guest_count,
            BookingField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        BookingField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Acknowledged; carries the draft as it was submitted
    Accepted(BookingDraft),
    /// A required field is empty; nothing happened
    Blocked { missing: Vec<BookingField> },
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    draft: BookingDraft,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Bind one control's value; unknown control names are ignored
    pub fn update(&mut self, name: &str, value: &str) -> bool {
        let Some(field) = BookingField::from_name(name) else {
            logger::log_debug(&format!("Ignoring unknown booking field: {name}"));
            return false;
        };
        *self.draft.slot(field) = value.to_string();
        true
    }

    pub fn missing_required(&self) -> Vec<BookingField> {
        BookingField::REQUIRED
            .into_iter()
            .filter(|f| self.draft.get(*f).is_empty())
            .collect()
    }

    pub fn submit(&mut self, notifier: &mut impl Notifier) -> SubmitOutcome {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return SubmitOutcome::Blocked { missing };
        }

        let submitted = std::mem::take(&mut self.draft);
        match serde_json::to_string(&submitted) {
            Ok(json) => logger::log_info(&format!("Booking form submitted: {json}")),
            Err(e) => logger::log_warning(&format!("Booking form submitted, unserializable: {e}")),
        }
        notifier.acknowledge(ACKNOWLEDGMENT);
        SubmitOutcome::Accepted(submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new();
        form.update("name", "Ada Obi");
        form.update("email", "ada@example.com");
        form.update("phone", "555-0100");
        form.update("eventType", "wedding");
        form.update("eventDate", "2025-06-14");
        form.update("guestCount", "120");
        form.update("message", "Outdoor reception");
        form
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in BookingField::ALL {
            assert_eq!(BookingField::from_name(field.name()), Some(field));
        }
        assert_eq!(BookingField::from_name("event_type"), None);
        assert!(BookingField::Email.is_required());
        assert!(!BookingField::Phone.is_required());
    }

    #[test]
    fn test_update_binds_fields() {
        let form = filled_form();
        assert_eq!(form.draft().event_type, "wedding");
        assert_eq!(form.draft().guest_count, "120");

        let mut form = BookingForm::new();
        assert!(!form.update("creditCard", "4111"));
        assert!(form.draft().is_empty());
    }

    #[test]
    fn test_submit_acknowledges_once_and_resets() {
        let mut form = filled_form();
        let mut notices: Vec<String> = Vec::new();

        let outcome = form.submit(&mut notices);
        let SubmitOutcome::Accepted(draft) = outcome else {
            panic!("expected accepted submission");
        };
        assert_eq!(draft.name, "Ada Obi");
        assert_eq!(notices, vec![ACKNOWLEDGMENT.to_string()]);
        for field in BookingField::ALL {
            assert_eq!(form.draft().get(field), "");
        }
    }

    #[test]
    fn test_submit_blocked_without_required_fields() {
        let mut form = BookingForm::new();
        form.update("name", "Ada Obi");
        form.update("message", "Hello");
        let mut notices: Vec<String> = Vec::new();

        assert_eq!(
            form.submit(&mut notices),
            SubmitOutcome::Blocked {
                missing: vec![BookingField::Email]
            }
        );
        assert!(notices.is_empty());
        // draft untouched
        assert_eq!(form.draft().message, "Hello");
    }

    #[test]
    fn test_missing_required_lists_both() {
        let form = BookingForm::new();
        assert_eq!(
            form.missing_required(),
            vec![BookingField::Name, BookingField::Email]
        );
    }

    #[test]
    fn test_only_required_fields_is_enough() {
        let mut form = BookingForm::new();
        form.update("name", "Kofi");
        form.update("email", "kofi@example.com");
        let mut notices: Vec<String> = Vec::new();
        assert!(matches!(form.submit(&mut notices), SubmitOutcome::Accepted(_)));
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn test_draft_serializes_with_form_names() {
        let json = serde_json::to_value(filled_form().draft()).unwrap();
        assert_eq!(json["eventType"], "wedding");
        assert_eq!(json["guestCount"], "120");
        assert_eq!(json["eventDate"], "2025-06-14");
    }
}
