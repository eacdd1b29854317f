use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seeking {
    #[default]
    #[serde(rename = "")]
    Unselected,
    Friendship,
    Networking,
    Mentorship,
    Community,
}

impl Seeking {
    pub const OPTIONS: [Seeking; 4] = [
        Seeking::Friendship,
        Seeking::Networking,
        Seeking::Mentorship,
        Seeking::Community,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Seeking::Unselected => "",
            Seeking::Friendship => "friendship",
            Seeking::Networking => "networking",
            Seeking::Mentorship => "mentorship",
            Seeking::Community => "community",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Seeking::Unselected => "Select an option",
            Seeking::Friendship => "Genuine friendship",
            Seeking::Networking => "Professional networking",
            Seeking::Mentorship => "Mentorship",
            Seeking::Community => "A trusted community",
        }
    }

    /// Maps a `<select>` value back; anything unknown counts as no selection.
    pub fn from_value(value: &str) -> Self {
        Self::OPTIONS
            .into_iter()
            .find(|option| option.value() == value)
            .unwrap_or_default()
    }
}

/// The form fields of an access request, as typed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    pub full_name: String,
    /// Raw text from the number input; parsed during validation.
    pub age: String,
    pub location: String,
    pub seeking: Seeking,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Age,
    Location,
    Seeking,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Age => "age",
            Field::Location => "location",
            Field::Seeking => "seeking",
            Field::Message => "message",
        }
    }
}

impl AccessRequest {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Age => self.age = value,
            Field::Location => self.location = value,
            Field::Seeking => self.seeking = Seeking::from_value(&value),
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Please enter a valid full name")]
    FullName,
    #[error("You must be 18 or older to request access")]
    Age,
    #[error("Please enter your location")]
    Location,
    #[error("Please select what you are seeking from YAG")]
    Seeking,
    #[error("Please provide a brief message (at least 10 characters)")]
    Message,
}

impl Violation {
    pub fn field(self) -> Field {
        match self {
            Violation::FullName => Field::FullName,
            Violation::Age => Field::Age,
            Violation::Location => Field::Location,
            Violation::Seeking => Field::Seeking,
            Violation::Message => Field::Message,
        }
    }
}

/// Violations in field order. Empty means the request can go out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The only violation shown to the user.
    pub fn first(&self) -> Option<Violation> {
        self.violations.first().copied()
    }
}

const MIN_AGE: f64 = 18.0;

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn age_ok(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .map_or(false, |age| age.is_finite() && age >= MIN_AGE)
}

pub fn validate(request: &AccessRequest) -> ValidationResult {
    let checks = [
        (trimmed_len(&request.full_name) >= 2, Violation::FullName),
        (age_ok(&request.age), Violation::Age),
        (trimmed_len(&request.location) >= 2, Violation::Location),
        (request.seeking != Seeking::Unselected, Violation::Seeking),
        (trimmed_len(&request.message) >= 10, Violation::Message),
    ];
    ValidationResult {
        violations: checks
            .into_iter()
            .filter(|(ok, _)| !ok)
            .map(|(_, violation)| violation)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(full_name: &str, age: &str, location: &str, seeking: Seeking, message: &str) -> AccessRequest {
        AccessRequest {
            full_name: full_name.to_string(),
            age: age.to_string(),
            location: location.to_string(),
            seeking,
            message: message.to_string(),
        }
    }

    #[test]
    fn minimal_valid_request_passes() {
        let result = validate(&request("Jo", "18", "NY", Seeking::Friendship, "1234567890"));
        assert!(result.is_valid());
        assert_eq!(result.first(), None);
    }

    #[test]
    fn all_bad_fields_report_name_first() {
        let result = validate(&request("J", "17", "", Seeking::Unselected, "short"));
        assert!(!result.is_valid());
        assert_eq!(result.first(), Some(Violation::FullName));
        assert_eq!(
            result.violations,
            vec![
                Violation::FullName,
                Violation::Age,
                Violation::Location,
                Violation::Seeking,
                Violation::Message
            ]
        );
    }

    #[test]
    fn whitespace_does_not_count_towards_length() {
        let result = validate(&request("  J  ", "30", "  L ", Seeking::Community, "   too short   "));
        assert_eq!(
            result.violations,
            vec![Violation::FullName, Violation::Location, Violation::Message]
        );
    }

    #[test]
    fn age_must_be_numeric_and_adult() {
        for bad in ["", "abc", "17.9", "NaN", "-20"] {
            let result = validate(&request("Jo", bad, "NY", Seeking::Mentorship, "1234567890"));
            assert_eq!(result.first(), Some(Violation::Age), "age {:?}", bad);
        }
        let result = validate(&request("Jo", " 42 ", "NY", Seeking::Mentorship, "1234567890"));
        assert!(result.is_valid());
    }

    #[test]
    fn violation_messages_are_user_facing() {
        assert_eq!(Violation::Age.to_string(), "You must be 18 or older to request access");
        assert_eq!(Violation::Seeking.field().name(), "seeking");
    }

    #[test]
    fn seeking_round_trips_through_select_values() {
        for option in Seeking::OPTIONS {
            assert_eq!(Seeking::from_value(option.value()), option);
        }
        assert_eq!(Seeking::from_value("bogus"), Seeking::Unselected);
    }

    #[test]
    fn serializes_with_form_field_names() {
        let json = serde_json::to_value(request("Jo", "18", "NY", Seeking::Friendship, "hello there"))
            .expect("serialize");
        assert_eq!(json["fullName"], "Jo");
        assert_eq!(json["seeking"], "friendship");
        assert!(json.get("full_name").is_none());
    }

    #[test]
    fn setting_and_clearing_fields() {
        let mut form = AccessRequest::default();
        form.set(Field::FullName, "Ada".into());
        form.set(Field::Seeking, "networking".into());
        assert_eq!(form.seeking, Seeking::Networking);
        form.clear();
        assert_eq!(form, AccessRequest::default());
    }
}
