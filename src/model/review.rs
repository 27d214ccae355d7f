//! Review payloads and the validation schema applied to them.
//!
//! The same `CreateReviewDto::validate` runs in the browser before a submission is sent and
//! on the server before anything is persisted, so both sides agree on what a valid review is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::discord::{deserialize_u64_from_string, serialize_u64_as_string};

/// Lowest rating a review may carry.
pub const MIN_RATING: i32 = 0;

/// Highest rating a review may carry, also the number of stars rendered.
pub const MAX_RATING: i32 = 5;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Review submission as entered in the form.
///
/// `Default` yields the initial form state: no server selected, zero stars, empty description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateReviewDto {
    /// Guild id of the reviewed server, as selected in the form.
    pub server_id: String,
    pub rating: i32,
    pub description: String,
}

/// A persisted review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDto {
    pub id: i32,
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    pub guild_id: u64,
    pub rating: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Fields of a review submission that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewField {
    ServerId,
    Rating,
    Description,
}

/// Per-field validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(ReviewField, String)>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message attached to `field`, if any.
    pub fn get(&self, field: ReviewField) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    /// Attaches `message` to `field`, replacing a previous message for that field.
    pub fn insert(&mut self, field: ReviewField, message: impl Into<String>) {
        let message = message.into();
        match self.errors.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = message,
            None => self.errors.push((field, message)),
        }
    }

    pub fn remove(&mut self, field: ReviewField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReviewField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|(_, m)| m.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl CreateReviewDto {
    /// Validates every field and collects all violations.
    ///
    /// Whether `server_id` names an existing server can only be checked by the server, so
    /// this only requires it to be non-empty.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for field in [
            ReviewField::ServerId,
            ReviewField::Rating,
            ReviewField::Description,
        ] {
            if let Some(message) = self.check(field) {
                errors.insert(field, message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates a single field, returning its message when invalid.
    pub fn check(&self, field: ReviewField) -> Option<&'static str> {
        match field {
            ReviewField::ServerId if self.server_id.trim().is_empty() => Some("Select a server"),
            ReviewField::Rating if !(MIN_RATING..=MAX_RATING).contains(&self.rating) => {
                Some("Rating must be between 0 and 5")
            }
            ReviewField::Description
                if self.description.chars().count() > MAX_DESCRIPTION_LENGTH =>
            {
                Some("Description must be at most 1000 characters")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateReviewDto {
        CreateReviewDto {
            server_id: "123456789".to_string(),
            rating: 4,
            description: "Helpful moderators".to_string(),
        }
    }

    #[test]
    fn accepts_valid_submission() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn accepts_rating_bounds_and_empty_description() {
        for rating in [MIN_RATING, MAX_RATING] {
            let dto = CreateReviewDto {
                rating,
                description: String::new(),
                ..valid()
            };
            assert!(dto.validate().is_ok(), "rating {} should be valid", rating);
        }
    }

    #[test]
    fn rejects_empty_server_id() {
        let dto = CreateReviewDto {
            server_id: "   ".to_string(),
            ..valid()
        };

        let errors = dto.validate().unwrap_err();

        assert_eq!(errors.get(ReviewField::ServerId), Some("Select a server"));
        assert_eq!(errors.get(ReviewField::Rating), None);
    }

    #[test]
    fn rejects_rating_out_of_range() {
        for rating in [-1, 6, i32::MAX] {
            let dto = CreateReviewDto {
                rating,
                ..valid()
            };
            let errors = dto.validate().unwrap_err();
            assert_eq!(
                errors.get(ReviewField::Rating),
                Some("Rating must be between 0 and 5")
            );
        }
    }

    #[test]
    fn counts_description_length_in_characters() {
        let at_limit = CreateReviewDto {
            description: "ż".repeat(MAX_DESCRIPTION_LENGTH),
            ..valid()
        };
        assert!(at_limit.validate().is_ok());

        let over_limit = CreateReviewDto {
            description: "a".repeat(MAX_DESCRIPTION_LENGTH + 1),
            ..valid()
        };
        assert!(over_limit
            .validate()
            .unwrap_err()
            .get(ReviewField::Description)
            .is_some());
    }

    #[test]
    fn collects_every_violation() {
        let dto = CreateReviewDto {
            server_id: String::new(),
            rating: 9,
            description: String::new(),
        };

        let errors = dto.validate().unwrap_err();

        assert_eq!(errors.iter().count(), 2);
        assert_eq!(
            errors.to_string(),
            "Select a server; Rating must be between 0 and 5"
        );
    }

    #[test]
    fn insert_replaces_existing_message() {
        let mut errors = ValidationErrors::default();
        errors.insert(ReviewField::ServerId, "first");
        errors.insert(ReviewField::ServerId, "second");

        assert_eq!(errors.get(ReviewField::ServerId), Some("second"));
        assert_eq!(errors.iter().count(), 1);

        errors.remove(ReviewField::ServerId);
        assert!(errors.is_empty());
    }
}
