//! Contact form input, validated submissions and persisted records.

use super::{ContactDomainError, SubmissionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Message body.
    Message,
}

impl ContactField {
    /// Every field, in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Returns the JSON field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Maximum length in characters, matching the `VARCHAR(100)` columns.
    ///
    /// The message body is stored as `TEXT` and has no limit.
    #[must_use]
    pub const fn max_chars(self) -> Option<usize> {
        match self {
            Self::Name | Self::Email => Some(100),
            Self::Message => None,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw contact form payload as received from a client.
///
/// Absent and `null` fields both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    /// Sender name.
    pub name: Option<String>,
    /// Sender email address.
    pub email: Option<String>,
    /// Message body.
    pub message: Option<String>,
}

impl ContactForm {
    /// Creates a form with all three fields present.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    /// Validates the form into a submission ready for persistence.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDomainError::MissingFields`] listing every absent or
    /// empty field, or [`ContactDomainError::FieldTooLong`] when a field
    /// exceeds its column length.
    pub fn validate(self) -> Result<NewContactSubmission, ContactDomainError> {
        NewContactSubmission::new(
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.message.unwrap_or_default(),
        )
    }
}

/// A validated submission that has not been persisted yet.
///
/// All three fields are non-empty. Values are kept exactly as submitted;
/// the email address is only checked for presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl NewContactSubmission {
    /// Creates a validated submission.
    ///
    /// # Errors
    ///
    /// Returns [`ContactDomainError::MissingFields`] when any field is empty
    /// and [`ContactDomainError::FieldTooLong`] when a field exceeds its
    /// column length.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ContactDomainError> {
        let submission = Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        };

        let missing: Vec<ContactField> = ContactField::ALL
            .into_iter()
            .filter(|field| submission.field(*field).is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ContactDomainError::MissingFields(missing));
        }

        for field in ContactField::ALL {
            if let Some(max) = field.max_chars()
                && submission.field(field).chars().count() > max
            {
                return Err(ContactDomainError::FieldTooLong { field, max });
            }
        }

        Ok(submission)
    }

    /// Returns the value of the given field.
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Returns the sender name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sender email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Field values loaded from storage, bypassing validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSubmissionData {
    /// Store-assigned identifier.
    pub id: SubmissionId,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// A persisted contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    id: SubmissionId,
    name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Combines a validated submission with its store-assigned identity.
    #[must_use]
    pub fn new(
        id: SubmissionId,
        submission: NewContactSubmission,
        created_at: DateTime<Utc>,
    ) -> Self {
        let NewContactSubmission {
            name,
            email,
            message,
        } = submission;
        Self {
            id,
            name,
            email,
            message,
            created_at,
        }
    }

    /// Reconstructs a submission from stored values.
    #[must_use]
    pub fn from_persisted(data: PersistedSubmissionData) -> Self {
        let PersistedSubmissionData {
            id,
            name,
            email,
            message,
            created_at,
        } = data;
        Self {
            id,
            name,
            email,
            message,
            created_at,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> SubmissionId {
        self.id
    }

    /// Returns the sender name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sender email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the insertion timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
