//! Field-keyed validation errors.
//!
//! Every failed write path reports a [`ValidationError`]: an ordered map from
//! field name to one or more human readable messages. Errors that are not tied
//! to a single field (password mismatch, bad credentials) live under
//! [`NON_FIELD_ERRORS`].
//!
//! ```json
//! {
//!   "email": ["Enter a valid email address."],
//!   "non_field_errors": ["Passwords don't match"]
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Key used for object-level errors.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Message reported for a required field missing from the input.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Key the `validator` crate uses for schema-level errors.
const SCHEMA_ERRORS: &str = "__all__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationError {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error with a single message attached to `field`.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut error = Self::new();
        error.add(field, message);
        error
    }

    /// Error with a single object-level message.
    pub fn non_field(message: impl Into<String>) -> Self {
        Self::field(NON_FIELD_ERRORS, message)
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn merge(&mut self, other: ValidationError) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for `field`, empty if the field is valid.
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// `Ok(value)` when no error has been recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .errors
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", rendered)
    }
}

impl std::error::Error for ValidationError {}

impl From<&validator::ValidationErrors> for ValidationError {
    fn from(errors: &validator::ValidationErrors) -> Self {
        let mut result = Self::new();

        for (field, field_errors) in errors.field_errors() {
            let key = if field == SCHEMA_ERRORS {
                NON_FIELD_ERRORS
            } else {
                &*field
            };

            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", key));
                result.add(key, message);
            }
        }

        result
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::from(&errors)
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        let error_msg = err.to_string();

        if let Some(field) = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
        {
            return Self::field(field, REQUIRED_MESSAGE);
        }

        if error_msg.contains("invalid type") {
            return Self::non_field("Invalid field type in request");
        }

        if error_msg.contains("unknown variant") {
            return Self::non_field("Invalid choice in request");
        }

        Self::non_field("Invalid request body")
    }
}
