//! Parsing raw request input into validated DTOs.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::errors::ValidationError;

/// A DTO that has been decoded from JSON and passed its `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedInput<T>(pub T);

impl<T> ValidatedInput<T>
where
    T: DeserializeOwned + Validate,
{
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let dto: T = serde_json::from_value(value)?;
        dto.validate()?;
        Ok(ValidatedInput(dto))
    }

    pub fn from_json(body: &str) -> Result<Self, ValidationError> {
        let dto: T = serde_json::from_str(body)?;
        dto.validate()?;
        Ok(ValidatedInput(dto))
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}
