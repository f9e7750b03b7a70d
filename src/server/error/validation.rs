//! Field-level validation errors.
//!
//! Services collect every problem with a payload into a single [`ValidationError`] so
//! clients can correct all fields at once instead of one round trip per mistake.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Key used for errors that concern the payload as a whole rather than one field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const BLANK_FIELD: &str = "This field may not be blank.";
pub const REQUIRED_FIELD: &str = "This field is required.";

/// Accumulated validation messages keyed by field name.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("Payload failed validation: {fields:?}")]
pub struct ValidationError {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    /// Creates an empty set of validation messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for an error carrying a single message for `field`.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add(field, message);
        err
    }

    /// Appends a message for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` when at least one message was recorded for `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    /// Converts the accumulated messages into a `Result`, `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: "Validation failed".to_string(),
                fields: self.fields,
            }),
        )
            .into_response()
    }
}
