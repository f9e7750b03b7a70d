use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request payload fails validation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorDto {
    /// Summary of the failure
    pub error: String,
    /// Messages keyed by the offending field, `non_field_errors` for the payload as a whole
    pub fields: BTreeMap<String, Vec<String>>,
}
