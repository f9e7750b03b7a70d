use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::Error;

/// Request body extractor accepting JSON or form-encoded payloads
///
/// Bodies sent as `application/x-www-form-urlencoded` are parsed like [`axum::Form`], anything
/// else like [`axum::Json`]. Rejections render as the application's 400 error response instead of
/// axum's plain text rejection.
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form_encoded(&req) {
            let Form(value) = Form::<T>::from_request(req, state).await?;

            return Ok(Payload(value));
        }

        let Json(value) = Json::<T>::from_request(req, state).await?;

        Ok(Payload(value))
    }
}

fn is_form_encoded(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}
