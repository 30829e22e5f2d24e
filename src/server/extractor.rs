//! Axum extractor for validated JSON payloads
//!
//! `ValidatedJson<T>` parses the body and runs `validator` constraints before
//! the handler sees it. Both failures become a [`BlogError::Validation`],
//! so clients always get a 400 with the uniform error body.

use crate::core::{BlogError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Axum extractor that deserializes and validates a JSON body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_blog(
///     ValidatedJson(payload): ValidatedJson<NewBlog>,
/// ) -> BlogResult<Json<Blog>> {
///     // payload passed its constraints
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = BlogError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<T> =
            Json::from_request(req, state)
                .await
                .map_err(|rejection: JsonRejection| {
                    tracing::warn!(error = %rejection.body_text(), "rejected JSON payload");
                    BlogError::from(ValidationError::InvalidJson {
                        message: rejection.body_text(),
                    })
                })?;

        payload.validate().inspect_err(|errors| {
            tracing::warn!(%errors, "payload failed validation");
        })?;

        Ok(ValidatedJson(payload))
    }
}
