//! Request extractors that reject with [`AppError`] JSON bodies instead of
//! Axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body that is deserialized and then checked with [`Validate`].
///
/// A malformed or missing body and a body that fails validation both
/// reject with `VALIDATION_ERROR`.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;

        value
            .validate()
            .map_err(|errors| AppError::Core(CoreError::Validation(describe(&errors))))?;

        Ok(Self(value))
    }
}

/// Name the failing fields in a stable order.
fn describe(errors: &ValidationErrors) -> String {
    let fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    invalid_fields_message(fields)
}

/// The `VALIDATION_ERROR` message listing `fields`, sorted.
pub(crate) fn invalid_fields_message<F: AsRef<str> + Ord>(mut fields: Vec<F>) -> String {
    fields.sort_unstable();
    let names: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();
    format!("Missing or invalid fields: {}", names.join(", "))
}

/// A single integer `{id}` path segment.
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(id))
    }
}
