//! Extractors that report rejections in the API's `{"error": "..."}` shape.
//!
//! axum's own [`Path`] and [`Json`] rejections answer with plain text; these
//! wrappers keep the error body uniform across every endpoint.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;

use super::tournaments::{ApiError, ErrorResponse};

/// Path parameters; a malformed segment is a `400` JSON error.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err((
                rejection.status(),
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )),
        }
    }
}

/// Optional JSON body.
///
/// A request without a `Content-Type` header reads as the default payload, so
/// required fields surface as validation errors rather than extractor errors.
/// Malformed JSON, a non-JSON content type or mistyped fields are a `400`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match <Option<Json<T>> as FromRequest<S>>::from_request(req, state).await {
            Ok(Some(Json(value))) => Ok(Self(value)),
            Ok(None) => Ok(Self(T::default())),
            Err(rejection) => Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid JSON body: {}", rejection.body_text()),
                }),
            )),
        }
    }
}
