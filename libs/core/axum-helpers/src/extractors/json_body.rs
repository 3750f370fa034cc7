//! JSON body extractor whose rejections use the shared error body.

use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor that turns every decoding failure into a 400.
///
/// Plain `axum::Json` answers 415 or 422 for some failures; handlers here
/// treat any body that cannot be decoded as a malformed request.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::JsonBody;
///
/// async fn add(JsonBody(payload): JsonBody<AddProductRequest>) { /* ... */ }
///
/// let app = Router::new().route("/products", post(add));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
