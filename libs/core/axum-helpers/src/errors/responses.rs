//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - body could not be decoded",
    content_type = "application/json",
    example = json!({
        "errorDescription": "Failed to parse the request body as JSON: expected value at line 1 column 1"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "errorDescription": "Product with id 5 not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - the store rejected the write",
    content_type = "application/json",
    example = json!({
        "errorDescription": "Error while updating product with id 1"
    })
)]
pub struct UnprocessableEntityResponse(pub ErrorResponse);
