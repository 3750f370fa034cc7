use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use axum_helpers::{
    AppError, IdPath, JsonBody,
    errors::responses::{BadRequestResponse, NotFoundResponse, UnprocessableEntityResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::dto::{AddProductRequest, ProductResponse, UpdateProductRequest};
use crate::error::ProductError;
use crate::models::ProductFilter;
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "Products";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_products,
        add_product,
        update_product,
        get_product_by_id,
        delete_product_by_id,
    ),
    components(
        schemas(ProductResponse, AddProductRequest, UpdateProductRequest),
        responses(BadRequestResponse, NotFoundResponse, UnprocessableEntityResponse)
    ),
    tags(
        (name = TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(get_all_products).post(add_product).put(update_product),
        )
        .route("/{id}", get(get_product_by_id).delete(delete_product_by_id))
        .with_state(shared_service)
}

/// List products, optionally filtered by store
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products, possibly empty", body = Vec<ProductResponse>)
    )
)]
async fn get_all_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<ProductResponse>> {
    // raw pairs so a repeated `store` never rejects the request
    let filter = ProductFilter::from_query_pairs(pairs);
    let products = service.list_products(&filter).await;
    Json(products.iter().map(ProductResponse::from).collect())
}

/// Add a product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = AddProductRequest,
    responses(
        (status = 201, description = "Product created"),
        (status = 400, response = BadRequestResponse),
        (status = 422, response = UnprocessableEntityResponse)
    )
)]
async fn add_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(request): JsonBody<AddProductRequest>,
) -> Result<StatusCode, AppError> {
    service
        .add_product(request.into_model())
        .await
        .map_err(ProductError::into_write_error)?;

    Ok(StatusCode::CREATED)
}

/// Update the non-zero fields of a product
#[utoipa::path(
    put,
    path = "",
    tag = TAG,
    request_body = UpdateProductRequest,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, response = BadRequestResponse),
        (status = 422, response = UnprocessableEntityResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(request): JsonBody<UpdateProductRequest>,
) -> Result<StatusCode, AppError> {
    service
        .update_product(request.into_model())
        .await
        .map_err(ProductError::into_write_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID; a non-numeric value is treated as 0")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_product_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> Result<Json<ProductResponse>, AppError> {
    let product = service
        .get_product_by_id(id)
        .await
        .map_err(ProductError::into_lookup_error)?;

    Ok(Json(ProductResponse::from(&product)))
}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID; a non-numeric value is treated as 0")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_product_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    service
        .delete_product_by_id(id)
        .await
        .map_err(ProductError::into_lookup_error)?;

    Ok(StatusCode::NO_CONTENT)
}
