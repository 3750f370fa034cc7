//! Handler tests for the Products domain
//!
//! Exercise the router over the in-memory repository:
//! - Request decoding and the 400 path
//! - Response bodies and status codes
//! - Error body shape

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn product(id: i64, name: &str, price: f32, discount: f32, store: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        discount,
        store: store.to_string(),
    }
}

fn seeded_repo() -> InMemoryProductRepository {
    InMemoryProductRepository::with_products(vec![
        product(1, "AirFryer", 3000.0, 22.0, "ABC TECH"),
        product(2, "Ütü", 1500.0, 10.0, "ABC TECH"),
        product(3, "Çamaşır Makinesi", 10000.0, 15.0, "ABC TECH"),
        product(4, "Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"),
    ])
}

fn app(repo: InMemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repo))
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(body: Body) -> usize {
    body.collect().await.unwrap().to_bytes().len()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, body: Value) -> Request<Body> {
    json_request_to(method, "/", body)
}

fn json_request_to(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_product_by_id_returns_200() {
    let response = app(seeded_repo()).oneshot(get("/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({
            "id": 1,
            "name": "AirFryer",
            "price": 3000.0,
            "discount": 22.0,
            "store": "ABC TECH"
        })
    );
}

#[tokio::test]
async fn test_get_missing_product_returns_404_with_error_body() {
    let response = app(seeded_repo()).oneshot(get("/42")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "errorDescription": "Product with id 42 not found" })
    );
}

#[tokio::test]
async fn test_unparsable_id_is_treated_as_zero() {
    let response = app(seeded_repo()).oneshot(get("/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "errorDescription": "Product with id 0 not found" })
    );
}

#[tokio::test]
async fn test_get_all_products() {
    let response = app(seeded_repo()).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_get_all_products_by_store() {
    let response = app(seeded_repo())
        .oneshot(get("/?store=ABC%20TECH"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["AirFryer", "Ütü", "Çamaşır Makinesi"]);
}

#[tokio::test]
async fn test_empty_store_query_lists_all() {
    let response = app(seeded_repo()).oneshot(get("/?store=")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_repeated_store_query_uses_first_value() {
    let response = app(seeded_repo())
        .oneshot(get("/?store=Dekorasyon%20Saray%C4%B1&store=ABC%20TECH"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Lambader"]);
}

#[tokio::test]
async fn test_get_all_on_empty_store_returns_empty_array() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(get("/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_add_product_returns_201_with_empty_body() {
    let repo = InMemoryProductRepository::new();
    let response = app(repo.clone())
        .oneshot(json_request(
            "POST",
            json!({ "name": "Kupa", "price": 100.0, "discount": 0.0, "store": "RBD" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_bytes(response.into_body()).await, 0);

    assert_eq!(
        repo.get_all().await,
        vec![product(1, "Kupa", 100.0, 0.0, "RBD")]
    );
}

#[tokio::test]
async fn test_add_product_malformed_body_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app(InMemoryProductRepository::new())
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert!(body["errorDescription"].is_string());
}

#[tokio::test]
async fn test_add_product_wrong_type_returns_400() {
    let response = app(InMemoryProductRepository::new())
        .oneshot(json_request("POST", json!({ "name": "Kupa", "price": "cheap" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_product_returns_204() {
    let repo = seeded_repo();
    let response = app(repo.clone())
        .oneshot(json_request(
            "PUT",
            json!({
                "id": 1,
                "name": "Fırın",
                "price": 4000.0,
                "discount": 22.0,
                "store": "ABC TECH"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        repo.get_by_id(1).await.unwrap(),
        product(1, "Fırın", 4000.0, 22.0, "ABC TECH")
    );
}

#[tokio::test]
async fn test_update_missing_product_returns_422() {
    let response = app(seeded_repo())
        .oneshot(json_request("PUT", json!({ "id": 42, "name": "Fırın" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "errorDescription": "Product with id 42 not found" })
    );
}

#[tokio::test]
async fn test_update_without_fields_returns_422() {
    let response = app(seeded_repo())
        .oneshot(json_request("PUT", json!({ "id": 1 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "errorDescription": "No fields to update for product with id 1" })
    );
}

#[tokio::test]
async fn test_delete_product_returns_204_then_404() {
    let repo = seeded_repo();

    let response = app(repo.clone()).oneshot(delete("/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app(repo.clone()).oneshot(get("/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app(repo).oneshot(delete("/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "errorDescription": "Product with id 2 not found" })
    );
}

#[tokio::test]
async fn test_routes_under_versioned_mount() {
    let repo = InMemoryProductRepository::new();
    let mounted = || {
        Router::new().nest(
            "/api",
            Router::new().nest("/v1/products", app(repo.clone())),
        )
    };

    let response = mounted()
        .oneshot(json_request_to(
            "POST",
            "/api/v1/products",
            json!({ "name": "Kupa", "price": 100.0, "discount": 0.0, "store": "RBD" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = mounted()
        .oneshot(get("/api/v1/products?store=RBD"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    let id = body[0]["id"].as_i64().unwrap();

    let response = mounted()
        .oneshot(json_request_to(
            "PUT",
            "/api/v1/products",
            json!({ "id": id, "price": 120.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = mounted()
        .oneshot(get(&format!("/api/v1/products/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await["price"], json!(120.0));

    let response = mounted()
        .oneshot(delete(&format!("/api/v1/products/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = mounted()
        .oneshot(get(&format!("/api/v1/products/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
