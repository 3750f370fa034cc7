//! Request and response bodies for the HTTP layer.
//!
//! Missing request fields fall back to their zero value.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CreateProduct, Product, UpdateProduct};

/// Body of `POST /api/v1/products`
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct AddProductRequest {
    #[schema(example = "Kupa")]
    pub name: String,
    #[schema(example = 100.0)]
    pub price: f32,
    #[schema(example = 0.0)]
    pub discount: f32,
    #[schema(example = "RBD")]
    pub store: String,
}

impl AddProductRequest {
    pub fn into_model(self) -> CreateProduct {
        CreateProduct {
            name: self.name,
            price: self.price,
            discount: self.discount,
            store: self.store,
        }
    }
}

/// Body of `PUT /api/v1/products`
///
/// Zero numbers and empty strings leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UpdateProductRequest {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Fırın")]
    pub name: String,
    #[schema(example = 4000.0)]
    pub price: f32,
    #[schema(example = 22.0)]
    pub discount: f32,
    #[schema(example = "ABC TECH")]
    pub store: String,
}

impl UpdateProductRequest {
    pub fn into_model(self) -> UpdateProduct {
        UpdateProduct {
            id: self.id,
            name: self.name,
            price: self.price,
            discount: self.discount,
            store: self.store,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f32,
    pub discount: f32,
    pub store: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            discount: product.discount,
            store: product.store.clone(),
        }
    }
}
