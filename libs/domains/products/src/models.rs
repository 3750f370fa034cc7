use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A persisted product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, immutable once assigned
    pub id: i64,
    pub name: String,
    pub price: f32,
    pub discount: f32,
    /// Grouping key used by the store filter
    pub store: String,
}

/// Service model for creating a product (no identifier)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreateProduct {
    pub name: String,
    pub price: f32,
    pub discount: f32,
    pub store: String,
}

impl CreateProduct {
    /// Record shape handed to the repository; the id is assigned on insert.
    pub fn into_record(self) -> Product {
        Product {
            id: 0,
            name: self.name,
            price: self.price,
            discount: self.discount,
            store: self.store,
        }
    }
}

/// Service model for updating a product
///
/// Zero numbers and empty strings mean "leave unchanged".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateProduct {
    pub id: i64,
    pub name: String,
    pub price: f32,
    pub discount: f32,
    pub store: String,
}

/// The set of columns a partial update writes
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductChanges {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<f32>,
    pub discount: Option<f32>,
    pub store: Option<String>,
}

impl ProductChanges {
    /// No column is eligible for the update
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.discount.is_none() && self.store.is_none()
    }

    /// Write the eligible fields onto `product`
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(discount) = self.discount {
            product.discount = discount;
        }
        if let Some(store) = &self.store {
            product.store = store.clone();
        }
    }
}

impl From<UpdateProduct> for ProductChanges {
    fn from(input: UpdateProduct) -> Self {
        Self {
            id: input.id,
            name: Some(input.name).filter(|name| !name.is_empty()),
            price: Some(input.price).filter(|price| *price != 0.0),
            discount: Some(input.discount).filter(|discount| *discount != 0.0),
            store: Some(input.store).filter(|store| !store.is_empty()),
        }
    }
}

/// Query parameters for listing products
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    /// Exact store name; empty behaves as absent
    pub store: Option<String>,
}

impl ProductFilter {
    /// Build from raw query pairs; the first `store` wins and repeats are ignored
    pub fn from_query_pairs(pairs: Vec<(String, String)>) -> Self {
        let store = pairs
            .into_iter()
            .find(|(key, _)| key == "store")
            .map(|(_, value)| value);

        Self { store }
    }

    pub fn store(&self) -> Option<&str> {
        self.store.as_deref().filter(|store| !store.is_empty())
    }
}
