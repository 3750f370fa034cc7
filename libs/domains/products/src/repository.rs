use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductChanges};

/// Repository trait for Product persistence
///
/// Read-all operations never fail: a failed query is logged and yields an
/// empty list. Single-record operations report `NotFound` or `Storage`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id
    async fn get_all(&self) -> Vec<Product>;

    /// Products whose store equals `store` exactly
    async fn get_all_by_store(&self, store: &str) -> Vec<Product>;

    /// Insert a new row; the id of `product` is ignored and the assigned one returned
    async fn add(&self, product: Product) -> ProductResult<Product>;

    async fn get_by_id(&self, id: i64) -> ProductResult<Product>;

    /// Fails with `NotFound` when the row is absent
    async fn delete_by_id(&self, id: i64) -> ProductResult<()>;

    /// Write the set fields of `changes`; fails with `NotFound` when the row is
    /// absent and `EmptyUpdate` when no field is set
    async fn update_by_id(&self, changes: ProductChanges) -> ProductResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    products: Vec<Product>,
    last_id: i64,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing rows, keeping their ids
    pub fn with_products(mut products: Vec<Product>) -> Self {
        products.sort_by_key(|p| p.id);
        let last_id = products.last().map_or(0, |p| p.id);

        Self {
            store: Arc::new(RwLock::new(Store { products, last_id })),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Vec<Product> {
        self.store.read().await.products.clone()
    }

    async fn get_all_by_store(&self, store: &str) -> Vec<Product> {
        self.store
            .read()
            .await
            .products
            .iter()
            .filter(|p| p.store == store)
            .cloned()
            .collect()
    }

    async fn add(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let product = Product {
            id: store.last_id,
            ..product
        };
        store.products.push(product.clone());

        tracing::info!(product_id = product.id, "Product added");
        Ok(product)
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Product> {
        self.store
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProductError::NotFound(id))
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<()> {
        let mut store = self.store.write().await;

        let index = store
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))?;
        store.products.remove(index);

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    async fn update_by_id(&self, changes: ProductChanges) -> ProductResult<()> {
        let mut store = self.store.write().await;

        let product = store
            .products
            .iter_mut()
            .find(|p| p.id == changes.id)
            .ok_or(ProductError::NotFound(changes.id))?;

        if changes.is_empty() {
            return Err(ProductError::EmptyUpdate(changes.id));
        }
        changes.apply_to(product);

        tracing::info!(product_id = changes.id, "Product updated");
        Ok(())
    }
}
