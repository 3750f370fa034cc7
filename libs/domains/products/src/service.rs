use std::sync::Arc;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductChanges, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer between the HTTP handlers and the repository
///
/// Translates service models into the record and change-set shapes and
/// forwards repository outcomes unchanged.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn get_all_products(&self) -> Vec<Product> {
        self.repository.get_all().await
    }

    pub async fn get_all_products_by_store(&self, store: &str) -> Vec<Product> {
        self.repository.get_all_by_store(store).await
    }

    /// Store-filtered list when the filter names a store, otherwise everything
    pub async fn list_products(&self, filter: &ProductFilter) -> Vec<Product> {
        match filter.store() {
            Some(store) => self.get_all_products_by_store(store).await,
            None => self.get_all_products().await,
        }
    }

    pub async fn add_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.add(input.into_record()).await
    }

    pub async fn get_product_by_id(&self, id: i64) -> ProductResult<Product> {
        self.repository.get_by_id(id).await
    }

    pub async fn delete_product_by_id(&self, id: i64) -> ProductResult<()> {
        self.repository.delete_by_id(id).await
    }

    pub async fn update_product(&self, input: UpdateProduct) -> ProductResult<()> {
        self.repository
            .update_by_id(ProductChanges::from(input))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::repository::MockProductRepository;
    use mockall::predicate::*;

    fn kupa(id: i64) -> Product {
        Product {
            id,
            name: "Kupa".to_string(),
            price: 100.0,
            discount: 0.0,
            store: "RBD".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_product_passes_record_without_id() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_add()
            .with(eq(kupa(0)))
            .times(1)
            .returning(|product| Ok(Product { id: 1, ..product }));

        let service = ProductService::new(mock_repo);
        let added = service
            .add_product(CreateProduct {
                name: "Kupa".to_string(),
                price: 100.0,
                discount: 0.0,
                store: "RBD".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(added, kupa(1));
    }

    #[tokio::test]
    async fn test_add_product_forwards_storage_error() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_add()
            .returning(|_| Err(ProductError::Storage("duplicate key".to_string())));

        let service = ProductService::new(mock_repo);
        let result = service.add_product(CreateProduct::default()).await;

        assert_eq!(result, Err(ProductError::Storage("duplicate key".to_string())));
    }

    #[tokio::test]
    async fn test_get_product_by_id_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(5))
            .returning(|id| Err(ProductError::NotFound(id)));

        let service = ProductService::new(mock_repo);
        assert_eq!(
            service.get_product_by_id(5).await,
            Err(ProductError::NotFound(5))
        );
    }

    #[tokio::test]
    async fn test_list_products_uses_store_filter() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_all_by_store()
            .with(eq("RBD"))
            .times(1)
            .returning(|_| vec![kupa(1)]);
        mock_repo.expect_get_all().never();

        let service = ProductService::new(mock_repo);
        let filter = ProductFilter {
            store: Some("RBD".to_string()),
        };

        assert_eq!(service.list_products(&filter).await, vec![kupa(1)]);
    }

    #[tokio::test]
    async fn test_list_products_empty_store_lists_all() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_all()
            .times(1)
            .returning(|| vec![kupa(1), kupa(2)]);
        mock_repo.expect_get_all_by_store().never();

        let service = ProductService::new(mock_repo);
        let filter = ProductFilter {
            store: Some(String::new()),
        };

        assert_eq!(service.list_products(&filter).await.len(), 2);
    }

    #[tokio::test]
    async fn test_update_product_translates_zero_fields() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update_by_id()
            .with(eq(ProductChanges {
                id: 1,
                name: Some("Fırın".to_string()),
                price: None,
                discount: Some(22.0),
                store: None,
            }))
            .times(1)
            .returning(|_| Ok(()));

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(UpdateProduct {
                id: 1,
                name: "Fırın".to_string(),
                price: 0.0,
                discount: 22.0,
                store: String::new(),
            })
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_delete_product_forwards_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete_by_id()
            .with(eq(9))
            .returning(|id| Err(ProductError::NotFound(id)));

        let service = ProductService::new(mock_repo);
        assert_eq!(
            service.delete_product_by_id(9).await,
            Err(ProductError::NotFound(9))
        );
    }
}
