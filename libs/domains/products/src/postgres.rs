use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::{debug, error, info};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductChanges},
    repository::ProductRepository,
};

/// PostgreSQL-backed repository over the shared connection pool
///
/// Every value is bound as a statement parameter; the partial update only
/// varies which columns appear in the `SET` clause.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Any failure to read the row counts as absent.
    async fn ensure_exists(&self, id: i64) -> ProductResult<()> {
        self.get_by_id(id).await.map(|_| ()).map_err(|e| {
            error!(product_id = id, error = %e, "Error while checking product");
            ProductError::NotFound(id)
        })
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_all(&self) -> Vec<Product> {
        match entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
        {
            Ok(models) => {
                debug!(count = models.len(), "Products fetched");
                models.into_iter().map(Into::into).collect()
            }
            Err(e) => {
                error!(error = %e, "Error while fetching products");
                Vec::new()
            }
        }
    }

    async fn get_all_by_store(&self, store: &str) -> Vec<Product> {
        match entity::Entity::find()
            .filter(entity::Column::Store.eq(store))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
        {
            Ok(models) => {
                debug!(store, count = models.len(), "Products fetched by store");
                models.into_iter().map(Into::into).collect()
            }
            Err(e) => {
                error!(store, error = %e, "Error while fetching products by store");
                Vec::new()
            }
        }
    }

    async fn add(&self, product: Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();

        let model = active_model.insert(&self.db).await.map_err(|e| {
            error!(error = %e, "Error while adding product");
            ProductError::Storage(e.to_string())
        })?;

        info!(product_id = model.id, "Product added");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Product> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!(product_id = id, error = %e, "Error while fetching product");
                ProductError::Storage(format!("Error while getting product with id {}", id))
            })?
            .ok_or(ProductError::NotFound(id))?;

        debug!(product_id = id, "Product fetched");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<()> {
        self.ensure_exists(id).await?;

        entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!(product_id = id, error = %e, "Error while deleting product");
                ProductError::Storage(format!("Error while deleting product with id {}", id))
            })?;

        info!(product_id = id, "Product deleted");
        Ok(())
    }

    async fn update_by_id(&self, changes: ProductChanges) -> ProductResult<()> {
        let id = changes.id;
        self.ensure_exists(id).await?;

        if changes.is_empty() {
            error!(product_id = id, "No fields to update");
            return Err(ProductError::EmptyUpdate(id));
        }

        let mut update = entity::Entity::update_many();
        if let Some(name) = changes.name {
            update = update.col_expr(entity::Column::Name, Expr::value(name));
        }
        if let Some(price) = changes.price {
            update = update.col_expr(entity::Column::Price, Expr::value(price));
        }
        if let Some(discount) = changes.discount {
            update = update.col_expr(entity::Column::Discount, Expr::value(discount));
        }
        if let Some(store) = changes.store {
            update = update.col_expr(entity::Column::Store, Expr::value(store));
        }

        update
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!(product_id = id, error = %e, "Error while updating product");
                ProductError::Storage(format!("Error while updating product with id {}", id))
            })?;

        info!(product_id = id, "Product updated");
        Ok(())
    }
}
