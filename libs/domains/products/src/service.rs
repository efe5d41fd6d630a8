//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductSummary, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Ids arrive as validated request integers; anything outside the store's id
/// range is reported as not found.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products ordered by id, without timestamps
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<ProductSummary>> {
        let products = self.repository.list().await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .get_by_id(store_id(id)?)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Replace name, price and availability of an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository
            .update(store_id(id)?, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Flip the availability flag
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: i64) -> ProductResult<Product> {
        let product = self.get_product(id).await?;

        self.repository
            .set_availability(product.id, !product.availability)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        if self.repository.delete(store_id(id)?).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn store_id(id: i64) -> ProductResult<i32> {
    i32::try_from(id).map_err(|_| ProductError::NotFound(id))
}
