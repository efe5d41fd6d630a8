use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// sea-orm implementation of ProductRepository (PostgreSQL in production, SQLite in tests)
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn modify(
        &self,
        id: i32,
        apply: impl FnOnce(&mut entity::ActiveModel) + Send,
    ) -> ProductResult<Option<Product>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::ActiveModel = model.into();
        apply(&mut active_model);
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model.update(&self.db).await?;
        Ok(Some(updated.into()))
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let updated = self
            .modify(id, |product| {
                product.name = Set(input.name);
                product.price = Set(input.price);
                product.availability = Set(input.availability);
            })
            .await?;

        if updated.is_some() {
            tracing::info!(product_id = id, "Updated product");
        }
        Ok(updated)
    }

    async fn set_availability(
        &self,
        id: i32,
        availability: bool,
    ) -> ProductResult<Option<Product>> {
        let updated = self
            .modify(id, |product| product.availability = Set(availability))
            .await?;

        if updated.is_some() {
            tracing::info!(product_id = id, availability, "Updated product availability");
        }
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn model(id: i32, name: &str, availability: bool) -> entity::Model {
        let at = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
            .unwrap();
        entity::Model {
            id,
            name: name.to_string(),
            price: 300.0,
            availability,
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn test_list_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Monitor", true), model(2, "Mouse", false)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Monitor");
        assert!(!products[1].availability);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.set_availability(5, false).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_database_errors_propagate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.get_by_id(1).await.unwrap_err();
        assert!(err.to_string().contains("connection reset"));
    }
}
