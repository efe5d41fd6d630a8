//! Integration tests for Products domain
//!
//! These tests run the sea-orm repository against a migrated database to ensure:
//! - Inserts get store-assigned ids and default availability
//! - Updates refresh `updated_at` and keep `created_at`
//! - Listing is ordered by id
//! - Deletes report whether a row was removed
//!
//! SQLite in memory is used by default; the PostgreSQL container test needs Docker.

use domain_products::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn create_input(builder: &TestDataBuilder, suffix: &str) -> CreateProduct {
    CreateProduct {
        name: builder.name("product", suffix),
        price: builder.price(),
        availability: None,
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_product() {
    let db = TestDatabase::in_memory().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = create_input(&builder, "main");
    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.name, input.name);
    assert_price_eq(created.price, input.price, "created price");
    assert!(created.availability, "availability defaults to true");

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");

    assert_eq!(retrieved.name, created.name);
    assert_eq!(retrieved.created_at, created.created_at);
}

#[tokio::test]
async fn test_create_honours_explicit_availability() {
    let db = TestDatabase::in_memory().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("explicit_availability");

    let input = CreateProduct {
        availability: Some(false),
        ..create_input(&builder, "hidden")
    };
    let created = repo.create(input).await.unwrap();

    assert!(!created.availability);
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let db = TestDatabase::in_memory().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_ordered");

    for suffix in ["a", "b", "c"] {
        repo.create(create_input(&builder, suffix)).await.unwrap();
    }

    let products = repo.list().await.unwrap();
    let ids: Vec<i32> = products.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![1, 2, 3]);
    assert!(products[2].name.ends_with("-c"));
}

#[tokio::test]
async fn test_update_replaces_fields_and_touches_updated_at() {
    let db = TestDatabase::in_memory().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_fields");

    let created = repo.create(create_input(&builder, "before")).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateProduct {
                name: builder.name("product", "after"),
                price: 12.5,
                availability: false,
            },
        )
        .await
        .unwrap();
    let updated = assert_some(updated, "updated product");

    assert!(updated.name.ends_with("-after"));
    assert_price_eq(updated.price, 12.5, "updated price");
    assert!(!updated.availability);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_unknown_product_returns_none() {
    let db = TestDatabase::in_memory().await;
    let repo = PgProductRepository::new(db.connection());

    let result = repo
        .update(
            2000,
            UpdateProduct {
                name: "Monitor".to_string(),
                price: 300.0,
                availability: true,
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_set_availability_persists() {
    let db = TestDatabase::in_memory().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("set_availability");

    let created = repo.create(create_input(&builder, "main")).await.unwrap();
    repo.set_availability(created.id, false).await.unwrap();

    let stored = assert_some(repo.get_by_id(created.id).await.unwrap(), "stored product");
    assert!(!stored.availability);
    assert_eq!(stored.name, created.name);
}

#[tokio::test]
async fn test_delete_reports_removed_rows() {
    let db = TestDatabase::in_memory().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete_rows");

    let created = repo.create(create_input(&builder, "main")).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_service_round_trip_through_database() {
    let db = TestDatabase::in_memory().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_round_trip");

    let created = service
        .create_product(create_input(&builder, "main"))
        .await
        .unwrap();
    let toggled = service
        .toggle_availability(i64::from(created.id))
        .await
        .unwrap();
    assert!(!toggled.availability);

    let summaries = service.list_products().await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, created.id);
    assert!(!summaries[0].availability);

    service
        .delete_product(i64::from(created.id))
        .await
        .unwrap();
    let err = service
        .get_product(i64::from(created.id))
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::NotFound(_)));
}

#[tokio::test]
async fn test_service_rejects_overlong_name() {
    let db = TestDatabase::in_memory().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    let err = service
        .create_product(CreateProduct {
            name: "x".repeat(101),
            price: 10.0,
            availability: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ProductError::Validation(_)));
    assert!(service.list_products().await.unwrap().is_empty());
}

// ============================================================================
// PostgreSQL
// ============================================================================

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_postgres_create_and_list() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("postgres_create_and_list");

    let first = repo.create(create_input(&builder, "first")).await.unwrap();
    let second = repo.create(create_input(&builder, "second")).await.unwrap();

    let products = repo.list().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, first.id);
    assert_eq!(products[1].id, second.id);
    assert_price_eq(products[0].price, first.price, "postgres price");
}
