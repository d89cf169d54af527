//! MongoDB repository integration tests
//!
//! These tests start a MongoDB container via testcontainers and are
//! ignored by default. Run with `cargo test -- --ignored`.

use domain_products::{
    CreateProduct, MongoProductRepository, ProductFilter, ProductRepository, ReplaceProduct,
    UpdateProduct,
};
use test_utils::TestMongo;
use uuid::Uuid;

fn create_input(name: &str, price: f64) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        description: format!("{} description", name),
        price: Some(price),
        tags: vec!["test".to_string()],
        metadata: serde_json::Map::new(),
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_get_roundtrip() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("catalog_test");
    let repository = MongoProductRepository::with_collection(&db, "products_roundtrip");

    let created = repository.create(create_input("Widget", 9.99)).await.unwrap();

    let fetched = repository.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Widget");
    assert_eq!(fetched.price, Some(9.99));
    assert!(fetched.thumbnail.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_get_unknown_id_returns_none() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("catalog_test");
    let repository = MongoProductRepository::with_collection(&db, "products_unknown");

    let result = repository.get_by_id(Uuid::now_v7()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_list_with_price_filter() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("catalog_test");
    let repository = MongoProductRepository::with_collection(&db, "products_filter");

    repository.create(create_input("Cheap", 1.0)).await.unwrap();
    repository.create(create_input("Mid", 10.0)).await.unwrap();
    repository
        .create(create_input("Expensive", 100.0))
        .await
        .unwrap();

    let filter = ProductFilter {
        min_price: Some(5.0),
        max_price: Some(50.0),
        ..Default::default()
    };
    let products = repository.list(filter.clone()).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Mid");

    let count = repository.count(filter).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_many_returns_matched_count() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("catalog_test");
    let repository = MongoProductRepository::with_collection(&db, "products_bulk");

    repository.create(create_input("A", 1.0)).await.unwrap();
    repository.create(create_input("B", 2.0)).await.unwrap();

    let matched = repository
        .update_many(
            ProductFilter::default(),
            UpdateProduct {
                description: Some("bulk updated".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(matched, 2);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_replace_preserves_id_and_thumbnail() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("catalog_test");
    let repository = MongoProductRepository::with_collection(&db, "products_replace");

    let created = repository.create(create_input("Widget", 9.99)).await.unwrap();
    repository
        .set_thumbnail(
            created.id,
            Some("uploads/product-thumbnails/x.jpg".to_string()),
        )
        .await
        .unwrap();

    let replaced = repository
        .replace(
            created.id,
            ReplaceProduct {
                name: "Gadget".to_string(),
                description: String::new(),
                price: None,
                tags: vec![],
                metadata: serde_json::Map::new(),
            },
        )
        .await
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "Gadget");
    assert_eq!(
        replaced.thumbnail.as_deref(),
        Some("uploads/product-thumbnails/x.jpg")
    );
    assert_eq!(replaced.created_at, created.created_at);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_set_and_clear_thumbnail() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("catalog_test");
    let repository = MongoProductRepository::with_collection(&db, "products_thumbnail");

    let created = repository.create(create_input("Widget", 9.99)).await.unwrap();

    repository
        .set_thumbnail(created.id, Some("uploads/product-thumbnails/a.jpg".to_string()))
        .await
        .unwrap();
    let with_thumbnail = repository.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(
        with_thumbnail.thumbnail.as_deref(),
        Some("uploads/product-thumbnails/a.jpg")
    );

    repository.set_thumbnail(created.id, None).await.unwrap();
    let cleared = repository.get_by_id(created.id).await.unwrap().unwrap();
    assert!(cleared.thumbnail.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_delete_removes_document() {
    let mongo = TestMongo::new().await;
    let db = mongo.database("catalog_test");
    let repository = MongoProductRepository::with_collection(&db, "products_delete");

    let created = repository.create(create_input("Widget", 9.99)).await.unwrap();
    assert!(repository.delete(created.id).await.unwrap());
    assert!(repository.get_by_id(created.id).await.unwrap().is_none());

    // deleting again reports not found
    assert!(repository.delete(created.id).await.is_err());
}
