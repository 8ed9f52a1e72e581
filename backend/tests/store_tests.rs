//! Store contract tests
//!
//! Exercises the persistence functions directly, including the constraints
//! the schema itself enforces.

mod common;

use common::*;
use shared::MAX_QUANTITY;
use stockroom_backend::store::{self, Entity, NewProduct, ProductChanges, StoreError};

#[tokio::test]
async fn test_create_and_get_location() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let shelf = store::create_location(&mut conn, "Shelf A").await.unwrap();
    let fetched = store::get_location(&mut conn, shelf.id).await.unwrap();
    assert_eq!(fetched, shelf);

    assert!(matches!(
        store::create_location(&mut conn, "Shelf A").await,
        Err(StoreError::Duplicate(Entity::Location))
    ));
    assert!(matches!(
        store::get_location(&mut conn, shelf.id + 1).await,
        Err(StoreError::NotFound(Entity::Location))
    ));
}

#[tokio::test]
async fn test_create_product_checks_location() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let result = store::create_product(
        &mut conn,
        &NewProduct {
            name: "Widget",
            quantity: 1,
            location_id: Some(5),
        },
    )
    .await;
    assert!(matches!(result, Err(StoreError::InvalidLocation(5))));

    let product = store::create_product(
        &mut conn,
        &NewProduct {
            name: "Widget",
            quantity: 1,
            location_id: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(store::get_product(&mut conn, product.id).await.unwrap(), product);

    let duplicate = store::create_product(
        &mut conn,
        &NewProduct {
            name: "Widget",
            quantity: 2,
            location_id: None,
        },
    )
    .await;
    assert!(matches!(duplicate, Err(StoreError::Duplicate(Entity::Product))));
}

#[tokio::test]
async fn test_schema_rejects_dangling_location() {
    let pool = test_pool().await;

    // Bypass the store checks: the foreign key alone must hold
    let result =
        sqlx::query("INSERT INTO products (name, quantity, location_id) VALUES ('Widget', 1, 77)")
            .execute(&pool)
            .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_schema_rejects_negative_quantity() {
    let pool = test_pool().await;

    let result = sqlx::query("INSERT INTO products (name, quantity) VALUES ('Widget', -1)")
        .execute(&pool)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_schema_rejects_quantity_above_limit() {
    let pool = test_pool().await;

    let result = sqlx::query("INSERT INTO products (name, quantity) VALUES ('Widget', ?)")
        .bind(MAX_QUANTITY + 1)
        .execute(&pool)
        .await;
    assert!(result.is_err());
    assert_eq!(count_rows(&pool, "products").await, 0);
}

#[tokio::test]
async fn test_list_products_by_location() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.unwrap();
    let shelf = store::create_location(&mut conn, "Shelf A").await.unwrap();
    let bin = store::create_location(&mut conn, "Bin 4").await.unwrap();

    for (name, location_id) in [("A", shelf.id), ("B", bin.id), ("C", shelf.id)] {
        store::create_product(
            &mut conn,
            &NewProduct {
                name,
                quantity: 1,
                location_id: Some(location_id),
            },
        )
        .await
        .unwrap();
    }

    let at_shelf = store::list_products_by_location(&mut conn, shelf.id)
        .await
        .unwrap();
    let names: Vec<_> = at_shelf.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);

    assert_eq!(store::list_products(&mut conn).await.unwrap().len(), 3);
    assert_eq!(store::list_locations(&mut conn).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_location_contract() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.unwrap();
    let shelf = store::create_location(&mut conn, "Shelf A").await.unwrap();
    let product = store::create_product(
        &mut conn,
        &NewProduct {
            name: "Widget",
            quantity: 1,
            location_id: Some(shelf.id),
        },
    )
    .await
    .unwrap();

    assert!(matches!(
        store::delete_location(&mut conn, shelf.id).await,
        Err(StoreError::InUse(Entity::Location))
    ));

    store::delete_product(&mut conn, product.id).await.unwrap();
    store::delete_location(&mut conn, shelf.id).await.unwrap();

    assert!(matches!(
        store::delete_location(&mut conn, shelf.id).await,
        Err(StoreError::NotFound(Entity::Location))
    ));
    assert!(matches!(
        store::delete_product(&mut conn, product.id).await,
        Err(StoreError::NotFound(Entity::Product))
    ));
}

#[tokio::test]
async fn test_rename_location_contract() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.unwrap();
    let aisle = store::create_location(&mut conn, "Aisle 3").await.unwrap();
    store::create_location(&mut conn, "Aisle 4").await.unwrap();

    store::rename_location(&mut conn, aisle.id, "Aisle 3B")
        .await
        .unwrap();
    assert_eq!(
        store::get_location(&mut conn, aisle.id).await.unwrap().name,
        "Aisle 3B"
    );

    assert!(matches!(
        store::rename_location(&mut conn, aisle.id, "Aisle 4").await,
        Err(StoreError::Duplicate(Entity::Location))
    ));
    assert!(matches!(
        store::rename_location(&mut conn, 1000, "Aisle 9").await,
        Err(StoreError::NotFound(Entity::Location))
    ));
}

#[tokio::test]
async fn test_update_product_partial_changes() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.unwrap();
    let shelf = store::create_location(&mut conn, "Shelf A").await.unwrap();
    let product = store::create_product(
        &mut conn,
        &NewProduct {
            name: "Widget",
            quantity: 10,
            location_id: None,
        },
    )
    .await
    .unwrap();

    let updated = store::update_product(
        &mut conn,
        product.id,
        &ProductChanges {
            location_id: Some(shelf.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.quantity, 10);
    assert_eq!(updated.location_id, Some(shelf.id));

    assert!(matches!(
        store::update_product(
            &mut conn,
            product.id,
            &ProductChanges {
                location_id: Some(shelf.id + 10),
                ..Default::default()
            },
        )
        .await,
        Err(StoreError::InvalidLocation(_))
    ));
    assert!(matches!(
        store::update_product(
            &mut conn,
            product.id + 10,
            &ProductChanges {
                quantity: Some(1),
                ..Default::default()
            },
        )
        .await,
        Err(StoreError::NotFound(Entity::Product))
    ));
}

#[tokio::test]
async fn test_quantity_delta_guard() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.unwrap();
    let product = store::create_product(
        &mut conn,
        &NewProduct {
            name: "Widget",
            quantity: 1,
            location_id: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(
        store::apply_quantity_delta(&mut conn, product.id, -1)
            .await
            .unwrap(),
        Some(0)
    );
    assert_eq!(
        store::apply_quantity_delta(&mut conn, product.id, -1)
            .await
            .unwrap(),
        None
    );
    assert_eq!(
        store::apply_quantity_delta(&mut conn, product.id, 1)
            .await
            .unwrap(),
        Some(1)
    );
    assert_eq!(
        store::apply_quantity_delta(&mut conn, product.id + 1, 1)
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_quantity_delta_guard_at_limit() {
    let pool = test_pool().await;
    let mut conn = pool.acquire().await.unwrap();
    let product = store::create_product(
        &mut conn,
        &NewProduct {
            name: "Bulk",
            quantity: MAX_QUANTITY,
            location_id: None,
        },
    )
    .await
    .unwrap();

    // Refused in SQL, before the sum could leave the integer range
    assert_eq!(
        store::apply_quantity_delta(&mut conn, product.id, 1)
            .await
            .unwrap(),
        None
    );
    assert_eq!(
        store::get_product(&mut conn, product.id).await.unwrap().quantity,
        MAX_QUANTITY
    );
}

#[tokio::test]
async fn test_schema_bootstrap_is_idempotent() {
    let pool = test_pool().await;
    stockroom_backend::db::init_schema(&pool).await.unwrap();
    assert_eq!(count_rows(&pool, "products").await, 0);
}
