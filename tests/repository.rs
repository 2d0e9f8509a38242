//! Repository-level tests against a throwaway RocksDB store
//!
//! Run: cargo test --test repository

use tempfile::TempDir;

use tienda_server::db::DbService;
use tienda_server::db::models::{Product, ProductCreate, ProductUpdate};
use tienda_server::db::repository::ProductRepository;

async fn test_repo() -> (ProductRepository, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("tienda.db");
    let service = DbService::new(&db_path.to_string_lossy()).await.unwrap();
    (ProductRepository::new(service.db), tmp)
}

fn camiseta(stock: i64) -> ProductCreate {
    ProductCreate {
        name: "Camiseta".into(),
        description: "Algodón".into(),
        price: 19.99,
        stock_quantity: stock,
    }
}

fn key_of(product: &Product) -> String {
    product.id.as_ref().unwrap().to_raw()
}

#[tokio::test]
async fn create_assigns_an_id() {
    let (repo, _tmp) = test_repo().await;

    let created = repo.create(camiseta(5)).await.unwrap();
    assert!(created.id.is_some());
    assert_eq!(created.name, "Camiseta");
    assert_eq!(created.stock_quantity, 5);
}

#[tokio::test]
async fn find_available_filters_on_stock() {
    let (repo, _tmp) = test_repo().await;

    repo.create(camiseta(3)).await.unwrap();
    repo.create(ProductCreate {
        name: "Gorra".into(),
        description: String::new(),
        price: 9.5,
        stock_quantity: 0,
    })
    .await
    .unwrap();

    assert_eq!(repo.find_all().await.unwrap().len(), 2);

    let available = repo.find_available().await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].name, "Camiseta");
}

#[tokio::test]
async fn listings_cap_at_one_hundred() {
    let (repo, _tmp) = test_repo().await;

    // 110 products, 6 of them out of stock: both listings have more than
    // 100 candidates
    for i in 0..110 {
        repo.create(ProductCreate {
            name: format!("Producto {i}"),
            description: String::new(),
            price: 1.0,
            stock_quantity: if i % 20 == 0 { 0 } else { 3 },
        })
        .await
        .unwrap();
    }

    assert_eq!(repo.find_all().await.unwrap().len(), 100);

    let available = repo.find_available().await.unwrap();
    assert_eq!(available.len(), 100);
    assert!(available.iter().all(|p| p.stock_quantity > 0));
}

#[tokio::test]
async fn empty_patch_is_a_read() {
    let (repo, _tmp) = test_repo().await;

    let created = repo.create(camiseta(5)).await.unwrap();
    let id = key_of(&created);

    let unchanged = repo
        .update(&id, ProductUpdate::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, created);
}

#[tokio::test]
async fn update_of_missing_record_is_none() {
    let (repo, _tmp) = test_repo().await;

    let patch = ProductUpdate {
        price: Some(1.0),
        ..Default::default()
    };
    let result = repo.update("productos:nadie", patch).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_reports_whether_a_record_existed() {
    let (repo, _tmp) = test_repo().await;

    let created = repo.create(camiseta(5)).await.unwrap();
    let id = key_of(&created);

    assert!(repo.delete(&id).await.unwrap());
    assert!(!repo.delete(&id).await.unwrap());
    assert!(repo.find_by_id(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn decrement_to_exact_zero_succeeds() {
    let (repo, _tmp) = test_repo().await;

    let created = repo.create(camiseta(4)).await.unwrap();
    let id = key_of(&created);

    let updated = repo.decrement_stock(&id, 4).await.unwrap().unwrap();
    assert_eq!(updated.stock_quantity, 0);
}

#[tokio::test]
async fn decrement_beyond_stock_does_not_mutate() {
    let (repo, _tmp) = test_repo().await;

    let created = repo.create(camiseta(4)).await.unwrap();
    let id = key_of(&created);

    assert!(repo.decrement_stock(&id, 5).await.unwrap().is_none());

    let fetched = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(fetched.stock_quantity, 4);
}

#[tokio::test]
async fn decrement_of_missing_record_is_none() {
    let (repo, _tmp) = test_repo().await;

    let result = repo.decrement_stock("productos:nadie", 1).await.unwrap();
    assert!(result.is_none());
}
