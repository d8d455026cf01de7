//! Integration tests for CustomerService over the SeaORM repository.

use anyhow::Result;
use customer_manager::repositories::{CustomerRepository, CustomerStore};
use customer_manager::services::CustomerService;
use std::sync::Arc;

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{ids, insert_customers, setup_test_db_arc};

#[tokio::test]
async fn list_all_passes_through_store_contents() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let repo = CustomerRepository::new(db.clone());
    let created = insert_customers(
        &repo,
        &[("Zed", "z@z.io", "Oslo"), ("Amy", "amy@a.io", "Rome")],
    )
    .await?;
    let service = CustomerService::new(Arc::new(repo.clone()));

    let listed = service.list_all().await?;

    assert_eq!(listed, repo.list_all().await?);
    assert_eq!(ids(&listed), ids(&created));
    Ok(())
}

#[tokio::test]
async fn search_passes_through_store_matches() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let repo = CustomerRepository::new(db.clone());
    let created = insert_customers(
        &repo,
        &[("Zed", "z@z.io", "Oslo"), ("Amy", "amy@a.io", "Rome")],
    )
    .await?;
    let service = CustomerService::new(Arc::new(repo));

    assert_eq!(ids(&service.search("Rome").await?), vec![created[1].id]);
    assert_eq!(ids(&service.search("").await?), ids(&created));
    Ok(())
}

#[tokio::test]
async fn store_failures_propagate() -> Result<()> {
    // Connected but never migrated: the customer table does not exist.
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    let service = CustomerService::new(Arc::new(CustomerRepository::new(Arc::new(db))));

    assert!(service.list_all().await.is_err());
    assert!(service.search("x").await.is_err());
    Ok(())
}
