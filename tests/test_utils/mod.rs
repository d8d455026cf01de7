//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations for testing purposes.

use anyhow::Result;
use customer_manager::models::{NewCustomer, customer};
use customer_manager::repositories::{CustomerRepository, CustomerStore};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Sets up an in-memory SQLite database with all migrations applied and returns an Arc.
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Ok(Arc::new(db))
}

/// Inserts the given `(name, email, address)` rows through the repository.
#[allow(dead_code)]
pub async fn insert_customers(
    repo: &CustomerRepository,
    rows: &[(&str, &str, &str)],
) -> Result<Vec<customer::Model>> {
    let mut created = Vec::with_capacity(rows.len());
    for (name, email, address) in rows {
        created.push(
            repo.create(NewCustomer::new(*name, *email, *address))
                .await?,
        );
    }
    Ok(created)
}

/// Sorted ids of a result set, for order-insensitive comparisons.
#[allow(dead_code)]
pub fn ids(customers: &[customer::Model]) -> Vec<i64> {
    let mut ids: Vec<i64> = customers.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids
}
