//! Customer repository for database operations
//!
//! This module defines the [`CustomerStore`] contract consumed by the service
//! layer and [`CustomerRepository`], its SeaORM implementation.

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;

use crate::models::customer::{self, Entity as Customer, NewCustomer};

/// Escape character for LIKE patterns; plain ASCII so it needs no quoting in any dialect.
const LIKE_ESCAPE: char = '!';

/// Persistence operations over customer records.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Every stored customer, ordered by id.
    async fn list_all(&self) -> Result<Vec<customer::Model>>;

    /// Customers whose name, email or address contains `keyword`.
    ///
    /// Matching uses the engine's `LIKE` collation; an empty keyword matches
    /// every record.
    async fn search(&self, keyword: &str) -> Result<Vec<customer::Model>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>>;

    async fn create(&self, customer: NewCustomer) -> Result<customer::Model>;

    async fn update(&self, id: i64, customer: NewCustomer) -> Result<customer::Model>;

    async fn delete_by_id(&self, id: i64) -> Result<()>;
}

/// Repository for customer database operations
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Wraps `keyword` in `%` wildcards, escaping LIKE metacharacters so the
/// keyword matches literally.
fn substring_pattern_text(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn substring_pattern(keyword: &str) -> LikeExpr {
    LikeExpr::new(substring_pattern_text(keyword)).escape(LIKE_ESCAPE)
}

#[async_trait]
impl CustomerStore for CustomerRepository {
    async fn list_all(&self) -> Result<Vec<customer::Model>> {
        let customers = Customer::find()
            .order_by_asc(customer::Column::Id)
            .all(&*self.db)
            .await?;
        tracing::debug!(count = customers.len(), "listed customers");
        Ok(customers)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<customer::Model>> {
        let matches_keyword = Condition::any()
            .add(Expr::col(customer::Column::Name).like(substring_pattern(keyword)))
            .add(Expr::col(customer::Column::Email).like(substring_pattern(keyword)))
            .add(Expr::col(customer::Column::Address).like(substring_pattern(keyword)));

        let customers = Customer::find()
            .filter(matches_keyword)
            .order_by_asc(customer::Column::Id)
            .all(&*self.db)
            .await?;
        tracing::debug!(keyword, count = customers.len(), "searched customers");
        Ok(customers)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<customer::Model>> {
        let customer = Customer::find_by_id(id).one(&*self.db).await?;
        Ok(customer)
    }

    async fn create(&self, customer: NewCustomer) -> Result<customer::Model> {
        let created = customer.into_active_model().insert(&*self.db).await?;
        tracing::debug!(id = created.id, "created customer");
        Ok(created)
    }

    async fn update(&self, id: i64, customer: NewCustomer) -> Result<customer::Model> {
        let existing = Customer::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("customer {id}")))?;

        let mut active_model: customer::ActiveModel = existing.into();
        active_model.name = Set(customer.name);
        active_model.email = Set(customer.email);
        active_model.address = Set(customer.address);

        let updated = active_model.update(&*self.db).await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let delete_result = Customer::delete_by_id(id).exec(&*self.db).await?;

        if delete_result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("customer {id}")).into());
        }

        tracing::debug!(id, "deleted customer");
        Ok(())
    }
}
