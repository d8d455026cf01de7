//! Customer service
//!
//! A pass-through over a [`CustomerStore`]: no filtering, caching or
//! transformation is applied to what the store returns.

use anyhow::Result;
use std::sync::Arc;

use crate::models::customer;
use crate::repositories::CustomerStore;

/// Service used by the web handlers to read customer records.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Returns every stored customer.
    pub async fn list_all(&self) -> Result<Vec<customer::Model>> {
        self.store.list_all().await
    }

    /// Returns the customers whose name, email or address contains `keyword`.
    pub async fn search(&self, keyword: &str) -> Result<Vec<customer::Model>> {
        self.store.search(keyword).await
    }
}

impl std::fmt::Debug for CustomerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerService").finish_non_exhaustive()
    }
}
