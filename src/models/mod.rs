//! # Data Models
//!
//! This module contains the data models used throughout the Customer Manager.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod customer;

pub use customer::Entity as Customer;
pub use customer::NewCustomer;

/// Health probe response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// `ok` when the database answered
    pub status: String,
    /// The version of the service
    pub version: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
