//! Customer entity model
//!
//! This module contains the SeaORM entity model for the customer table,
//! the only table the service owns.

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer record
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "customer")]
#[schema(as = Customer)]
pub struct Model {
    /// Engine-assigned identifier (primary key)
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Customer name
    pub name: String,

    /// Contact e-mail, stored as given
    pub email: String,

    /// Postal address
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Field values for a customer that has not been assigned an id yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl NewCustomer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Builds an insertable active model; the id stays unset so the engine assigns it.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            email: Set(self.email),
            address: Set(self.address),
            ..Default::default()
        }
    }
}
