//! Resource entity - A linked resource shown on the home page.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Resource database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    /// Unique identifier for the resource
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Heading shown above the description
    pub heading: String,
    /// Free-text description of the resource
    pub description: String,
    /// Target URL
    pub link: String,
    /// Display order, ascending; not unique
    pub rank: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
