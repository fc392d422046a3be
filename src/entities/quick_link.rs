//! Quick link entity - A labeled shortcut shown on the home page.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Quick link database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quick_links")]
pub struct Model {
    /// Unique identifier for the link
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Label shown for the link
    pub description: String,
    /// Target URL
    pub link: String,
    /// Display order, ascending; not unique
    pub rank: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
