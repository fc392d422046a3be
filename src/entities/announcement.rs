//! Announcement entity - A short notice shown on the home page.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Announcement database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    /// Unique identifier for the announcement
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Text body of the announcement
    pub body: String,
    /// Admin-entered free-text date label (e.g. "March 3rd")
    pub date_label: String,
    /// Display order, ascending; not unique
    pub rank: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
