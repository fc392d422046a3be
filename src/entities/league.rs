//! League entity - One league's public information and contact address.
//!
//! The league number doubles as the routing discriminator for the public
//! per-league pages and as the delivery target selector for inquiry relays.
//! Nothing references leagues by foreign key; the relay path matches rows
//! by number at request time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// League information database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leagues")]
pub struct Model {
    /// Unique identifier for the row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Small integer identifying the league, unique across rows
    #[sea_orm(unique)]
    pub league_number: i32,
    /// Human-readable league name, used in relay mail subjects
    pub name: String,
    /// Name of the league's contact person
    pub contact_name: String,
    /// Address inquiry relays for this league are delivered to
    pub contact_email: String,
    /// External link (standings, schedule, etc.)
    pub link: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
