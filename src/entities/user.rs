//! User entity - An administrator account.
//!
//! Accounts are self-registered behind the shared signup code and carry only
//! a display name and a salted password hash. There is no password reset: a
//! lost password means the account is deleted and recreated.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Admin account database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name, unique across all accounts
    #[sea_orm(unique)]
    pub name: String,
    /// Argon2 PHC-string hash of the password; the plaintext is never stored
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
