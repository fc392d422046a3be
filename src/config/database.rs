//! Database connection and schema management.
//!
//! Establishes the SeaORM connection and creates all tables from the entity
//! definitions using `Schema::create_table_from_entity`, so the database
//! schema always matches the Rust struct definitions without manual SQL.
//! Table creation runs on every startup and is idempotent.

use crate::entities::{Announcement, League, QuickLink, Resource, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the database named by the connection string.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Uses the backend-appropriate SQL generated by SeaORM's schema builder,
/// with `IF NOT EXISTS` so repeated startups leave existing data untouched.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut user_table = schema.create_table_from_entity(User);
    let mut announcement_table = schema.create_table_from_entity(Announcement);
    let mut league_table = schema.create_table_from_entity(League);
    let mut resource_table = schema.create_table_from_entity(Resource);
    let mut quick_link_table = schema.create_table_from_entity(QuickLink);

    db.execute(builder.build(user_table.if_not_exists())).await?;
    db.execute(builder.build(announcement_table.if_not_exists()))
        .await?;
    db.execute(builder.build(league_table.if_not_exists())).await?;
    db.execute(builder.build(resource_table.if_not_exists()))
        .await?;
    db.execute(builder.build(quick_link_table.if_not_exists()))
        .await?;

    Ok(())
}
