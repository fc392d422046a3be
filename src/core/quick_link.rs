//! Quick link business logic.

use crate::{
    entities::{QuickLink, quick_link},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// All quick links ordered by rank ascending.
pub async fn list_quick_links(db: &DatabaseConnection) -> Result<Vec<quick_link::Model>> {
    QuickLink::find()
        .order_by_asc(quick_link::Column::Rank)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds one quick link by id, for the edit form.
pub async fn get_quick_link_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<quick_link::Model>> {
    QuickLink::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Inserts a new quick link.
pub async fn create_quick_link(
    db: &DatabaseConnection,
    description: String,
    link: String,
    rank: i32,
) -> Result<quick_link::Model> {
    let quick_link = quick_link::ActiveModel {
        description: Set(description),
        link: Set(link),
        rank: Set(rank),
        ..Default::default()
    };
    Ok(quick_link.insert(db).await?)
}

/// Overwrites every field of an existing quick link.
pub async fn update_quick_link(
    db: &DatabaseConnection,
    id: i64,
    description: String,
    link: String,
    rank: i32,
) -> Result<quick_link::Model> {
    let existing = QuickLink::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "quick link",
            id,
        })?;

    let mut model: quick_link::ActiveModel = existing.into();
    model.description = Set(description);
    model.link = Set(link);
    model.rank = Set(rank);
    Ok(model.update(db).await?)
}

/// Deletes a quick link by id; absent ids are `NotFound`.
pub async fn delete_quick_link(db: &DatabaseConnection, id: i64) -> Result<()> {
    let existing = QuickLink::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "quick link",
            id,
        })?;
    existing.delete(db).await?;
    Ok(())
}
