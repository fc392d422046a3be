//! Resource business logic.

use crate::{
    entities::{Resource, resource},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// All resources ordered by rank ascending.
pub async fn list_resources(db: &DatabaseConnection) -> Result<Vec<resource::Model>> {
    Resource::find()
        .order_by_asc(resource::Column::Rank)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds one resource by id, for the edit form.
pub async fn get_resource_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<resource::Model>> {
    Resource::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Inserts a new resource.
pub async fn create_resource(
    db: &DatabaseConnection,
    heading: String,
    description: String,
    link: String,
    rank: i32,
) -> Result<resource::Model> {
    let resource = resource::ActiveModel {
        heading: Set(heading),
        description: Set(description),
        link: Set(link),
        rank: Set(rank),
        ..Default::default()
    };
    Ok(resource.insert(db).await?)
}

/// Overwrites every field of an existing resource.
pub async fn update_resource(
    db: &DatabaseConnection,
    id: i64,
    heading: String,
    description: String,
    link: String,
    rank: i32,
) -> Result<resource::Model> {
    let existing = Resource::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "resource",
            id,
        })?;

    let mut model: resource::ActiveModel = existing.into();
    model.heading = Set(heading);
    model.description = Set(description);
    model.link = Set(link);
    model.rank = Set(rank);
    Ok(model.update(db).await?)
}

/// Deletes a resource by id; absent ids are `NotFound`.
pub async fn delete_resource(db: &DatabaseConnection, id: i64) -> Result<()> {
    let existing = Resource::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "resource",
            id,
        })?;
    existing.delete(db).await?;
    Ok(())
}
