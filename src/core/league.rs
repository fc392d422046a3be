//! League information business logic.
//!
//! League numbers are unique at the schema level, but the relay path looks
//! rows up with a filter rather than a key, so callers must handle zero or
//! more matches.

use crate::{
    entities::{League, league},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// All leagues ordered by league number ascending.
pub async fn list_leagues(db: &DatabaseConnection) -> Result<Vec<league::Model>> {
    League::find()
        .order_by_asc(league::Column::LeagueNumber)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds one league row by id, for the edit form.
pub async fn get_league_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<league::Model>> {
    League::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Rows whose league number equals `number`. This is a filter, not a key
/// lookup: the unique constraint makes more than one match impossible in
/// practice, but the relay path iterates whatever comes back, including
/// nothing.
pub async fn find_leagues_by_number(
    db: &DatabaseConnection,
    number: i32,
) -> Result<Vec<league::Model>> {
    League::find()
        .filter(league::Column::LeagueNumber.eq(number))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Inserts a new league row. A duplicate league number is rejected by the
/// storage layer's unique constraint, not checked here.
pub async fn create_league(
    db: &DatabaseConnection,
    league_number: i32,
    name: String,
    contact_name: String,
    contact_email: String,
    link: String,
) -> Result<league::Model> {
    let league = league::ActiveModel {
        league_number: Set(league_number),
        name: Set(name),
        contact_name: Set(contact_name),
        contact_email: Set(contact_email),
        link: Set(link),
        ..Default::default()
    };
    Ok(league.insert(db).await?)
}

/// Overwrites every field of an existing league row.
pub async fn update_league(
    db: &DatabaseConnection,
    id: i64,
    league_number: i32,
    name: String,
    contact_name: String,
    contact_email: String,
    link: String,
) -> Result<league::Model> {
    let existing = League::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "league",
            id,
        })?;

    let mut model: league::ActiveModel = existing.into();
    model.league_number = Set(league_number);
    model.name = Set(name);
    model.contact_name = Set(contact_name);
    model.contact_email = Set(contact_email);
    model.link = Set(link);
    Ok(model.update(db).await?)
}

/// Deletes a league row by id; absent ids are `NotFound`.
pub async fn delete_league(db: &DatabaseConnection, id: i64) -> Result<()> {
    let existing = League::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "league",
            id,
        })?;
    existing.delete(db).await?;
    Ok(())
}
