//! Announcement business logic.
//!
//! Announcements carry a free-text date label rather than a real date
//! column; ordering is entirely by the admin-assigned rank.

use crate::{
    entities::{Announcement, announcement},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// All announcements ordered by rank ascending. Unauthenticated callers use
/// this for the home page; the admin page reuses it for its listing.
pub async fn list_announcements(db: &DatabaseConnection) -> Result<Vec<announcement::Model>> {
    Announcement::find()
        .order_by_asc(announcement::Column::Rank)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds one announcement by id, for the edit form.
pub async fn get_announcement_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<announcement::Model>> {
    Announcement::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Inserts a new announcement.
pub async fn create_announcement(
    db: &DatabaseConnection,
    body: String,
    date_label: String,
    rank: i32,
) -> Result<announcement::Model> {
    let announcement = announcement::ActiveModel {
        body: Set(body),
        date_label: Set(date_label),
        rank: Set(rank),
        ..Default::default()
    };
    Ok(announcement.insert(db).await?)
}

/// Overwrites every field of an existing announcement. There is no partial
/// update; concurrent edits are last-writer-wins.
pub async fn update_announcement(
    db: &DatabaseConnection,
    id: i64,
    body: String,
    date_label: String,
    rank: i32,
) -> Result<announcement::Model> {
    let existing = Announcement::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "announcement",
            id,
        })?;

    let mut model: announcement::ActiveModel = existing.into();
    model.body = Set(body);
    model.date_label = Set(date_label);
    model.rank = Set(rank);
    Ok(model.update(db).await?)
}

/// Deletes an announcement by id; absent ids are `NotFound`.
pub async fn delete_announcement(db: &DatabaseConnection, id: i64) -> Result<()> {
    let existing = Announcement::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "announcement",
            id,
        })?;
    existing.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_list_orders_by_rank() -> Result<()> {
        let db = setup_test_db().await?;
        create_announcement(&db, "third".to_string(), "Jan 3".to_string(), 3).await?;
        create_announcement(&db, "first".to_string(), "Jan 1".to_string(), 1).await?;
        create_announcement(&db, "second".to_string(), "Jan 2".to_string(), 2).await?;

        let ranks: Vec<i32> = list_announcements(&db)
            .await?
            .into_iter()
            .map(|a| a.rank)
            .collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_overwrites_every_field() -> Result<()> {
        let db = setup_test_db().await?;
        let created =
            create_announcement(&db, "old body".to_string(), "old date".to_string(), 1).await?;

        let updated = update_announcement(
            &db,
            created.id,
            "new body".to_string(),
            "new date".to_string(),
            9,
        )
        .await?;
        assert_eq!(updated.body, "new body");
        assert_eq!(updated.date_label, "new date");
        assert_eq!(updated.rank, 9);

        let stored = get_announcement_by_id(&db, created.id).await?.unwrap();
        assert_eq!(stored, updated);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        create_announcement(&db, "body".to_string(), "date".to_string(), 1).await?;

        let result =
            update_announcement(&db, 999, "x".to_string(), "y".to_string(), 2).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));
        assert_eq!(Announcement::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_semantics() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_announcement(&db, "body".to_string(), "date".to_string(), 1).await?;

        let missing = delete_announcement(&db, 999).await;
        assert!(matches!(missing.unwrap_err(), Error::NotFound { .. }));
        assert_eq!(Announcement::find().count(&db).await?, 1);

        delete_announcement(&db, created.id).await?;
        assert_eq!(Announcement::find().count(&db).await?, 0);

        let repeat = delete_announcement(&db, created.id).await;
        assert!(matches!(repeat.unwrap_err(), Error::NotFound { .. }));
        Ok(())
    }
}
