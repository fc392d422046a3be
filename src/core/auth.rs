//! Account management and credential checking.
//!
//! Registration is self-service but gated by the shared signup code; there
//! is exactly one role, and every account can manage all content. Passwords
//! are stored as salted argon2 hashes. There is no reset path: a forgotten
//! password means the account gets deleted and recreated.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Hashes a password with a fresh random salt, producing a PHC string.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Credential {
            message: e.to_string(),
        })
}

/// Checks a password against a stored PHC-string hash.
///
/// A mismatch is `Ok(false)`; only a corrupt stored hash is an error.
pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| Error::Credential {
        message: e.to_string(),
    })?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Credential {
            message: e.to_string(),
        }),
    }
}

/// Registers a new admin account.
///
/// Checks run in a fixed order and the first failure wins: taken name,
/// password mismatch, password shorter than 5 characters, wrong signup
/// code. Each failure carries the exact message shown to the visitor.
/// On success exactly one row is inserted, holding the hash and never
/// the plaintext.
pub async fn register(
    db: &DatabaseConnection,
    name: &str,
    password: &str,
    confirm_password: &str,
    supplied_code: &str,
    expected_code: &str,
) -> Result<user::Model> {
    let existing = User::find()
        .filter(user::Column::Name.eq(name))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::validation("Name already exists"));
    }
    if password != confirm_password {
        return Err(Error::validation("Passwords did not match"));
    }
    if password.chars().count() < 5 {
        return Err(Error::validation(
            "Password is too short... Must be at least 5 characters long",
        ));
    }
    if supplied_code != expected_code {
        return Err(Error::validation(
            "Contact an admin to get the secret code to create an account",
        ));
    }

    let user = user::ActiveModel {
        name: Set(name.to_string()),
        password_hash: Set(hash_password(password)?),
        ..Default::default()
    };
    Ok(user.insert(db).await?)
}

/// Checks credentials and returns the matching account.
///
/// An unknown name and a wrong password are distinguished in the message
/// text, though both deny access the same way.
pub async fn authenticate(
    db: &DatabaseConnection,
    name: &str,
    password: &str,
) -> Result<user::Model> {
    let user = User::find()
        .filter(user::Column::Name.eq(name))
        .one(db)
        .await?
        .ok_or_else(|| Error::auth("Name does not exist"))?;

    if verify_password(&user.password_hash, password)? {
        Ok(user)
    } else {
        Err(Error::auth("Incorrect Password"))
    }
}

/// Finds an account by its id; used by the session guard on every
/// authenticated request.
pub async fn get_user_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(id).one(db).await.map_err(Into::into)
}

/// All accounts ordered by name, for the admin page listing.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_asc(user::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes an account by id. Deleting an absent id is `NotFound`; the
/// delete is physical and irreversible.
pub async fn delete_user(db: &DatabaseConnection, id: i64) -> Result<()> {
    let user = User::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::NotFound { entity: "user", id })?;
    user.delete(db).await?;
    Ok(())
}
