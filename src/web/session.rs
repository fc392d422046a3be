//! Signed-cookie session and flash handling.
//!
//! The admin session is a signed cookie carrying the account's row id;
//! there is no server-side session store. Flash messages ride in a second
//! signed cookie as a JSON list and are consumed by the next rendered page.
//! Tampering invalidates the signature, which reads as "no cookie".

use crate::core::auth;
use crate::entities::UserModel;
use crate::web::AppState;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, Key, SignedCookieJar};
use serde::{Deserialize, Serialize};

/// Cookie holding the logged-in admin's row id.
const SESSION_COOKIE: &str = "clubhub_session";
/// Cookie holding pending flash messages as a JSON list.
const FLASH_COOKIE: &str = "clubhub_flash";

/// A transient notice attached to the next rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    /// "success" or "error"; templates style the notice by this
    pub category: String,
    /// User-visible text
    pub message: String,
}

impl Flash {
    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: "success".to_string(),
            message: message.into(),
        }
    }

    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Establishes a persistent ("remember me") session for the given account.
pub fn log_in(jar: SignedCookieJar, user_id: i64) -> SignedCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, user_id.to_string()))
            .path("/")
            .http_only(true)
            .permanent()
            .build(),
    )
}

/// Clears the session cookie.
pub fn log_out(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/").build())
}

/// Appends a flash message to the pending list.
pub fn push_flash(jar: SignedCookieJar, flash: Flash) -> SignedCookieJar {
    let mut flashes = peek_flashes(&jar);
    flashes.push(flash);
    let encoded = serde_json::to_string(&flashes).unwrap_or_else(|_| "[]".to_string());
    jar.add(
        Cookie::build((FLASH_COOKIE, encoded))
            .path("/")
            .http_only(true)
            .build(),
    )
}

/// Removes and returns all pending flash messages.
pub fn take_flashes(jar: SignedCookieJar) -> (SignedCookieJar, Vec<Flash>) {
    let flashes = peek_flashes(&jar);
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());
    (jar, flashes)
}

fn peek_flashes(jar: &SignedCookieJar) -> Vec<Flash> {
    jar.get(FLASH_COOKIE)
        .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
        .unwrap_or_default()
}

/// Route guard: the logged-in admin account.
///
/// Extraction runs before the handler body (and before any body
/// extractor), so a missing or invalid session rejects the request before
/// any persistence mutation can happen. The rejection is a redirect to the
/// login page rather than a bare status code.
pub struct AdminUser(pub UserModel);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = Key::from_ref(state);
        let jar = SignedCookieJar::from_headers(&parts.headers, key);

        let user_id = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| cookie.value().parse::<i64>().ok())
            .ok_or_else(|| Redirect::to("/admin_login"))?;

        // A session naming a since-deleted account is treated the same as
        // no session at all.
        match auth::get_user_by_id(&state.db, user_id).await {
            Ok(Some(user)) => Ok(AdminUser(user)),
            Ok(None) | Err(_) => Err(Redirect::to("/admin_login")),
        }
    }
}
