//! HTTP layer - shared state, routing, and handlers.
//!
//! Handlers are thin adapters from HTTP to `core`; everything they share
//! travels in [`AppState`]. The route table is the single place the URL
//! surface is defined.

/// Admin login, registration, and content CRUD handlers
pub mod admin;
/// Core-error to HTTP response mapping
pub mod error;
/// Unauthenticated page handlers
pub mod public;
/// Template registry
pub mod render;
/// Public inquiry-relay handlers
pub mod relay;
/// Signed-cookie sessions, flash messages, and the admin route guard
pub mod session;

use crate::config::Settings;
use crate::errors::{Error, Result};
use crate::mail::Mailer;
use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::Key;
use render::Templates;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state available to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all persistence operations
    pub db: DatabaseConnection,
    /// Process configuration, resolved once at startup
    pub settings: Arc<Settings>,
    /// Outbound notification capability
    pub mailer: Arc<dyn Mailer>,
    /// Page template registry
    pub templates: Arc<Templates>,
    key: Key,
}

impl AppState {
    /// Assembles the shared state, deriving the cookie-signing key from the
    /// configured session secret.
    pub fn new(
        db: DatabaseConnection,
        settings: Arc<Settings>,
        mailer: Arc<dyn Mailer>,
    ) -> Result<Self> {
        if settings.session_secret.len() < 32 {
            return Err(Error::Config {
                message: "SESSION_SECRET must be at least 32 bytes".to_string(),
            });
        }
        let key = Key::derive_from(settings.session_secret.as_bytes());
        Ok(Self {
            db,
            settings,
            mailer,
            templates: Arc::new(Templates::new()?),
            key,
        })
    }
}

// Lets SignedCookieJar find the signing key through the shared state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

/// Builds the full route table over the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Public pages
        .route("/", get(public::home))
        .route("/error", get(public::error_page))
        .route("/league/{number}/submit-scores", get(public::submit_scores_page))
        .route("/league/{number}/sign-up", get(public::sign_up_page))
        .route("/league/{number}/request-info", get(public::request_info_page))
        .route("/league/{number}/standings", get(public::standings_page))
        // Public inquiry relays (GET is the no-op half)
        .route(
            "/league/{number}/send-scores",
            get(relay::scores_noop).post(relay::send_scores),
        )
        .route(
            "/league/{number}/send-signup",
            get(relay::signup_noop).post(relay::send_signup),
        )
        .route(
            "/league/{number}/send-info-request",
            get(relay::info_request_noop).post(relay::send_info_request),
        )
        // Session and account management
        .route("/admin_login", get(admin::login_page))
        .route("/login", get(admin::login_get).post(admin::login))
        .route("/create_admin", get(admin::register_page).post(admin::register))
        .route("/logout", get(admin::logout))
        .route("/admin_page", get(admin::admin_page))
        .route(
            "/delete-admin/{id}",
            get(admin::delete_admin).post(admin::delete_admin),
        )
        // League CRUD
        .route("/add_league", get(admin::mutation_noop).post(admin::add_league))
        .route(
            "/update-league/{id}",
            get(admin::update_league_page).post(admin::update_league),
        )
        .route(
            "/delete-league/{id}",
            get(admin::delete_league).post(admin::delete_league),
        )
        // Announcement CRUD
        .route(
            "/add_announcement",
            get(admin::mutation_noop).post(admin::add_announcement),
        )
        .route(
            "/update-announcement/{id}",
            get(admin::update_announcement_page).post(admin::update_announcement),
        )
        .route(
            "/delete-announcement/{id}",
            get(admin::delete_announcement).post(admin::delete_announcement),
        )
        // Resource CRUD
        .route(
            "/add_resource",
            get(admin::mutation_noop).post(admin::add_resource),
        )
        .route(
            "/update-resource/{id}",
            get(admin::update_resource_page).post(admin::update_resource),
        )
        .route(
            "/delete-resource/{id}",
            get(admin::delete_resource).post(admin::delete_resource),
        )
        // Quick link CRUD
        .route(
            "/add_quick_link",
            get(admin::mutation_noop).post(admin::add_quick_link),
        )
        .route(
            "/update-quick_link/{id}",
            get(admin::update_quick_link_page).post(admin::update_quick_link),
        )
        .route(
            "/delete-quick_link/{id}",
            get(admin::delete_quick_link).post(admin::delete_quick_link),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{announcement, auth};
    use crate::entities::{Announcement, User};
    use crate::test_utils::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use sea_orm::{EntityTrait, PaginatorTrait};
    use tower::ServiceExt;

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    /// Logs in through the real endpoint and returns the session cookie.
    async fn login_cookie(app: &Router, name: &str, password: &str) -> String {
        let response = app
            .clone()
            .oneshot(form_request(
                "/login",
                &format!("name={name}&password={password}"),
            ))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin_page");
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().split(';').next().unwrap().to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }

    #[tokio::test]
    async fn test_home_page_renders() {
        let (app, _db, _mailer) = setup_test_app().await.unwrap();
        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unauthenticated_mutation_is_rejected_before_the_store() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();

        let response = app
            .oneshot(form_request(
                "/add_announcement",
                "item=hello&date=Jan+1&rank=1",
            ))
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/admin_login");
        assert_eq!(Announcement::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_login_then_admin_page_and_crud() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();
        create_test_admin(&db, "alice", "sekrit").await.unwrap();

        let cookie = login_cookie(&app, "alice", "sekrit").await;

        // Admin page now renders
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/admin_page")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Authenticated create goes through and redirects to the admin page
        let mut request = form_request("/add_announcement", "item=hello&date=Jan+1&rank=1");
        request
            .headers_mut()
            .insert(header::COOKIE, cookie.parse().unwrap());
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(location(&response), "/admin_page");
        assert_eq!(Announcement::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_login_failure_redirects_to_login_page() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();
        create_test_admin(&db, "alice", "sekrit").await.unwrap();

        let response = app
            .clone()
            .oneshot(form_request("/login", "name=alice&password=wrong"))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin_login");

        let response = app
            .oneshot(form_request("/login", "name=nobody&password=wrong"))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin_login");
    }

    #[tokio::test]
    async fn test_get_login_bounces_home() {
        let (app, _db, _mailer) = setup_test_app().await.unwrap();
        let response = app.oneshot(get_request("/login")).await.unwrap();
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_registration_through_the_form() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();

        let response = app
            .clone()
            .oneshot(form_request(
                "/create_admin",
                &format!(
                    "name=alice&password1=sekrit&password2=sekrit&secret_code={TEST_SIGNUP_CODE}"
                ),
            ))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin_login");
        assert_eq!(User::find().count(&db).await.unwrap(), 1);

        // Wrong code inserts nothing but still lands on the login page
        let response = app
            .oneshot(form_request(
                "/create_admin",
                "name=bob&password1=sekrit&password2=sekrit&secret_code=wrong",
            ))
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin_login");
        assert_eq!(User::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_score_relay_sends_one_mail_and_redirects() {
        let (app, db, mailer) = setup_test_app().await.unwrap();
        create_test_league(&db, 2, "coach2@example.com").await.unwrap();

        let response = app
            .oneshot(form_request(
                "/league/2/send-scores",
                "p1_name=Alice&p1_score=3&p2_name=Bob&p2_score=1&email=a@example.com&comments=",
            ))
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/league/2/submit-scores");

        let mails = mailer.sent();
        assert_eq!(mails.len(), 1);
        assert_eq!(mails[0].to, "coach2@example.com");
        for needle in ["Alice", "Bob", "3", "1"] {
            assert!(mails[0].body.contains(needle));
        }
    }

    #[tokio::test]
    async fn test_zero_match_relay_is_a_silent_success() {
        let (app, _db, mailer) = setup_test_app().await.unwrap();

        let response = app
            .oneshot(form_request(
                "/league/3/send-signup",
                "name=Carol&phone_number=555&email=c@example.com&comments=hi",
            ))
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/league/3/sign-up");
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_league_number_is_not_found() {
        let (app, _db, _mailer) = setup_test_app().await.unwrap();

        let response = app
            .clone()
            .oneshot(get_request("/league/9/submit-scores"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(form_request(
                "/league/9/send-scores",
                "p1_name=A&p1_score=1&p2_name=B&p2_score=2&email=x@example.com&comments=",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_league_pages_render_for_configured_numbers() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();
        create_test_league(&db, 1, "coach1@example.com").await.unwrap();

        for path in [
            "/league/1/submit-scores",
            "/league/1/sign-up",
            "/league/1/request-info",
            "/league/1/standings",
        ] {
            let response = app.clone().oneshot(get_request(path)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{path}");
        }
    }

    #[tokio::test]
    async fn test_mutation_noop_get_changes_nothing() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();
        create_test_admin(&db, "alice", "sekrit").await.unwrap();
        let cookie = login_cookie(&app, "alice", "sekrit").await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/add_announcement")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/admin_page");
        assert_eq!(Announcement::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();
        create_test_admin(&db, "alice", "sekrit").await.unwrap();
        let cookie = login_cookie(&app, "alice", "sekrit").await;

        let mut request = form_request(
            "/update-announcement/999",
            "item=x&date=y&rank=1",
        );
        request
            .headers_mut()
            .insert(header::COOKIE, cookie.parse().unwrap());
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_account_and_session_invalidation() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();
        let user = create_test_admin(&db, "alice", "sekrit").await.unwrap();
        let cookie = login_cookie(&app, "alice", "sekrit").await;

        // Delete own account (GET link, as the admin page renders it)
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/delete-admin/{}", user.id))
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(location(&response), "/");
        assert_eq!(auth::list_users(&db).await.unwrap().len(), 0);

        // The stale session no longer authenticates
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin_page")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(location(&response), "/admin_login");
    }

    #[tokio::test]
    async fn test_flash_appears_once_then_clears() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();
        create_test_league(&db, 1, "coach1@example.com").await.unwrap();

        let response = app
            .clone()
            .oneshot(form_request(
                "/league/1/send-scores",
                "p1_name=A&p1_score=1&p2_name=B&p2_score=2&email=x@example.com&comments=",
            ))
            .await
            .unwrap();
        let flash_cookie = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().split(';').next().unwrap().to_string())
            .collect::<Vec<_>>()
            .join("; ");

        // The next page render shows the notice and clears the cookie
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/league/1/submit-scores")
                    .header(header::COOKIE, &flash_cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Score submitted successfully!"));
    }

    #[tokio::test]
    async fn test_logout_clears_the_session() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();
        create_test_admin(&db, "alice", "sekrit").await.unwrap();
        let cookie = login_cookie(&app, "alice", "sekrit").await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/logout")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(location(&response), "/");

        // Without a session, logout itself redirects to the login page
        let response = app.oneshot(get_request("/logout")).await.unwrap();
        assert_eq!(location(&response), "/admin_login");
    }

    #[tokio::test]
    async fn test_announcements_list_in_rank_order_on_home() {
        let (app, db, _mailer) = setup_test_app().await.unwrap();
        for (body, rank) in [("third", 3), ("first", 1), ("second", 2)] {
            announcement::create_announcement(&db, body.to_string(), "date".to_string(), rank)
                .await
                .unwrap();
        }

        let response = app.oneshot(get_request("/")).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        let first = body.find("first").unwrap();
        let second = body.find("second").unwrap();
        let third = body.find("third").unwrap();
        assert!(first < second && second < third);
    }
}
