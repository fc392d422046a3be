//! Shared test utilities.
//!
//! Helpers for setting up in-memory test databases, creating test entities
//! with sensible defaults, and standing up the full router with a recording
//! mailer for end-to-end handler tests.

use crate::{
    config::Settings,
    core::{auth, league},
    entities,
    errors::{Error, Result},
    mail::Mailer,
    web::{build_router, AppState},
};
use async_trait::async_trait;
use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::{Arc, Mutex};

/// Signup code used by all test settings and fixtures.
pub const TEST_SIGNUP_CODE: &str = "club-secret";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Registers a test admin account through the real registration path.
pub async fn create_test_admin(
    db: &DatabaseConnection,
    name: &str,
    password: &str,
) -> Result<entities::user::Model> {
    auth::register(
        db,
        name,
        password,
        password,
        TEST_SIGNUP_CODE,
        TEST_SIGNUP_CODE,
    )
    .await
}

/// Creates a test league named "League {number}" with the given contact
/// address and placeholder contact details.
pub async fn create_test_league(
    db: &DatabaseConnection,
    number: i32,
    contact_email: &str,
) -> Result<entities::league::Model> {
    league::create_league(
        db,
        number,
        format!("League {number}"),
        "Test Contact".to_string(),
        contact_email.to_string(),
        "https://example.com/standings".to_string(),
    )
    .await
}

/// One message captured by [`MemoryMailer`].
#[derive(Debug, Clone)]
pub struct SentMail {
    /// Subject line as composed by the relay
    pub subject: String,
    /// Plain-text body
    pub body: String,
    /// Recipient address
    pub to: String,
}

/// Recording mailer: stores every send instead of delivering, or fails
/// every send when built with [`MemoryMailer::failing`].
#[derive(Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<SentMail>>,
    fail: bool,
}

impl MemoryMailer {
    /// A mailer whose every send fails with a transport error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Everything sent so far, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().expect("mailer lock poisoned").clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, subject: &str, body: &str, to: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Mail {
                message: "simulated transport failure".to_string(),
            });
        }
        self.sent.lock().expect("mailer lock poisoned").push(SentMail {
            subject: subject.to_string(),
            body: body.to_string(),
            to: to.to_string(),
        });
        Ok(())
    }
}

/// Settings fixture: defaults everywhere, league numbers 1 through 5, and
/// dummy transport values that no test actually connects with.
#[must_use]
pub fn test_settings() -> Settings {
    Settings {
        database_url: "sqlite::memory:".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        site_name: "Club Site".to_string(),
        session_secret: "0123456789abcdef0123456789abcdef".to_string(),
        signup_code: TEST_SIGNUP_CODE.to_string(),
        smtp_host: "smtp.example.com".to_string(),
        smtp_sender: "bot@example.com".to_string(),
        smtp_password: "unused".to_string(),
        league_numbers: (1..=5).collect(),
    }
}

/// Stands up the full router over a fresh in-memory database and a
/// recording mailer. Returns the router plus handles for assertions.
pub async fn setup_test_app() -> Result<(Router, DatabaseConnection, Arc<MemoryMailer>)> {
    let db = setup_test_db().await?;
    let mailer = Arc::new(MemoryMailer::default());
    let state = AppState::new(db.clone(), Arc::new(test_settings()), mailer.clone())?;
    Ok((build_router(state), db, mailer))
}
