//! Process configuration loaded from the environment.
//!
//! All deployment-specific values (connection string, secrets, mail
//! credential, the set of public league page numbers) come in through
//! environment variables, with `.env` loaded for convenience in `main`.
//! A missing required value is a startup-time misconfiguration, not a
//! runtime error path.

use crate::errors::{Error, Result};
use std::env;

/// Everything the process needs from its environment, resolved once at
/// startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    /// SeaORM connection string
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Site title used to compose page titles
    pub site_name: String,
    /// Key material for signing session and flash cookies
    pub session_secret: String,
    /// Shared secret gating admin self-registration
    pub signup_code: String,
    /// SMTP submission host (STARTTLS)
    pub smtp_host: String,
    /// Fixed sender address, also the SMTP username
    pub smtp_sender: String,
    /// SMTP credential
    pub smtp_password: String,
    /// League numbers the public per-league pages exist for
    pub league_numbers: Vec<i32>,
}

impl Settings {
    /// Loads all settings from the environment.
    ///
    /// Optional values fall back to documented defaults; secrets are
    /// required and their absence fails startup with a `Config` error.
    pub fn load() -> Result<Self> {
        Ok(Self {
            database_url: optional(
                "DATABASE_URL",
                "sqlite://data/clubhub.sqlite?mode=rwc",
            ),
            bind_addr: optional("BIND_ADDR", "0.0.0.0:3000"),
            site_name: optional("SITE_NAME", "Club Site"),
            session_secret: required("SESSION_SECRET")?,
            signup_code: required("SIGNUP_CODE")?,
            smtp_host: required("SMTP_HOST")?,
            smtp_sender: required("SMTP_SENDER")?,
            smtp_password: required("SMTP_PASSWORD")?,
            league_numbers: league_numbers("LEAGUE_NUMBERS")?,
        })
    }

    /// True when the public site serves pages for this league number.
    #[must_use]
    pub fn is_valid_league_number(&self, number: i32) -> bool {
        self.league_numbers.contains(&number)
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        tracing::info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn required(key: &str) -> Result<String> {
    env::var(key).map_err(|_| Error::Config {
        message: format!("required environment variable {key} is not set"),
    })
}

/// Parses a comma-separated list of league numbers, defaulting to `1..=5`.
fn league_numbers(key: &str) -> Result<Vec<i32>> {
    let raw = match env::var(key) {
        Ok(raw) => raw,
        Err(_) => return Ok((1..=5).collect()),
    };
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece.parse::<i32>().map_err(|_| Error::Config {
                message: format!("invalid {key} entry: {piece}"),
            })
        })
        .collect()
}
