use clubhub::config::{self, Settings};
use clubhub::errors::Result;
use clubhub::mail::SmtpMailer;
use clubhub::web::{build_router, AppState};
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let settings = Settings::load()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;
    let settings = Arc::new(settings);

    // 4. Connect to the database and make sure the schema exists
    let db = config::database::create_connection(&settings.database_url)
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Build the SMTP mailer from configuration
    let mailer = Arc::new(SmtpMailer::from_settings(&settings)?);

    // 6. Assemble shared state and serve
    let state = AppState::new(db, Arc::clone(&settings), mailer)?;
    let app = build_router(state);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    info!("Listening on {}", settings.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
