/// Database connection and schema management
pub mod database;

/// Process configuration loaded from the environment
pub mod settings;

pub use settings::Settings;
