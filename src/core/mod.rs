//! Core business logic - framework-agnostic operations over the
//! persistence layer and the mailer capability. The web layer stays thin;
//! everything testable lives here.

/// Announcement CRUD
pub mod announcement;
/// Account registration, credential checking, and account deletion
pub mod auth;
/// League information CRUD and number-filter lookups
pub mod league;
/// Quick link CRUD
pub mod quick_link;
/// Inquiry relay composition and fan-out
pub mod relay;
/// Resource CRUD
pub mod resource;
