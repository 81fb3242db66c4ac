//! Shared test utilities for the gift planner.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

#![allow(clippy::expect_used)]

use crate::{
    core::{gift_idea, party, user},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer tracing subscriber once per test binary.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")), // Default to TRACE for tests if RUST_LOG is not set
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a calendar date for tests.
pub fn test_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// The birthday given to every test user.
pub fn test_birthday() -> NaiveDate {
    test_date(1990, 6, 15)
}

/// Creates a test user with no password.
///
/// Skipping the password keeps fixtures fast; tests that need a usable
/// credential call `create_user` directly.
pub async fn create_test_user(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::user::Model> {
    let fields = user::NewUser::new(test_birthday()).with_name("Test User");
    user::create_user(db, email, None, fields).await
}

/// Creates a scheduled test party.
///
/// # Defaults
/// * `date`: 2026-12-24
/// * `deadline`: 2026-12-01
pub async fn create_test_party(db: &DatabaseConnection) -> Result<entities::party::Model> {
    party::create_party(db, Some(test_date(2026, 12, 24)), test_date(2026, 12, 1)).await
}

/// Creates a gift idea for `user_id`, suggested by the same user, outside any party.
pub async fn create_test_gift_idea(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entities::gift_idea::Model> {
    gift_idea::create_gift_idea(db, user_id, user_id, "Test idea".to_string(), None).await
}

/// Sets up a test environment with one user.
/// Returns (db, user) for common test scenarios.
pub async fn setup_with_user() -> Result<(DatabaseConnection, entities::user::Model)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "test@example.com").await?;
    Ok((db, user))
}

/// Sets up a test environment with one user and one party.
/// Returns (db, user, party) for party-related tests.
pub async fn setup_with_user_and_party() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::party::Model,
)> {
    let (db, user) = setup_with_user().await?;
    let party = create_test_party(&db).await?;
    Ok((db, user, party))
}
