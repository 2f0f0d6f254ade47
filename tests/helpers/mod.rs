//! Shared setup for the integration tests: a throwaway SQLite file per test.

use hotel_admin::config::AppConfig;
use hotel_admin::storage;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

pub struct TestDb {
    // Dropping the directory deletes the database file.
    _dir: TempDir,
    pub db: DatabaseConnection,
}

impl TestDb {
    /// Schema only, no rows.
    pub async fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("hotel.db").display());
        let db = storage::establish_connection(&AppConfig::for_database(url))
            .await
            .expect("Failed to open test database");
        Self { _dir: dir, db }
    }

    /// Schema plus the reference fixtures.
    pub async fn seeded() -> Self {
        let test_db = Self::empty().await;
        storage::seed(&test_db.db)
            .await
            .expect("Failed to seed test database");
        test_db
    }
}

pub fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("bad test date")
}
