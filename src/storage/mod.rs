pub mod connection;
pub mod entity;
pub mod repository;
pub mod schema;
pub mod seed;

pub use connection::establish_connection;
pub use seed::{seed, SeedReport};

#[cfg(test)]
pub(crate) mod testing {
    use crate::config::AppConfig;
    use sea_orm::DatabaseConnection;
    use tempfile::TempDir;

    /// Empty schema on a throwaway file. Keep the `TempDir` alive for the test's duration.
    pub async fn fresh_db() -> (TempDir, DatabaseConnection) {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("hotel.db").display());
        let db = super::establish_connection(&AppConfig::for_database(url))
            .await
            .expect("connect test database");
        (dir, db)
    }

    pub async fn seeded_db() -> (TempDir, DatabaseConnection) {
        let (dir, db) = fresh_db().await;
        super::seed(&db).await.expect("seed test database");
        (dir, db)
    }
}
