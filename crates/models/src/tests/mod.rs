//! PostgreSQL-backed checks. Each test returns early when no database is
//! reachable so the suite stays green on machines without one.

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

mod crud_tests;

/// Connect and migrate, or `None` when `DATABASE_URL` is unset or the
/// server cannot be reached.
pub(crate) async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("skip: DATABASE_URL not set");
        return None;
    };
    let cfg = configs::DatabaseConfig { url, min_connections: 1, ..Default::default() };
    let db = match crate::db::connect_with_config(&cfg).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}
