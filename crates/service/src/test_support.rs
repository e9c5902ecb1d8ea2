#![cfg(test)]
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Migrations run once per test process; `false` means no usable database.
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> Option<configs::DatabaseConfig> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = std::env::var("DATABASE_URL").ok()?;
    Some(configs::DatabaseConfig { url, min_connections: 1, ..configs::DatabaseConfig::default() })
}

/// A migrated PostgreSQL connection, or `None` when `DATABASE_URL` is unset
/// or unreachable so callers can skip.
pub async fn get_db() -> Option<DatabaseConnection> {
    let cfg = test_config()?;
    let ready = *MIGRATED
        .get_or_init(|| async {
            let Ok(db) = connect_with_config(&cfg).await else {
                eprintln!("skip: cannot connect to {}", cfg.url);
                return false;
            };
            match migration::Migrator::up(&db, None).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("skip: migrate up failed: {e}");
                    false
                }
            }
        })
        .await;
    if !ready {
        return None;
    }
    // fresh connection for the current test's runtime
    connect_with_config(&cfg).await.ok()
}
