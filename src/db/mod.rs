//! Database connectivity: async connection pool and embedded migrations.

mod pool;

pub use pool::{establish_async_connection_pool, AsyncDbPool};

use diesel_migrations::{embed_migrations, EmbeddedMigrations};

use crate::error::{AppError, AppResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Runs all pending migrations against the given database.
///
/// Migrations run on a blocking connection inside `spawn_blocking`; the
/// async pool is not involved.
pub async fn run_pending_migrations(database_url: &str) -> AppResult<()> {
    let database_url = database_url.to_string();
    let applied = tokio::task::spawn_blocking(move || {
        use diesel::pg::PgConnection;
        use diesel::Connection;
        use diesel_migrations::MigrationHarness;

        let mut conn = PgConnection::establish(&database_url).map_err(|e| AppError::Database {
            operation: "establish connection for migrations".to_string(),
            source: anyhow::anyhow!("Connection error: {}", e),
        })?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "run pending migrations".to_string(),
                source: anyhow::anyhow!("Migration error: {}", e),
            })?;

        Ok::<_, AppError>(applied.iter().map(|m| m.to_string()).collect::<Vec<_>>())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })??;

    for migration in &applied {
        tracing::info!(migration = %migration, "Applied migration");
    }

    Ok(())
}
