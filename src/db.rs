use migration::Migrator;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;

use crate::error::AppResult;

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url);
    // A pooled in-memory SQLite hands each connection its own database;
    // everything after the first would see an empty schema.
    if database_url.contains(":memory:") || database_url.contains("mode=memory") {
        opts.max_connections(1);
    }

    let db = Database::connect(opts).await?;

    for pragma in [
        "PRAGMA journal_mode=WAL",
        "PRAGMA synchronous=NORMAL",
        "PRAGMA cache_size=-64000",
        // SQLite ships with foreign keys off; cascade and set-null depend on it.
        "PRAGMA foreign_keys=ON",
    ] {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    Migrator::up(&db, None).await?;
    tracing::info!("database schema up to date");

    Ok(db)
}
