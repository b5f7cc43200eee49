pub mod factory;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use crate::{notifications::Notifier, startup::AppState};

/// Fresh in-memory SQLite database, fully migrated (seed data included).
pub async fn init_db() -> Result<DbConn, DbErr> {
    dotenvy::from_filename(".env.test").ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    // A single pooled connection, so every query lands on the same
    // in-memory SQLite database instead of a fresh (unmigrated) one.
    let mut opts = ConnectOptions::new(database_url);
    opts.max_connections(1);
    let db = Database::connect(opts)
        .await
        .expect("Failed to open DB connection.");
    Migrator::up(&db, None).await?;
    eprintln!("DEBUG: migrations applied");
    Ok(db)
}

/// AppState with a notifier whose dispatcher never runs; events published
/// during a test are dropped.
pub fn app_state(db: DbConn) -> AppState {
    AppState {
        conn: db,
        notifier: Notifier::disconnected(),
    }
}
