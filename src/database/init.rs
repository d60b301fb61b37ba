//! Schema creation. Every statement is idempotent so it runs on each startup.

use super::DbPool;

const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY,
        goal TEXT
    )"#,
    r#"CREATE TABLE IF NOT EXISTS logs (
        id TEXT,
        type TEXT,
        duration INTEGER,
        date TEXT
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_logs_user ON logs (id)",
    r#"CREATE TABLE IF NOT EXISTS playlists (
        user_id TEXT,
        playlist_name TEXT,
        songs TEXT,
        PRIMARY KEY (user_id, playlist_name)
    )"#,
];

pub(super) async fn create_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
