use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::Path;

const CREATE_VISITS: &str = r#"
    CREATE TABLE IF NOT EXISTS visits (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Open a fresh connection to the visit log, creating the file and the
/// `visits` table if they are missing. The parent directory must exist.
pub async fn open(path: &str) -> Result<SqliteConnection, sqlx::Error> {
    let mut conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .connect()
        .await?;

    sqlx::query(CREATE_VISITS).execute(&mut conn).await?;

    Ok(conn)
}

/// Startup check: make sure the storage location is usable before serving.
pub async fn init(path: &str) -> Result<(), sqlx::Error> {
    // Ensure data directory exists
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    open(path).await?.close().await
}
