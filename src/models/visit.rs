use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use sqlx::sqlite::SqliteConnection;
use sqlx::FromRow;

/// Layout SQLite uses for `CURRENT_TIMESTAMP`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded hit on the index endpoint. Rows are append-only.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Visit {
    pub id: i64,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
}

fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

impl Visit {
    /// Append a visit stamped by SQLite and return its id.
    pub async fn record(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO visits (timestamp) VALUES (CURRENT_TIMESTAMP)")
            .execute(&mut *conn)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn all_newest_first(conn: &mut SqliteConnection) -> Result<Vec<Visit>, sqlx::Error> {
        sqlx::query_as("SELECT id, timestamp FROM visits ORDER BY id DESC")
            .fetch_all(&mut *conn)
            .await
    }
}
