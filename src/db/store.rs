use chrono::{DateTime, NaiveDateTime, Utc};
use duckdb::{params, Connection, Row};
use std::sync::MutexGuard;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::db::connection::{get_connection, DbPool};
use crate::db::models::{ChatTurn, NewChatTurn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] duckdb::Error),
    #[error("Database lock poisoned")]
    LockPoisoned,
    #[error("Corrupt chat turn row: {0}")]
    CorruptRow(String),
}

/// Durable storage of chat turns, partitioned by session id.
pub trait ChatStore: Send + Sync {
    /// Assigns id and timestamp, then writes the turn.
    fn append(&self, turn: NewChatTurn) -> Result<ChatTurn, StorageError>;

    /// All turns of a session, oldest first. Empty when the session is unknown.
    fn list_by_session(&self, session_id: &str) -> Result<Vec<ChatTurn>, StorageError>;

    /// Deletes every turn of a session and returns how many went away.
    fn clear_session(&self, session_id: &str) -> Result<usize, StorageError>;
}

/// `ChatStore` backed by a single DuckDB connection behind a mutex.
#[derive(Clone)]
pub struct DuckDbStore {
    pool: DbPool,
}

type RawTurn = (i64, String, String, String, String);

impl DuckDbStore {
    pub fn open(config: &DatabaseConfig) -> Result<Self, StorageError> {
        let pool = get_connection(config)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Self::open(&DatabaseConfig {
            path: ":memory:".to_string(),
        })
    }

    /// Flushes the write-ahead log so the file is self-contained after shutdown.
    pub fn teardown(&self) -> Result<(), StorageError> {
        let conn = self.lock()?;
        conn.execute_batch("CHECKPOINT")?;
        info!("Chat store checkpointed");
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.pool.lock().map_err(|_| StorageError::LockPoisoned)
    }

    fn read_raw(row: &Row) -> duckdb::Result<RawTurn> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    }

    fn into_turn(raw: RawTurn) -> Result<ChatTurn, StorageError> {
        let (id, session_id, user_message, ai_response, created) = raw;
        Ok(ChatTurn {
            id,
            session_id,
            user_message,
            ai_response,
            created_at: parse_timestamp(&created)?,
        })
    }

    /// Latest timestamp in the session, so a clock step backwards cannot
    /// reorder history.
    fn last_created_at(
        conn: &Connection,
        session_id: &str,
    ) -> Result<Option<DateTime<Utc>>, StorageError> {
        let last: Option<String> = conn.query_row(
            "SELECT CAST(max(created_at) AS VARCHAR) FROM chat_turns WHERE session_id = ?",
            params![session_id],
            |row| row.get(0),
        )?;
        last.as_deref().map(parse_timestamp).transpose()
    }
}

impl ChatStore for DuckDbStore {
    fn append(&self, turn: NewChatTurn) -> Result<ChatTurn, StorageError> {
        let conn = self.lock()?;

        let mut created_at = now_micros();
        if let Some(last) = Self::last_created_at(&conn, &turn.session_id)? {
            created_at = created_at.max(last);
        }

        let id: i64 = conn.query_row("SELECT nextval('seq_chat_turns_id')", [], |row| row.get(0))?;

        conn.execute(
            "INSERT INTO chat_turns (id, session_id, user_message, ai_response, created_at)
             VALUES (?, ?, ?, ?, CAST(? AS TIMESTAMP))",
            params![
                id,
                turn.session_id,
                turn.user_message,
                turn.ai_response,
                format_timestamp(&created_at)
            ],
        )?;
        debug!("Appended chat turn {} to session {}", id, turn.session_id);

        Ok(ChatTurn {
            id,
            session_id: turn.session_id,
            user_message: turn.user_message,
            ai_response: turn.ai_response,
            created_at,
        })
    }

    fn list_by_session(&self, session_id: &str) -> Result<Vec<ChatTurn>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, session_id, user_message, ai_response, CAST(created_at AS VARCHAR)
             FROM chat_turns
             WHERE session_id = ?
             ORDER BY created_at ASC, id ASC",
        )?;

        let rows = stmt.query_map(params![session_id], Self::read_raw)?;

        let mut turns = Vec::new();
        for row in rows {
            turns.push(Self::into_turn(row?)?);
        }
        Ok(turns)
    }

    fn clear_session(&self, session_id: &str) -> Result<usize, StorageError> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM chat_turns WHERE session_id = ?", params![session_id])?;
        debug!("Cleared {} chat turns from session {}", deleted, session_id);
        Ok(deleted)
    }
}

/// DuckDB keeps microseconds; truncating up front keeps the returned turn
/// identical to what a later read produces.
fn now_micros() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now)
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.naive_utc().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StorageError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| StorageError::CorruptRow(format!("bad timestamp {:?}: {}", raw, e)))
}
