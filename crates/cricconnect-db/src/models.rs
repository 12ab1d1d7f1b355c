//! Database row types. These map directly to SQLite rows and are converted
//! into `cricconnect_types` models at the store boundary.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

use cricconnect_types::models::ChatMessage;

/// Fixed-width UTC format, so lexical order on the TEXT column is
/// chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .with_context(|| format!("Corrupt timestamp '{}'", raw))?;
    Ok(naive.and_utc())
}

pub struct MessageRow {
    pub id: String,
    pub username: String,
    pub message: String,
    pub timestamp: String,
    pub is_own: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl MessageRow {
    pub const COLUMNS: &'static str =
        "id, username, message, timestamp, is_own, created_at, updated_at";

    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            username: row.get(1)?,
            message: row.get(2)?,
            timestamp: row.get(3)?,
            is_own: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    pub fn into_message(self) -> Result<ChatMessage> {
        let id: Uuid = self
            .id
            .parse()
            .with_context(|| format!("Corrupt message id '{}'", self.id))?;

        Ok(ChatMessage {
            id,
            username: self.username,
            message: self.message,
            timestamp: parse_timestamp(&self.timestamp)?,
            is_own: self.is_own,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}
