use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 = conn
        .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))?;

    if version < 1 {
        info!("Running migration v1 (chat_messages)");
        // `seq` breaks ties between messages that share a timestamp.
        conn.execute_batch(
            "
            CREATE TABLE chat_messages (
                seq         INTEGER PRIMARY KEY AUTOINCREMENT,
                id          TEXT NOT NULL UNIQUE,
                username    TEXT NOT NULL CHECK (length(trim(username)) > 0),
                message     TEXT NOT NULL CHECK (length(trim(message)) > 0),
                timestamp   TEXT NOT NULL,
                is_own      INTEGER NOT NULL DEFAULT 0,
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );

            CREATE INDEX idx_chat_messages_timestamp
                ON chat_messages(timestamp DESC, seq DESC);

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}
