use anyhow::Result;
use chrono::{DateTime, SubsecRound, Utc};
use rusqlite::Connection;
use uuid::Uuid;

use cricconnect_types::api::ChatStats;
use cricconnect_types::models::ChatMessage;

use crate::Database;
use crate::models::{MessageRow, format_timestamp, parse_timestamp};

impl Database {
    // -- Writes --

    /// Insert a message stamped with the current instant.
    /// Inputs are expected to be validated and trimmed already.
    pub fn insert_message(
        &self,
        username: &str,
        message: &str,
        is_own: bool,
    ) -> Result<ChatMessage> {
        self.insert_message_at(username, message, is_own, Utc::now())
    }

    /// Insert a message stamped with `now`, never earlier than the newest
    /// stored timestamp.
    pub fn insert_message_at(
        &self,
        username: &str,
        message: &str,
        is_own: bool,
        now: DateTime<Utc>,
    ) -> Result<ChatMessage> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let newest: Option<String> =
                tx.query_row("SELECT MAX(timestamp) FROM chat_messages", [], |row| row.get(0))?;
            let mut timestamp = now.trunc_subsecs(3);
            if let Some(newest) = newest {
                timestamp = timestamp.max(parse_timestamp(&newest)?);
            }

            let id = Uuid::new_v4();
            let stamp = format_timestamp(timestamp);
            tx.execute(
                "INSERT INTO chat_messages
                    (id, username, message, timestamp, is_own, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?4, ?4)",
                rusqlite::params![id.to_string(), username, message, stamp, is_own],
            )?;
            tx.commit()?;

            Ok(ChatMessage {
                id,
                username: username.to_string(),
                message: message.to_string(),
                timestamp,
                is_own,
                created_at: timestamp,
                updated_at: timestamp,
            })
        })
    }

    /// Returns false when no message has this id.
    pub fn delete_message(&self, id: &Uuid) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let removed =
                conn.execute("DELETE FROM chat_messages WHERE id = ?1", [id.to_string()])?;
            Ok(removed > 0)
        })
    }

    // -- Reads --

    pub fn count_messages(&self) -> Result<u64> {
        self.with_conn(count_all)
    }

    pub fn count_messages_since(&self, since: DateTime<Utc>) -> Result<u64> {
        self.with_conn(|conn| count_since(conn, since))
    }

    /// Every author that has a stored message, sorted ascending.
    pub fn distinct_usernames(&self) -> Result<Vec<String>> {
        self.with_conn(query_usernames)
    }

    /// Totals, messages at or after `since`, and authors, read under one
    /// lock so the three figures describe the same state.
    pub fn message_stats(&self, since: DateTime<Utc>) -> Result<ChatStats> {
        self.with_conn(|conn| {
            let total_messages = count_all(conn)?;
            let today_messages = count_since(conn, since)?;
            let users = query_usernames(conn)?;
            Ok(ChatStats {
                total_messages,
                today_messages,
                unique_users: users.len(),
                users,
            })
        })
    }

    /// One page of messages, newest first, plus the total message count.
    /// `limit` and `page` are 1-indexed and must be non-zero.
    pub fn list_page(&self, limit: u32, page: u32) -> Result<(Vec<ChatMessage>, u64)> {
        self.with_conn(|conn| {
            let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);
            let rows = query_page(conn, limit, offset)?;
            let total = count_all(conn)?;
            let messages = rows
                .into_iter()
                .map(MessageRow::into_message)
                .collect::<Result<Vec<_>>>()?;
            Ok((messages, total))
        })
    }
}

fn count_all(conn: &Connection) -> Result<u64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM chat_messages", [], |row| row.get(0))?;
    Ok(count as u64)
}

fn count_since(conn: &Connection, since: DateTime<Utc>) -> Result<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM chat_messages WHERE timestamp >= ?1",
        [format_timestamp(since)],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

fn query_usernames(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT username FROM chat_messages ORDER BY username")?;
    let users = stmt
        .query_map([], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, _>>()?;
    Ok(users)
}

fn query_page(conn: &Connection, limit: u32, offset: i64) -> Result<Vec<MessageRow>> {
    let sql = format!(
        "SELECT {} FROM chat_messages
         ORDER BY timestamp DESC, seq DESC
         LIMIT ?1 OFFSET ?2",
        MessageRow::COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt
        .query_map(rusqlite::params![limit, offset], MessageRow::from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::collections::HashSet;

    fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn insert_assigns_id_and_timestamp() {
        let db = db();
        let before = Utc::now().trunc_subsecs(3);

        let msg = db.insert_message("Bob", "hi", false).unwrap();

        assert_eq!(msg.username, "Bob");
        assert_eq!(msg.message, "hi");
        assert!(!msg.is_own);
        assert!(!msg.id.is_nil());
        assert!(msg.timestamp >= before);
        assert_eq!(msg.created_at, msg.timestamp);

        let (page, total) = db.list_page(10, 1).unwrap();
        assert_eq!(total, 1);
        assert_eq!(page[0], msg);
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let db = db();
        let now = Utc::now();

        let first = db.insert_message_at("a", "one", false, now).unwrap();
        let second = db
            .insert_message_at("a", "two", false, now - Duration::minutes(5))
            .unwrap();

        assert_eq!(second.timestamp, first.timestamp);

        // Tie broken by insertion order
        let (page, _) = db.list_page(10, 1).unwrap();
        assert_eq!(page[0].message, "two");
        assert_eq!(page[1].message, "one");
    }

    #[test]
    fn pages_partition_the_collection() {
        let db = db();
        let start = Utc::now();
        for i in 0..5 {
            db.insert_message_at("fan", &format!("m{i}"), false, start + Duration::seconds(i))
                .unwrap();
        }

        let (p1, total) = db.list_page(2, 1).unwrap();
        let (p2, _) = db.list_page(2, 2).unwrap();
        let (p3, _) = db.list_page(2, 3).unwrap();
        let (p4, _) = db.list_page(2, 4).unwrap();

        assert_eq!(total, 5);
        assert_eq!((p1.len(), p2.len(), p3.len(), p4.len()), (2, 2, 1, 0));

        // Newest first across pages
        assert_eq!(p1[0].message, "m4");
        assert_eq!(p3[0].message, "m0");

        let ids: HashSet<Uuid> = p1.iter().chain(&p2).chain(&p3).map(|m| m.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn delete_twice_reports_missing() {
        let db = db();
        let msg = db.insert_message("Bob", "hi", false).unwrap();

        assert!(db.delete_message(&msg.id).unwrap());
        assert!(!db.delete_message(&msg.id).unwrap());
        assert_eq!(db.count_messages().unwrap(), 0);
    }

    #[test]
    fn count_tracks_inserts_minus_deletes() {
        let db = db();
        let a = db.insert_message("a", "1", false).unwrap();
        db.insert_message("b", "2", false).unwrap();
        db.insert_message("c", "3", true).unwrap();
        assert_eq!(db.count_messages().unwrap(), 3);

        db.delete_message(&a.id).unwrap();
        assert_eq!(db.count_messages().unwrap(), 2);
    }

    #[test]
    fn count_since_excludes_older_messages() {
        let db = db();
        let now = Utc::now();
        db.insert_message_at("old", "yesterday", false, now - Duration::days(1)).unwrap();
        db.insert_message_at("new", "today", false, now).unwrap();

        assert_eq!(db.count_messages_since(now - Duration::hours(1)).unwrap(), 1);
        assert_eq!(db.count_messages_since(now - Duration::days(2)).unwrap(), 2);
    }

    #[test]
    fn distinct_usernames_are_sorted_and_unique() {
        let db = db();
        db.insert_message("zed", "1", false).unwrap();
        db.insert_message("amy", "2", false).unwrap();
        db.insert_message("zed", "3", false).unwrap();

        assert_eq!(db.distinct_usernames().unwrap(), vec!["amy", "zed"]);
    }

    #[test]
    fn message_stats_agree_with_individual_reads() {
        let db = db();
        let now = Utc::now();
        db.insert_message_at("old", "yesterday", false, now - Duration::days(1)).unwrap();
        db.insert_message_at("new", "today", true, now).unwrap();
        db.insert_message_at("new", "again", false, now).unwrap();

        let since = now - Duration::hours(1);
        let stats = db.message_stats(since).unwrap();

        assert_eq!(stats.total_messages, db.count_messages().unwrap());
        assert_eq!(stats.today_messages, db.count_messages_since(since).unwrap());
        assert_eq!(stats.users, db.distinct_usernames().unwrap());
        assert_eq!(stats.unique_users, 2);
        assert!(stats.today_messages <= stats.total_messages);
    }

    #[test]
    fn file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.db");

        let id = {
            let db = Database::open(&path).unwrap();
            db.insert_message("Bob", "persisted", false).unwrap().id
        };

        let db = Database::open(&path).unwrap();
        let (page, total) = db.list_page(100, 1).unwrap();
        assert_eq!(total, 1);
        assert_eq!(page[0].id, id);
    }
}
