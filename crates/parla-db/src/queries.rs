use crate::models::{AppendedMessage, MessageRow};
use crate::{Database, StoreError};
use rusqlite::Connection;
use uuid::Uuid;

impl Database {
    // -- Messages --

    pub fn insert_message(&self, usuario: &str, mensaje: &str) -> Result<AppendedMessage, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            let timestamp: String = conn.query_row(
                "INSERT INTO mensajes (id, usuario, mensaje) VALUES (?1, ?2, ?3) RETURNING timestamp",
                rusqlite::params![id, usuario, mensaje],
                |row| row.get(0),
            )?;
            Ok(AppendedMessage { id, timestamp })
        })
    }

    pub fn get_messages(&self) -> Result<Vec<MessageRow>, StoreError> {
        self.with_conn(query_messages)
    }
}

fn query_messages(conn: &Connection) -> Result<Vec<MessageRow>, StoreError> {
    // rowid breaks ties between writes landing in the same millisecond
    let mut stmt = conn.prepare(
        "SELECT id, usuario, mensaje, timestamp
         FROM mensajes
         ORDER BY timestamp ASC, rowid ASC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                usuario: row.get(1)?,
                mensaje: row.get(2)?,
                timestamp: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_raw(db: &Database, id: &str, usuario: &str, timestamp: Option<&str>) {
        db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO mensajes (id, usuario, mensaje, timestamp) VALUES (?1, ?2, 'x', ?3)",
                rusqlite::params![id, usuario, timestamp],
            )?;
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn empty_log_lists_nothing() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_messages().unwrap().is_empty());
    }

    #[test]
    fn append_assigns_id_and_timestamp() {
        let db = Database::open_in_memory().unwrap();
        let appended = db.insert_message("alice", "hi").unwrap();
        assert!(appended.id.parse::<Uuid>().is_ok());
        assert!(appended.timestamp.ends_with('Z'));

        let rows = db.get_messages().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, appended.id);
        assert_eq!(rows[0].usuario, "alice");
        assert_eq!(rows[0].mensaje, "hi");
        assert_eq!(rows[0].timestamp.as_deref(), Some(appended.timestamp.as_str()));
    }

    #[test]
    fn appends_come_back_in_insertion_order() {
        let db = Database::open_in_memory().unwrap();
        for text in ["one", "two", "three", "four"] {
            db.insert_message("alice", text).unwrap();
        }

        let rows = db.get_messages().unwrap();
        let texts: Vec<_> = rows.iter().map(|r| r.mensaje.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three", "four"]);

        let stamps: Vec<_> = rows.iter().map(|r| r.timestamp.clone().unwrap()).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn list_orders_by_timestamp_not_insertion() {
        let db = Database::open_in_memory().unwrap();
        insert_raw(&db, "m3", "carol", Some("2024-01-01T00:00:03.000Z"));
        insert_raw(&db, "m1", "alice", Some("2024-01-01T00:00:01.000Z"));
        insert_raw(&db, "m2", "bob", Some("2024-01-01T00:00:02.000Z"));

        let ids: Vec<_> = db.get_messages().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["m1", "m2", "m3"]);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let db = Database::open_in_memory().unwrap();
        insert_raw(&db, "b", "bob", Some("2024-01-01T00:00:01.000Z"));
        insert_raw(&db, "a", "alice", Some("2024-01-01T00:00:01.000Z"));

        let ids: Vec<_> = db.get_messages().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn rows_without_timestamp_still_list() {
        let db = Database::open_in_memory().unwrap();
        insert_raw(&db, "orphan", "alice", None);

        let rows = db.get_messages().unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].timestamp.is_none());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let db = Database::open_in_memory().unwrap();
        assert!(matches!(db.insert_message("", "hi"), Err(StoreError::WriteRejected(_))));
        assert!(matches!(db.insert_message("alice", ""), Err(StoreError::WriteRejected(_))));
        assert!(db.get_messages().unwrap().is_empty());
    }

    #[test]
    fn missing_table_is_unavailable() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            conn.execute_batch("DROP TABLE mensajes")?;
            Ok(())
        })
        .unwrap();

        assert!(matches!(db.get_messages(), Err(StoreError::Unavailable(_))));
        assert!(matches!(db.insert_message("alice", "hi"), Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn reopening_keeps_the_log() {
        let dir = std::env::temp_dir().join(format!("parla-db-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("parla.db");

        {
            let db = Database::open(&path).unwrap();
            db.insert_message("alice", "persisted").unwrap();
        }

        let db = Database::open(&path).unwrap();
        let rows = db.get_messages().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].mensaje, "persisted");

        drop(db);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
