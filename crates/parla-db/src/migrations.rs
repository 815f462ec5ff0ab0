use rusqlite::Connection;
use tracing::info;

use crate::StoreError;

pub fn run(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |r| r.get(0),
    )?;

    if version < 1 {
        info!("Running migration v1 (message log)");
        // `timestamp` is left nullable; readers tolerate rows without one.
        conn.execute_batch(
            "
            CREATE TABLE mensajes (
                id          TEXT PRIMARY KEY,
                usuario     TEXT NOT NULL CHECK (length(usuario) > 0),
                mensaje     TEXT NOT NULL CHECK (length(mensaje) > 0),
                timestamp   TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            );

            CREATE INDEX idx_mensajes_timestamp
                ON mensajes(timestamp);

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
    }

    Ok(())
}
