use rusqlite::Connection;
use tracing::debug;

use crate::StoreError;

pub fn run(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY,
            name            TEXT NOT NULL,
            email           TEXT NOT NULL UNIQUE,
            password_hash   TEXT NOT NULL,
            phone           TEXT
        );

        CREATE TABLE IF NOT EXISTS messages (
            id          INTEGER PRIMARY KEY,
            user_name   TEXT NOT NULL,
            body        TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_messages_created
            ON messages(created_at, id);

        CREATE TABLE IF NOT EXISTS profiles (
            id          INTEGER PRIMARY KEY,
            email       TEXT NOT NULL UNIQUE REFERENCES users(email),
            bio         TEXT,
            join_date   TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;

    debug!("Database migrations complete");
    Ok(())
}
