use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the tables the application needs when they are missing.
///
/// `members` is normally populated by hand; the record tables key on
/// `(date, member_number)` so a member is recorded at most once per day.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            number    INTEGER PRIMARY KEY,
            nickname  TEXT NOT NULL CHECK(length(nickname) <= 16)
        );

        CREATE TABLE IF NOT EXISTS delays (
            delay_date     TEXT NOT NULL,
            member_number  INTEGER NOT NULL REFERENCES members(number),
            PRIMARY KEY (delay_date, member_number)
        );

        CREATE TABLE IF NOT EXISTS absences (
            absence_date   TEXT NOT NULL,
            member_number  INTEGER NOT NULL REFERENCES members(number),
            PRIMARY KEY (absence_date, member_number)
        );

        CREATE INDEX IF NOT EXISTS idx_delays_member ON delays(member_number);
        CREATE INDEX IF NOT EXISTS idx_absences_member ON absences(member_number);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
