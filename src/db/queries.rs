use crate::errors::AppResult;
use crate::models::{MarkKind, Member, MemberCount};
use chrono::NaiveDate;
use rusqlite::{Connection, Row, params};
use std::collections::BTreeSet;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn date_to_db(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// All members ordered by number.
pub fn load_members(conn: &Connection) -> AppResult<Vec<Member>> {
    let mut stmt = conn.prepare("SELECT number, nickname FROM members ORDER BY number ASC")?;
    let rows = stmt.query_map([], map_member)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_member(row: &Row) -> rusqlite::Result<Member> {
    Ok(Member {
        number: row.get("number")?,
        nickname: row.get("nickname")?,
    })
}

/// Member numbers holding a `kind` record on `date`.
pub fn load_marked_numbers(
    conn: &Connection,
    kind: MarkKind,
    date: &NaiveDate,
) -> AppResult<BTreeSet<i64>> {
    let sql = format!(
        "SELECT member_number FROM {table} WHERE {col} = ?1",
        table = kind.table(),
        col = kind.date_column(),
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([date_to_db(date)], |row| row.get::<_, i64>(0))?;

    let mut out = BTreeSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

/// Record a `kind` mark for `number` on `date`.
///
/// Returns `true` when a row was inserted. Nothing happens when the member
/// does not exist or is already recorded for that date; both checks are part
/// of the single statement.
pub fn insert_mark(
    conn: &Connection,
    kind: MarkKind,
    date: &NaiveDate,
    number: i64,
) -> AppResult<bool> {
    let sql = format!(
        "INSERT OR IGNORE INTO {table} ({col}, member_number)
         SELECT ?1, number FROM members WHERE number = ?2",
        table = kind.table(),
        col = kind.date_column(),
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let changed = stmt.execute(params![date_to_db(date), number])?;
    Ok(changed > 0)
}

/// Lifetime `kind` totals for every member, zero included, ordered by number.
pub fn count_marks_per_member(conn: &Connection, kind: MarkKind) -> AppResult<Vec<MemberCount>> {
    let sql = format!(
        "SELECT m.number, m.nickname, COUNT(r.member_number) AS total
         FROM members m
         LEFT JOIN {table} r ON r.member_number = m.number
         GROUP BY m.number, m.nickname
         ORDER BY m.number ASC",
        table = kind.table(),
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(MemberCount {
            number: row.get(0)?,
            nickname: row.get(1)?,
            count: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Number of `kind` records, optionally restricted to one date.
pub fn count_marks(conn: &Connection, kind: MarkKind, date: Option<&NaiveDate>) -> AppResult<i64> {
    let count = match date {
        Some(d) => conn.query_row(
            &format!(
                "SELECT COUNT(*) FROM {} WHERE {} = ?1",
                kind.table(),
                kind.date_column()
            ),
            [date_to_db(d)],
            |row| row.get(0),
        )?,
        None => conn.query_row(&format!("SELECT COUNT(*) FROM {}", kind.table()), [], |row| {
            row.get(0)
        })?,
    };
    Ok(count)
}
