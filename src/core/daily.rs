use crate::db::queries::{load_marked_numbers, load_members};
use crate::errors::AppResult;
use crate::models::{MarkKind, Member, MemberMarkView};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::collections::BTreeSet;

/// Members plus the marks already stored for one day.
#[derive(Debug, Clone)]
pub struct DailyView {
    pub date: NaiveDate,
    pub members: Vec<Member>,
    pub late: BTreeSet<i64>,
    pub absent: BTreeSet<i64>,
}

impl DailyView {
    pub fn load(conn: &Connection, date: NaiveDate) -> AppResult<Self> {
        Ok(Self {
            date,
            members: load_members(conn)?,
            late: load_marked_numbers(conn, MarkKind::Late, &date)?,
            absent: load_marked_numbers(conn, MarkKind::Absent, &date)?,
        })
    }

    /// One row per member, in member-number order.
    pub fn rows(&self) -> Vec<MemberMarkView> {
        self.members
            .iter()
            .map(|m| MemberMarkView {
                number: m.number,
                nickname: m.nickname.clone(),
                late: self.late.contains(&m.number),
                absent: self.absent.contains(&m.number),
            })
            .collect()
    }
}
