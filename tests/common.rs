#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rattendance::db::pool::DbPool;
use rattendance::errors::AppResult;
use rusqlite::params;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn server() -> Command {
    cargo_bin_cmd!("rattendance")
}

pub fn noip() -> Command {
    cargo_bin_cmd!("noip-update")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write `content` to a fresh temp file and return its path
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write temp file");
    p
}

pub fn seed_members(pool: &DbPool, members: &[(i64, &str)]) {
    pool.with_conn(|conn| -> AppResult<()> {
        for (number, nickname) in members {
            conn.execute(
                "INSERT INTO members (number, nickname) VALUES (?1, ?2)",
                params![number, nickname],
            )?;
        }
        Ok(())
    })
    .expect("seed members");
}

/// Fresh file-backed database holding `members`
pub fn open_with_members(name: &str, members: &[(i64, &str)]) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::open(&db_path).expect("open db");
    seed_members(&pool, members);
    pool
}

/// The two members used throughout the scenarios
pub fn ada_and_bo(name: &str) -> DbPool {
    open_with_members(name, &[(1, "Ada"), (2, "Bo")])
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
