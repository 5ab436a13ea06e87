//! SQLite storage handle shared by the web handlers.

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Explicitly constructed handle around the single SQLite connection.
///
/// Cloning is cheap; all clones share the connection. Open with
/// [`DbPool::open`], release with [`DbPool::close`].
#[derive(Clone)]
pub struct DbPool {
    conn: Arc<Mutex<Connection>>,
}

impl DbPool {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(Path::new(path))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        init_db(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        let mut guard = self
            .conn
            .lock()
            .map_err(|_| AppError::Other("database connection lock poisoned".into()))?;
        func(&mut *guard)
    }

    /// Same as [`DbPool::with_conn`], run on the blocking thread pool.
    pub async fn run<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.clone();
        tokio::task::spawn_blocking(move || pool.with_conn(func))
            .await
            .map_err(|e| AppError::Other(format!("database task failed: {}", e)))?
    }

    /// Close the connection. Other clones still alive keep it open until dropped.
    pub fn close(self) -> AppResult<()> {
        match Arc::try_unwrap(self.conn) {
            Ok(mutex) => {
                let conn = mutex
                    .into_inner()
                    .map_err(|_| AppError::Other("database connection lock poisoned".into()))?;
                conn.close().map_err(|(_, e)| AppError::Db(e))
            }
            Err(_) => Ok(()),
        }
    }
}
