//! Generic relational store over a single SQLite connection.
//!
//! Every operation recovers its own failures: the error is reported to the
//! injected [`Logger`] as one error-level line (short) and one debug-level
//! line (error text, SQL statement, parameters), then handed back to the
//! caller as a [`StoreError`]. Nothing panics and a failed query is never
//! confused with an empty result.
//!
//! The store holds one `rusqlite::Connection`, which is `Send` but not
//! `Sync`: a store can move between threads but cannot be shared by them
//! without external locking.

use crate::db::credentials::Credentials;
use crate::db::row::ResultRow;
use crate::logging::Logger;
use crate::utils::path::expand_tilde;
use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, params_from_iter};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("database [{0}] is not connected")]
    Disconnected(String),

    #[error("{operation} failed on [{database}]: {message}")]
    Query {
        operation: &'static str,
        database: String,
        message: String,
    },

    #[error("unexpected data in [{database}]: {message}")]
    InvalidData { database: String, message: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

pub struct RelationalStore {
    credentials: Credentials,
    conn: Option<Connection>,
    logger: Arc<dyn Logger>,
}

fn open(credentials: &Credentials) -> rusqlite::Result<Connection> {
    let path = expand_tilde(credentials.database());
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    conn.busy_timeout(credentials.timeout())?;

    // SQLite opens lazily; touch the schema so a bad file fails here.
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })?;

    Ok(conn)
}

/// Drop trailing whitespace and `;` so a clause can be appended.
fn trim_statement(query: &str) -> &str {
    query.trim_end().trim_end_matches(';').trim_end()
}

fn query_rows(
    conn: &Connection,
    sql: &str,
    params: &[Value],
    limit: Option<usize>,
) -> rusqlite::Result<Vec<ResultRow>> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let mut rows = stmt.query(params_from_iter(params.iter()))?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(ResultRow::from_row(&columns, row)?);
        if limit.is_some_and(|n| out.len() >= n) {
            break;
        }
    }
    Ok(out)
}

impl RelationalStore {
    /// Open the connection right away.
    ///
    /// A failure is logged and leaves the store disconnected; every later
    /// operation then fails with [`StoreError::Disconnected`].
    pub fn connect(credentials: Credentials, logger: Arc<dyn Logger>) -> Self {
        let conn = match open(&credentials) {
            Ok(conn) => {
                logger.info(&format!(
                    "Connected to database [{}].",
                    credentials.database()
                ));
                Some(conn)
            }
            Err(err) => {
                logger.error("Database connection fail!");
                logger.debug(&format!(
                    "Exception: [{}] connection error. {:?}. Target: {}.",
                    credentials.database(),
                    err,
                    credentials.target()
                ));
                None
            }
        };

        Self {
            credentials,
            conn,
            logger,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    pub fn database_name(&self) -> &str {
        self.credentials.database()
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    /// Log one failure (error + debug) and return it.
    fn report(
        &self,
        operation: &'static str,
        err: StoreError,
        detail: &dyn fmt::Debug,
        sql: &str,
        params: &dyn fmt::Debug,
    ) -> StoreError {
        let db = self.database_name();
        self.logger
            .error(&format!("Exception: [{db}] {operation} function error."));
        self.logger.debug(&format!(
            "Exception: [{db}] {operation} function error. {detail:?}. SQL Statement: {sql}. Params: {params:?}."
        ));
        err
    }

    /// Run `f` on the live connection, reporting any failure.
    fn run<T, P>(
        &self,
        operation: &'static str,
        sql: &str,
        params: &P,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> StoreResult<T>
    where
        P: fmt::Debug + ?Sized,
    {
        let Some(conn) = self.conn.as_ref() else {
            let err = StoreError::Disconnected(self.database_name().to_string());
            return Err(self.report(operation, err.clone(), &err, sql, &params));
        };

        f(conn).map_err(|e| {
            let err = StoreError::Query {
                operation,
                database: self.database_name().to_string(),
                message: e.to_string(),
            };
            self.report(operation, err, &e, sql, &params)
        })
    }

    /// First row of the result, `Ok(None)` when the query matched nothing.
    pub fn fetch_one(&self, query: &str, params: &[Value]) -> StoreResult<Option<ResultRow>> {
        self.run("fetch_one", query, params, |conn| {
            Ok(query_rows(conn, query, params, Some(1))?.into_iter().next())
        })
    }

    /// `row_count` rows starting at `offset`, via `LIMIT offset,row_count`.
    pub fn fetch_page(
        &self,
        query: &str,
        params: &[Value],
        offset: usize,
        row_count: usize,
    ) -> StoreResult<Vec<ResultRow>> {
        let sql = format!("{} LIMIT {},{}", trim_statement(query), offset, row_count);
        self.run("fetch_page", &sql, params, |conn| {
            query_rows(conn, &sql, params, None)
        })
    }

    pub fn fetch_all(&self, query: &str, params: &[Value]) -> StoreResult<Vec<ResultRow>> {
        self.run("fetch_all", query, params, |conn| {
            query_rows(conn, query, params, None)
        })
    }

    /// Execute one parameterized insert under autocommit; returns affected rows.
    pub fn insert_one(&self, query: &str, params: &[Value]) -> StoreResult<usize> {
        self.run("insert_one", query, params, |conn| {
            conn.execute(query, params_from_iter(params.iter()))
        })
    }

    /// Execute `query` once per parameter set inside a single transaction.
    /// Either every set is written or none is.
    pub fn insert_many(&self, query: &str, param_sets: &[Vec<Value>]) -> StoreResult<usize> {
        self.run("insert_many", query, param_sets, |conn| {
            let tx = conn.unchecked_transaction()?;
            let mut total = 0;
            {
                let mut stmt = tx.prepare(query)?;
                for params in param_sets {
                    total += stmt.execute(params_from_iter(params.iter()))?;
                }
            }
            tx.commit()?;
            Ok(total)
        })
    }

    /// Execute one parameterized update under autocommit; returns affected rows.
    pub fn update(&self, query: &str, params: &[Value]) -> StoreResult<usize> {
        self.run("update", query, params, |conn| {
            conn.execute(query, params_from_iter(params.iter()))
        })
    }

    /// Execute and commit explicitly. `true` only once the commit succeeded.
    pub fn delete_rows(&self, query: &str, params: &[Value]) -> bool {
        self.run("delete_rows", query, params, |conn| {
            let tx = conn.unchecked_transaction()?;
            tx.execute(query, params_from_iter(params.iter()))?;
            tx.commit()
        })
        .is_ok()
    }

    /// Close the connection if it is open. Safe to call repeatedly.
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take()
            && let Err((_, err)) = conn.close()
        {
            let db = self.database_name();
            self.logger.error("Database close fail!");
            self.logger
                .debug(&format!("Exception: [{db}] close error. {err:?}."));
        }
    }
}

impl Drop for RelationalStore {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for RelationalStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationalStore")
            .field("credentials", &self.credentials)
            .field("connected", &self.is_connected())
            .finish()
    }
}
