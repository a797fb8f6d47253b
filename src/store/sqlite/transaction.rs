//! RAII transactions and the edge writes that only happen inside one.

use rusqlite::{Connection, Params, params};

use crate::domain::EdgeKind;
use crate::store::StoreResult;

/// A database transaction with RAII-based automatic rollback.
///
/// Dropping it without calling [`Transaction::commit`] rolls back every
/// write made through it.
pub struct Transaction<'a> {
    conn: &'a Connection,
    finished: bool,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            finished: false,
        }
    }

    pub(crate) fn conn(&self) -> &Connection {
        self.conn
    }

    /// Executes a SQL statement within the transaction.
    pub fn execute(&self, sql: &str, params: impl Params) -> StoreResult<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Deletes every outgoing edge of `kind` owned by `owner_id`.
    pub fn clear_edges(&self, kind: EdgeKind, owner_id: i64) -> StoreResult<usize> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?1",
            kind.table(),
            kind.owner_column()
        );
        self.execute(&sql, params![owner_id])
    }

    /// Inserts one edge. Returns false when the edge was already present.
    pub fn insert_edge(&self, kind: EdgeKind, owner_id: i64, category_id: i64) -> StoreResult<bool> {
        let sql = format!(
            "INSERT OR IGNORE INTO {} ({}, category_id) VALUES (?1, ?2)",
            kind.table(),
            kind.owner_column()
        );
        Ok(self.execute(&sql, params![owner_id, category_id])? > 0)
    }

    /// Commits the transaction.
    pub fn commit(mut self) -> StoreResult<()> {
        self.conn.execute_batch("COMMIT")?;
        self.finished = true;
        Ok(())
    }

    /// Rolls back the transaction explicitly.
    pub fn rollback(mut self) -> StoreResult<()> {
        self.conn.execute_batch("ROLLBACK")?;
        self.finished = true;
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.conn.execute_batch("ROLLBACK");
        }
    }
}
