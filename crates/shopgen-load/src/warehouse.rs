use std::path::{Path, PathBuf};
use std::time::Instant;

use duckdb::types::Value as SqlValue;
use duckdb::{appender_params_from_iter, Connection};
use serde::Serialize;
use tracing::{debug, info};

use shopgen_core::{Dataset, Record, TABLES, Value};

use crate::errors::LoadError;

/// Rows written to one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableLoad {
    pub table: &'static str,
    pub rows: u64,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub tables: Vec<TableLoad>,
}

impl LoadReport {
    pub fn rows(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|load| load.table == table)
            .map(|load| load.rows)
    }
}

/// Owned connection to the demo database file.
///
/// The connection is released by [`Warehouse::close`] or, on early return,
/// when the value is dropped.
pub struct Warehouse {
    conn: Connection,
    path: PathBuf,
}

impl Warehouse {
    /// Open (creating if absent) the database file and its parent directory.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| LoadError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "database opened");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn open_in_memory() -> Result<Self, LoadError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
            path: PathBuf::from(":memory:"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read access for summary queries.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Drop all four tables, children first.
    pub fn drop_tables(&self) -> Result<(), LoadError> {
        for table in TABLES.iter().rev() {
            self.conn.execute_batch(&table.drop_sql())?;
        }
        Ok(())
    }

    /// Create the record's table and append every row in one batch.
    ///
    /// The table must not exist yet; [`Warehouse::drop_tables`] runs first in
    /// [`Warehouse::load_dataset`].
    pub fn load_table<R: Record>(&mut self, rows: &[R]) -> Result<TableLoad, LoadError> {
        let start = Instant::now();
        let table = R::TABLE;
        self.conn.execute_batch(&table.create_sql())?;
        debug!(table = table.name, "table created");

        let tx = self.conn.transaction()?;
        {
            let mut appender = tx.appender(table.name)?;
            for row in rows {
                let values = row.values();
                if values.len() != table.columns.len() {
                    return Err(LoadError::RowShape {
                        table: table.name,
                        expected: table.columns.len(),
                        found: values.len(),
                    });
                }
                // DuckDB casts text cells to the column type, keeping decimals exact.
                let params = values
                    .iter()
                    .zip(table.columns)
                    .map(|(value, column)| match value {
                        Value::Int(value) => SqlValue::BigInt(*value),
                        other => other
                            .to_text(column)
                            .map_or(SqlValue::Null, SqlValue::Text),
                    });
                appender.append_row(appender_params_from_iter(params))?;
            }
            appender.flush()?;
        }
        tx.commit()?;

        let load = TableLoad {
            table: table.name,
            rows: rows.len() as u64,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            table = load.table,
            rows = load.rows,
            duration_ms = load.duration_ms,
            "table loaded"
        );
        Ok(load)
    }

    /// Replace all four tables with the dataset's rows.
    pub fn load_dataset(&mut self, dataset: &Dataset) -> Result<LoadReport, LoadError> {
        self.drop_tables()?;
        let tables = vec![
            self.load_table(&dataset.customers)?,
            self.load_table(&dataset.products)?,
            self.load_table(&dataset.orders)?,
            self.load_table(&dataset.events)?,
        ];
        Ok(LoadReport { tables })
    }

    pub fn close(self) -> Result<(), LoadError> {
        let path = self.path;
        self.conn.close().map_err(|(_, err)| LoadError::Database(err))?;
        info!(path = %path.display(), "database closed");
        Ok(())
    }
}
