//! Top-level row-batch operations.
//!
//! Thin entrypoints over the statement builders, matching the four
//! operations a row-oriented storage client exposes: create a table from a
//! batch, insert a batch, select with filters, update rows. All of them
//! execute against the caller-supplied session and propagate the first
//! failure immediately.

use crate::batch::Batch;
use crate::client::GenericClient;
use crate::error::StoreResult;
use crate::filter::FilterSet;
use crate::stmt::{CreateTable, Insert, Select, Update, UniqueConstraint, UpdateMode};
use crate::value::Value;

/// Create a table whose columns are inferred from the batch's first row,
/// optionally with a named UNIQUE constraint, then insert all batch rows.
pub async fn create_table(
    conn: &impl GenericClient,
    table: &str,
    batch: &Batch,
    unique: Option<UniqueConstraint>,
) -> StoreResult<()> {
    let mut stmt = CreateTable::new(table, batch);
    if let Some(constraint) = unique {
        stmt = stmt.unique(constraint);
    }
    stmt.execute(conn).await
}

/// Insert every batch row, one statement per row. Returns the number of
/// inserted rows.
pub async fn insert(conn: &impl GenericClient, table: &str, batch: &Batch) -> StoreResult<u64> {
    Insert::new(table, batch).execute(conn).await
}

/// Select distinct rows for the named columns (empty slice = all columns),
/// constrained by the filter set. Returns the full decoded result set.
pub async fn select(
    conn: &impl GenericClient,
    columns: &[&str],
    table: &str,
    filters: &FilterSet,
) -> StoreResult<Vec<Vec<Value>>> {
    Select::new(columns, table, filters).fetch(conn).await
}

/// Update one statement per data row; the predicate comes from the
/// selection batch according to `mode`. Returns the number of affected
/// rows.
pub async fn update(
    conn: &impl GenericClient,
    table: &str,
    batch: &Batch,
    selection: &Batch,
    mode: UpdateMode,
) -> StoreResult<u64> {
    Update::new(table, batch, selection, mode).execute(conn).await
}
