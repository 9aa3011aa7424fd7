//! CREATE TABLE statement builder.

use crate::batch::Batch;
use crate::client::GenericClient;
use crate::error::{StoreError, StoreResult};
use crate::ident::validate_ident;
use crate::stmt::insert::Insert;

/// A named UNIQUE constraint over a set of columns.
#[derive(Clone, Debug)]
pub struct UniqueConstraint {
    name: String,
    columns: Vec<String>,
}

impl UniqueConstraint {
    /// Create a named constraint over the given columns.
    pub fn new(name: &str, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Builds `CREATE TABLE <table> (<col> <TYPE>, ...)` with column types
/// inferred from the batch's first row, then inserts every batch row into
/// the new table within the same call.
#[derive(Clone, Debug)]
pub struct CreateTable<'a> {
    table: String,
    batch: &'a Batch,
    unique: Option<UniqueConstraint>,
}

impl<'a> CreateTable<'a> {
    /// Create a CREATE TABLE builder for the given table and batch.
    pub fn new(table: &str, batch: &'a Batch) -> Self {
        Self {
            table: table.to_string(),
            batch,
            unique: None,
        }
    }

    /// Append a named UNIQUE constraint to the table definition.
    pub fn unique(mut self, constraint: UniqueConstraint) -> Self {
        self.unique = Some(constraint);
        self
    }

    /// Build the DDL text. Types come from the first row only.
    pub fn build_ddl(&self) -> StoreResult<String> {
        validate_ident(&self.table)?;
        let types = self.batch.column_types()?;
        let mut parts: Vec<String> = Vec::with_capacity(self.batch.header().len() + 1);
        for (column, ty) in self.batch.header().iter().zip(types) {
            validate_ident(column)?;
            parts.push(format!("{} {}", column, ty.ddl_type()));
        }
        if let Some(unique) = &self.unique {
            validate_ident(&unique.name)?;
            for column in &unique.columns {
                validate_ident(column)?;
                if !self.batch.header().contains(column) {
                    return Err(StoreError::shape(format!(
                        "unique constraint column '{}' is not in the header",
                        column
                    )));
                }
            }
            parts.push(format!(
                "CONSTRAINT {} UNIQUE ({})",
                unique.name,
                unique.columns.join(", ")
            ));
        }
        Ok(format!("CREATE TABLE {} ({})", self.table, parts.join(", ")))
    }

    /// Execute the DDL, then insert all batch rows into the new table.
    pub async fn execute(&self, conn: &impl GenericClient) -> StoreResult<()> {
        let ddl = self.build_ddl()?;
        tracing::debug!(target: "rowsql.sql", sql = %ddl, "create table");
        conn.execute(&ddl, &[]).await?;
        Insert::new(&self.table, self.batch).execute(conn).await?;
        Ok(())
    }
}
