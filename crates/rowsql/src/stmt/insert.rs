//! INSERT statement builder.

use crate::batch::Batch;
use crate::client::GenericClient;
use crate::error::StoreResult;
use crate::ident::validate_ident;
use crate::stmt::ParamList;

/// Builds one `INSERT INTO <table> (<headers>) VALUES (...)` statement per
/// batch row and executes them in order. Rows are not batched into a single
/// statement; the first failing row aborts the loop.
#[derive(Clone, Debug)]
pub struct Insert<'a> {
    table: String,
    batch: &'a Batch,
}

impl<'a> Insert<'a> {
    /// Create an INSERT builder for the given table and batch.
    pub fn new(table: &str, batch: &'a Batch) -> Self {
        Self {
            table: table.to_string(),
            batch,
        }
    }

    /// Validate identifiers before any statement text is built.
    pub fn validate(&self) -> StoreResult<()> {
        validate_ident(&self.table)?;
        for column in self.batch.header() {
            validate_ident(column)?;
        }
        Ok(())
    }

    /// The parameterized statement text, shared by every row of the batch.
    pub fn to_sql(&self) -> StoreResult<String> {
        self.validate()?;
        let placeholders: Vec<String> = (1..=self.batch.header().len())
            .map(|i| format!("${}", i))
            .collect();
        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.batch.header().join(", "),
            placeholders.join(", ")
        ))
    }

    /// Render the statement for one row in embedded-literal form.
    pub fn to_sql_literal(&self, index: usize) -> StoreResult<String> {
        self.validate()?;
        let row = self.batch.rows().get(index).ok_or_else(|| {
            crate::StoreError::shape(format!("row index {index} out of bounds"))
        })?;
        let literals: Vec<String> = row.iter().map(|v| v.render_literal()).collect();
        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.batch.header().join(", "),
            literals.join(", ")
        ))
    }

    /// Bind one row's values into a fresh parameter list.
    fn bind_row(&self, index: usize) -> ParamList {
        let mut params = ParamList::new();
        for value in &self.batch.rows()[index] {
            value.push_param(&mut params);
        }
        params
    }

    /// Execute one statement per row, returning the total affected count.
    pub async fn execute(&self, conn: &impl GenericClient) -> StoreResult<u64> {
        let sql = self.to_sql()?;
        tracing::debug!(target: "rowsql.sql", sql = %sql, rows = self.batch.len(), "insert");
        let mut affected = 0;
        for index in 0..self.batch.len() {
            let params = self.bind_row(index);
            affected += conn.execute(&sql, &params.as_refs()).await?;
        }
        Ok(affected)
    }
}
