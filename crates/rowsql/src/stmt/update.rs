//! UPDATE statement builder.

use crate::batch::Batch;
use crate::client::GenericClient;
use crate::error::{StoreError, StoreResult};
use crate::ident::validate_ident;
use crate::stmt::ParamList;
use crate::value::Value;

/// How the `WHERE` predicate relates to the data rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMode {
    /// Every data row shares the single predicate derived from the first
    /// selection row.
    FirstSelectionRow,
    /// The i-th data row uses the predicate from the i-th selection row;
    /// requires equal row counts.
    RowByRow,
}

/// Builds one `UPDATE <table> SET ... WHERE <equality conjunction>` per data
/// row. The predicate columns come from the selection batch's header, the
/// predicate values from its rows according to [`UpdateMode`].
#[derive(Clone, Debug)]
pub struct Update<'a> {
    table: String,
    batch: &'a Batch,
    selection: &'a Batch,
    mode: UpdateMode,
}

impl<'a> Update<'a> {
    /// Create an UPDATE builder. The mode is mandatory; there is no default
    /// predicate scope.
    pub fn new(table: &str, batch: &'a Batch, selection: &'a Batch, mode: UpdateMode) -> Self {
        Self {
            table: table.to_string(),
            batch,
            selection,
            mode,
        }
    }

    /// Validate identifiers and the mode's row-count requirements.
    pub fn validate(&self) -> StoreResult<()> {
        validate_ident(&self.table)?;
        for column in self.batch.header() {
            validate_ident(column)?;
        }
        for column in self.selection.header() {
            validate_ident(column)?;
        }
        match self.mode {
            UpdateMode::FirstSelectionRow => {
                if self.selection.is_empty() {
                    return Err(StoreError::shape(
                        "selection batch must have at least one row",
                    ));
                }
            }
            UpdateMode::RowByRow => {
                if self.selection.len() != self.batch.len() {
                    return Err(StoreError::shape(format!(
                        "row-by-row update needs one selection row per data row \
                         (data: {}, selection: {})",
                        self.batch.len(),
                        self.selection.len()
                    )));
                }
            }
        }
        Ok(())
    }

    fn selection_row(&self, index: usize) -> &[Value] {
        match self.mode {
            UpdateMode::FirstSelectionRow => &self.selection.rows()[0],
            UpdateMode::RowByRow => &self.selection.rows()[index],
        }
    }

    /// The parameterized statement text, shared by every row of the batch.
    pub fn to_sql(&self) -> StoreResult<String> {
        self.validate()?;
        let set_parts: Vec<String> = self
            .batch
            .header()
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 1))
            .collect();
        let offset = set_parts.len();
        let where_parts: Vec<String> = self
            .selection
            .header()
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, offset + i + 1))
            .collect();
        Ok(format!(
            "UPDATE {} SET {} WHERE {}",
            self.table,
            set_parts.join(", "),
            where_parts.join(" AND ")
        ))
    }

    /// Bind one data row's SET values followed by its predicate values.
    fn bind_row(&self, index: usize) -> ParamList {
        let mut params = ParamList::new();
        for value in &self.batch.rows()[index] {
            value.push_param(&mut params);
        }
        for value in self.selection_row(index) {
            value.push_param(&mut params);
        }
        params
    }

    /// Render the statement for one data row in embedded-literal form.
    pub fn to_sql_literal(&self, index: usize) -> StoreResult<String> {
        self.validate()?;
        let row = self.batch.rows().get(index).ok_or_else(|| {
            StoreError::shape(format!("row index {index} out of bounds"))
        })?;
        let set_parts: Vec<String> = self
            .batch
            .header()
            .iter()
            .zip(row)
            .map(|(column, value)| format!("{} = {}", column, value.render_literal()))
            .collect();
        let where_parts: Vec<String> = self
            .selection
            .header()
            .iter()
            .zip(self.selection_row(index))
            .map(|(column, value)| format!("{} = {}", column, value.render_literal()))
            .collect();
        Ok(format!(
            "UPDATE {} SET {} WHERE {}",
            self.table,
            set_parts.join(", "),
            where_parts.join(" AND ")
        ))
    }

    /// Execute one statement per data row, returning the total affected count.
    pub async fn execute(&self, conn: &impl GenericClient) -> StoreResult<u64> {
        let sql = self.to_sql()?;
        tracing::debug!(target: "rowsql.sql", sql = %sql, rows = self.batch.len(), "update");
        let mut affected = 0;
        for index in 0..self.batch.len() {
            let params = self.bind_row(index);
            affected += conn.execute(&sql, &params.as_refs()).await?;
        }
        Ok(affected)
    }
}
