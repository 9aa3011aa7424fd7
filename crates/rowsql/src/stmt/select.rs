//! SELECT statement builder.

use crate::client::GenericClient;
use crate::error::StoreResult;
use crate::filter::FilterSet;
use crate::ident::validate_ident;
use crate::row::decode_row;
use crate::stmt::ParamList;
use crate::value::Value;

/// Builds `SELECT DISTINCT <columns> FROM <table> [WHERE <conjunction>]`.
///
/// The full result set is fetched and decoded; no `ORDER BY` or pagination
/// is emitted, so row order is whatever the engine returns.
#[derive(Clone, Debug)]
pub struct Select<'a> {
    table: String,
    columns: Vec<String>,
    filters: &'a FilterSet,
}

impl<'a> Select<'a> {
    /// Create a SELECT builder over the named columns.
    pub fn new(columns: &[&str], table: &str, filters: &'a FilterSet) -> Self {
        Self {
            table: table.to_string(),
            columns: columns.iter().map(|s| s.to_string()).collect(),
            filters,
        }
    }

    /// Create a SELECT builder over all columns (`SELECT DISTINCT *`).
    pub fn all(table: &str, filters: &'a FilterSet) -> Self {
        Self {
            table: table.to_string(),
            columns: Vec::new(),
            filters,
        }
    }

    fn column_list(&self) -> StoreResult<String> {
        if self.columns.is_empty() {
            return Ok("*".to_string());
        }
        for column in &self.columns {
            validate_ident(column)?;
        }
        Ok(self.columns.join(", "))
    }

    /// Build the statement text and its bound parameters.
    pub fn build(&self) -> StoreResult<(String, ParamList)> {
        validate_ident(&self.table)?;
        let mut params = ParamList::new();
        let mut sql = format!(
            "SELECT DISTINCT {} FROM {}",
            self.column_list()?,
            self.table
        );
        if !self.filters.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.filters.build(&mut params)?);
        }
        Ok((sql, params))
    }

    /// The parameterized statement text.
    pub fn to_sql(&self) -> StoreResult<String> {
        Ok(self.build()?.0)
    }

    /// Render the statement in embedded-literal form.
    pub fn to_sql_literal(&self) -> StoreResult<String> {
        validate_ident(&self.table)?;
        let mut sql = format!(
            "SELECT DISTINCT {} FROM {}",
            self.column_list()?,
            self.table
        );
        if !self.filters.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.filters.render_literal()?);
        }
        Ok(sql)
    }

    /// Execute and decode the full result set.
    pub async fn fetch(&self, conn: &impl GenericClient) -> StoreResult<Vec<Vec<Value>>> {
        let (sql, params) = self.build()?;
        tracing::debug!(target: "rowsql.sql", sql = %sql, params = params.len(), "select");
        let rows = conn.query(&sql, &params.as_refs()).await?;
        rows.iter().map(decode_row).collect()
    }
}
