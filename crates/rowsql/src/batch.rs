//! Header-described row batches.

use crate::error::{StoreError, StoreResult};
use crate::value::{ColumnType, Value};

/// An ordered set of rows positionally aligned with a header of column names.
///
/// The constructor enforces that every row has exactly one value per header
/// column. Per-column type homogeneity across rows is assumed, not verified;
/// `CREATE TABLE` generation infers each column's type from the first row
/// only.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    header: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Batch {
    /// Create a batch, verifying the row/header arity invariant.
    pub fn new(
        header: impl IntoIterator<Item = impl Into<String>>,
        rows: Vec<Vec<Value>>,
    ) -> StoreResult<Self> {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        if header.is_empty() {
            return Err(StoreError::shape("header must not be empty"));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != header.len() {
                return Err(StoreError::shape(format!(
                    "row {} has {} values but the header has {} columns",
                    i,
                    row.len(),
                    header.len()
                )));
            }
        }
        Ok(Self { header, rows })
    }

    /// Create a batch from dynamic JSON rows, inferring each value's kind.
    pub fn from_json_rows(
        header: impl IntoIterator<Item = impl Into<String>>,
        rows: &[Vec<serde_json::Value>],
    ) -> StoreResult<Self> {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(Value::from_json).collect::<StoreResult<Vec<_>>>())
            .collect::<StoreResult<Vec<_>>>()?;
        Self::new(header, rows)
    }

    /// Column names, in order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Rows, in order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the batch holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Infer one column type per header position from the first row.
    pub fn column_types(&self) -> StoreResult<Vec<ColumnType>> {
        let first = self
            .rows
            .first()
            .ok_or_else(|| StoreError::shape("cannot infer column types from an empty batch"))?;
        Ok(first.iter().map(Value::column_type).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_enforced() {
        let err = Batch::new(["a", "b"], vec![vec![Value::Int(1)]]).unwrap_err();
        assert!(matches!(err, StoreError::Shape(_)));
    }

    #[test]
    fn test_empty_header_rejected() {
        let err = Batch::new(Vec::<String>::new(), vec![]).unwrap_err();
        assert!(matches!(err, StoreError::Shape(_)));
    }

    #[test]
    fn test_column_types_from_first_row() {
        let batch = Batch::new(
            ["name", "count"],
            vec![
                vec![Value::from("a"), Value::from(1i64)],
                vec![Value::from("b"), Value::from(2i64)],
            ],
        )
        .unwrap();
        assert_eq!(
            batch.column_types().unwrap(),
            vec![ColumnType::Text, ColumnType::Numeric]
        );
    }

    #[test]
    fn test_column_types_need_a_row() {
        let batch = Batch::new(["a"], vec![]).unwrap();
        assert!(matches!(batch.column_types(), Err(StoreError::Shape(_))));
    }

    #[test]
    fn test_from_json_rows() {
        let batch = Batch::from_json_rows(
            ["name", "count"],
            &[vec![serde_json::json!("a"), serde_json::json!(1)]],
        )
        .unwrap();
        assert_eq!(batch.rows()[0], vec![Value::from("a"), Value::from(1i64)]);
    }

    #[test]
    fn test_from_json_rows_rejects_unsupported() {
        let err = Batch::from_json_rows(["x"], &[vec![serde_json::Value::Null]]).unwrap_err();
        assert!(err.is_unsupported_type());
    }
}
