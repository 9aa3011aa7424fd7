//! Result-row decoding back into the tagged value model.

use crate::error::{StoreError, StoreResult};
use crate::value::Value;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tokio_postgres::Row;
use tokio_postgres::types::Type;

/// Decode a result row into values, one per column, by column type.
///
/// Covers the types the statement builders can produce plus the common
/// narrower integer/float widths. Columns of any other type fail with
/// [`StoreError::Decode`] naming the column.
pub fn decode_row(row: &Row) -> StoreResult<Vec<Value>> {
    let mut values = Vec::with_capacity(row.columns().len());
    for (i, column) in row.columns().iter().enumerate() {
        let ty = column.type_();
        let value = if *ty == Type::INT2 {
            Value::Int(get::<i16>(row, i, column.name())? as i64)
        } else if *ty == Type::INT4 {
            Value::Int(get::<i32>(row, i, column.name())? as i64)
        } else if *ty == Type::INT8 {
            Value::Int(get::<i64>(row, i, column.name())?)
        } else if *ty == Type::FLOAT4 {
            Value::Float(get::<f32>(row, i, column.name())? as f64)
        } else if *ty == Type::FLOAT8 {
            Value::Float(get::<f64>(row, i, column.name())?)
        } else if *ty == Type::NUMERIC {
            Value::Decimal(get::<Decimal>(row, i, column.name())?)
        } else if *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR {
            Value::Text(get::<String>(row, i, column.name())?)
        } else if *ty == Type::BOOL {
            Value::Bool(get::<bool>(row, i, column.name())?)
        } else if *ty == Type::DATE {
            Value::Date(get::<NaiveDate>(row, i, column.name())?)
        } else if *ty == Type::TIMESTAMP {
            Value::Timestamp(get::<NaiveDateTime>(row, i, column.name())?)
        } else if *ty == Type::JSON || *ty == Type::JSONB {
            match get::<serde_json::Value>(row, i, column.name())? {
                serde_json::Value::Object(map) => Value::Document(map),
                other => {
                    return Err(StoreError::decode(
                        column.name(),
                        format!("expected a JSON object, got {other}"),
                    ));
                }
            }
        } else {
            return Err(StoreError::decode(
                column.name(),
                format!("unsupported column type {ty}"),
            ));
        };
        values.push(value);
    }
    Ok(values)
}

fn get<'a, T>(row: &'a Row, index: usize, column: &str) -> StoreResult<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get(index)
        .map_err(|e| StoreError::decode(column, e.to_string()))
}
