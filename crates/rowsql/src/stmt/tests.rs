use super::*;
use crate::batch::Batch;
use crate::filter::FilterSet;
use crate::value::Value;
use crate::StoreError;
use chrono::NaiveDate;

fn sample_batch() -> Batch {
    Batch::new(
        ["name", "count"],
        vec![
            vec![Value::from("a"), Value::from(1i64)],
            vec![Value::from("b"), Value::from(2i64)],
        ],
    )
    .unwrap()
}

#[test]
fn test_insert_sql() {
    let batch = sample_batch();
    let stmt = Insert::new("t", &batch);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "INSERT INTO t (name, count) VALUES ($1, $2)"
    );
}

#[test]
fn test_insert_literal_form() {
    let batch = sample_batch();
    let stmt = Insert::new("t", &batch);
    assert_eq!(
        stmt.to_sql_literal(0).unwrap(),
        "INSERT INTO t (name, count) VALUES ('a', 1)"
    );
    assert_eq!(
        stmt.to_sql_literal(1).unwrap(),
        "INSERT INTO t (name, count) VALUES ('b', 2)"
    );
}

#[test]
fn test_insert_rejects_bad_table() {
    let batch = sample_batch();
    let stmt = Insert::new("t; DROP TABLE t", &batch);
    assert!(matches!(stmt.to_sql(), Err(StoreError::Identifier(_))));
}

#[test]
fn test_create_ddl_from_first_row() {
    let batch = sample_batch();
    let stmt = CreateTable::new("t", &batch);
    assert_eq!(
        stmt.build_ddl().unwrap(),
        "CREATE TABLE t (name VARCHAR(255), count NUMERIC)"
    );
}

#[test]
fn test_create_ddl_all_column_types() {
    let mut doc = serde_json::Map::new();
    doc.insert("k".to_string(), serde_json::json!(1));
    let batch = Batch::new(
        ["n", "f", "d", "ts", "s", "b", "j"],
        vec![vec![
            Value::from(1i64),
            Value::from(0.5f64),
            Value::from(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            Value::from(
                NaiveDate::from_ymd_opt(2024, 1, 2)
                    .unwrap()
                    .and_hms_opt(3, 4, 5)
                    .unwrap(),
            ),
            Value::from("x"),
            Value::from(true),
            Value::from(doc),
        ]],
    )
    .unwrap();
    assert_eq!(
        CreateTable::new("t", &batch).build_ddl().unwrap(),
        "CREATE TABLE t (n NUMERIC, f NUMERIC, d DATE, ts TIMESTAMP, \
         s VARCHAR(255), b BOOLEAN, j JSONB)"
    );
}

#[test]
fn test_create_ddl_with_unique_constraint() {
    let batch = sample_batch();
    let stmt = CreateTable::new("t", &batch).unique(UniqueConstraint::new("uq_name", &["name"]));
    assert_eq!(
        stmt.build_ddl().unwrap(),
        "CREATE TABLE t (name VARCHAR(255), count NUMERIC, CONSTRAINT uq_name UNIQUE (name))"
    );
}

#[test]
fn test_create_unique_constraint_column_must_exist() {
    let batch = sample_batch();
    let stmt = CreateTable::new("t", &batch).unique(UniqueConstraint::new("uq", &["missing"]));
    assert!(matches!(stmt.build_ddl(), Err(StoreError::Shape(_))));
}

#[test]
fn test_create_needs_a_row_for_inference() {
    let batch = Batch::new(["a"], vec![]).unwrap();
    assert!(matches!(
        CreateTable::new("t", &batch).build_ddl(),
        Err(StoreError::Shape(_))
    ));
}

#[test]
fn test_select_with_filters() {
    let filters = FilterSet::new()
        .eq("name", "a")
        .any("count", vec![Value::Int(1), Value::Int(2)]);
    let stmt = Select::new(&["name", "count"], "t", &filters);
    let (sql, params) = stmt.build().unwrap();
    assert_eq!(
        sql,
        "SELECT DISTINCT name, count FROM t WHERE name = $1 AND count IN ($2, $3)"
    );
    assert_eq!(params.len(), 3);
}

#[test]
fn test_select_without_filters_omits_where() {
    let filters = FilterSet::new();
    let stmt = Select::new(&["name"], "t", &filters);
    assert_eq!(stmt.to_sql().unwrap(), "SELECT DISTINCT name FROM t");
}

#[test]
fn test_select_all_columns() {
    let filters = FilterSet::new().eq("name", "a");
    let stmt = Select::all("t", &filters);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "SELECT DISTINCT * FROM t WHERE name = $1"
    );
}

#[test]
fn test_select_literal_form() {
    let filters = FilterSet::new().eq("name", "a");
    let stmt = Select::new(&["name", "count"], "t", &filters);
    assert_eq!(
        stmt.to_sql_literal().unwrap(),
        "SELECT DISTINCT name, count FROM t WHERE name = 'a'"
    );
}

#[test]
fn test_update_shared_predicate() {
    let batch = sample_batch();
    let selection = Batch::new(["id"], vec![vec![Value::Int(7)]]).unwrap();
    let stmt = Update::new("t", &batch, &selection, UpdateMode::FirstSelectionRow);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "UPDATE t SET name = $1, count = $2 WHERE id = $3"
    );
    // Both data rows reuse the predicate from the single selection row.
    assert_eq!(
        stmt.to_sql_literal(0).unwrap(),
        "UPDATE t SET name = 'a', count = 1 WHERE id = 7"
    );
    assert_eq!(
        stmt.to_sql_literal(1).unwrap(),
        "UPDATE t SET name = 'b', count = 2 WHERE id = 7"
    );
}

#[test]
fn test_update_row_by_row_predicate() {
    let batch = sample_batch();
    let selection = Batch::new(["id"], vec![vec![Value::Int(7)], vec![Value::Int(8)]]).unwrap();
    let stmt = Update::new("t", &batch, &selection, UpdateMode::RowByRow);
    assert_eq!(
        stmt.to_sql_literal(0).unwrap(),
        "UPDATE t SET name = 'a', count = 1 WHERE id = 7"
    );
    assert_eq!(
        stmt.to_sql_literal(1).unwrap(),
        "UPDATE t SET name = 'b', count = 2 WHERE id = 8"
    );
}

#[test]
fn test_update_row_by_row_requires_matching_counts() {
    let batch = sample_batch();
    let selection = Batch::new(["id"], vec![vec![Value::Int(7)]]).unwrap();
    let stmt = Update::new("t", &batch, &selection, UpdateMode::RowByRow);
    assert!(matches!(stmt.to_sql(), Err(StoreError::Shape(_))));
}

#[test]
fn test_update_shared_predicate_needs_a_selection_row() {
    let batch = sample_batch();
    let selection = Batch::new(["id"], vec![]).unwrap();
    let stmt = Update::new("t", &batch, &selection, UpdateMode::FirstSelectionRow);
    assert!(matches!(stmt.to_sql(), Err(StoreError::Shape(_))));
}

#[test]
fn test_update_multi_column_predicate() {
    let batch = Batch::new(["status"], vec![vec![Value::from("done")]]).unwrap();
    let selection = Batch::new(
        ["id", "kind"],
        vec![vec![Value::Int(7), Value::from("job")]],
    )
    .unwrap();
    let stmt = Update::new("t", &batch, &selection, UpdateMode::FirstSelectionRow);
    assert_eq!(
        stmt.to_sql().unwrap(),
        "UPDATE t SET status = $1 WHERE id = $2 AND kind = $3"
    );
}
