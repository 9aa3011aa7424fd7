//! # rowsql
//!
//! A row-batch-oriented PostgreSQL storage client for Rust.
//!
//! ## Features
//!
//! - **Tagged values**: runtime data is ingested once into a [`Value`] sum
//!   type (numeric, date, timestamp, text, boolean, JSON document); column
//!   types are inferred per value, never re-guessed downstream
//! - **Dynamic statements**: CREATE/INSERT/SELECT/UPDATE built from
//!   header-described row batches, with column types for `CREATE TABLE`
//!   inferred from the first row
//! - **Bound parameters**: executed SQL always uses `$n` placeholders;
//!   values are never string-interpolated (the literal renderers exist for
//!   display and debugging)
//! - **Session-agnostic**: every operation takes a [`GenericClient`] — a
//!   client, a transaction, or a pooled client — so the caller owns the
//!   connection lifecycle and can make whole batches atomic with
//!   [`transaction!`]
//!
//! ## Usage
//!
//! ```ignore
//! use rowsql::{store, Batch, FilterSet, Value};
//!
//! let batch = Batch::new(
//!     ["name", "count"],
//!     vec![vec![Value::from("a"), Value::from(1i64)]],
//! )?;
//!
//! // CREATE TABLE readings (name VARCHAR(255), count NUMERIC) + insert rows
//! store::create_table(&client, "readings", &batch, None).await?;
//!
//! // SELECT DISTINCT name, count FROM readings WHERE name = $1
//! let rows = store::select(
//!     &client,
//!     &["name", "count"],
//!     "readings",
//!     &FilterSet::new().eq("name", "a"),
//! )
//! .await?;
//! ```

pub mod batch;
pub mod client;
pub mod error;
pub mod filter;
mod ident;
pub mod row;
pub mod stmt;
pub mod store;
pub mod transaction;
pub mod value;

pub use batch::Batch;
pub use client::GenericClient;
pub use error::{StoreError, StoreResult};
pub use filter::{FilterSet, FilterTerm};
pub use row::decode_row;
pub use stmt::{CreateTable, Insert, Param, ParamList, Select, UniqueConstraint, Update, UpdateMode};
pub use value::{ColumnType, Value};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config, create_pool_with_tls};
