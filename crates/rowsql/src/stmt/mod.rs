//! Statement builders for the four row-batch operations.
//!
//! Each builder is a pure function of (table name, batch, optional
//! filters/constraints): it produces parameterized SQL text plus a bound
//! parameter list, executes against a caller-supplied session, and is
//! discarded. Values are never string-interpolated into the executed text;
//! the `to_sql_literal` methods render the embedded-literal display form.

mod create;
mod insert;
mod param;
mod select;
mod update;

pub use create::{CreateTable, UniqueConstraint};
pub use insert::Insert;
pub use param::{Param, ParamList};
pub use select::Select;
pub use update::{Update, UpdateMode};

#[cfg(test)]
mod tests;
