//! Transaction helper macro.
//!
//! Statement operations accept any [`GenericClient`](crate::GenericClient),
//! so passing a transaction makes a multi-row Insert/Update/Create atomic as
//! a whole. Without a transaction, each statement commits on its own and the
//! first failing row leaves earlier rows applied.
//!
//! # Example
//!
//! ```ignore
//! use rowsql::{Batch, StoreResult};
//! use tokio_postgres::NoTls;
//!
//! # async fn demo(batch: Batch) -> StoreResult<()> {
//! let (mut client, connection) = tokio_postgres::connect("postgres://...", NoTls).await?;
//! tokio::spawn(async move { let _ = connection.await; });
//!
//! rowsql::transaction!(&mut client, tx, {
//!     rowsql::store::insert(&tx, "readings", &batch).await?;
//!     Ok(())
//! })?;
//! # Ok(()) }
//! ```

/// Runs the given block inside a database transaction.
///
/// - Begins a transaction via `$client.transaction().await`.
/// - Commits on `Ok(_)`.
/// - Rolls back on `Err(_)`.
///
/// The block must evaluate to `rowsql::StoreResult<T>`.
#[macro_export]
macro_rules! transaction {
    ($client:expr, $tx:ident, $body:block) => {{
        let $tx = ($client)
            .transaction()
            .await
            .map_err($crate::StoreError::from_db_error)?;

        let __rowsql_tx_body_result = async { $body }.await;
        match __rowsql_tx_body_result {
            Ok(value) => {
                $tx.commit()
                    .await
                    .map_err($crate::StoreError::from_db_error)?;
                Ok(value)
            }
            Err(error) => match $tx.rollback().await {
                Ok(()) => Err(error),
                Err(rollback_err) => Err($crate::StoreError::Other(format!(
                    "{error} (rollback failed: {rollback_err})"
                ))),
            },
        }
    }};
}
