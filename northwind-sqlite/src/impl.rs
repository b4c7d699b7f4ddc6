//! Repository trait implementations for the SQLite database.
//!
//! One module per entity. Each holds the `FromRow` shapes its queries produce
//! and a `find` helper returning the bare, unhydrated entity so that other
//! modules can reuse it when hydrating their own reads.

use crate::Db;
use northwind_core::ports::Repository;
use sqlx::sqlite::SqliteQueryResult;

mod category;
mod customer;
mod customer_demographic;
mod employee;
mod order;
mod order_detail;
mod product;
mod region;
mod shipper;
mod supplier;
mod territory;
mod views;

impl Repository for Db {
    type Error = sqlx::Error;
}

/// Whether an UPDATE or DELETE touched anything.
fn affected(result: SqliteQueryResult) -> bool {
    result.rows_affected() > 0
}
