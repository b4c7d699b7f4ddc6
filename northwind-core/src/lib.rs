#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Entity and view models for the Northwind catalog.
///
/// Every model is a detached snapshot of one table or view row. Relationships
/// are plain optional fields that a read may populate; nothing here holds a
/// live reference to storage or enforces referential integrity.
pub mod models;

/// Interface traits for Northwind storage backends.
///
/// These are the "ports" a storage adapter implements. They report expected
/// outcomes (missing rows, zero rows affected) through `Option`/`bool` and
/// reserve `Err` for infrastructure faults.
pub mod ports;

mod gateway;
pub use gateway::Gateway;
