//! Column types shared by the repository implementations.

mod datetime;
pub use datetime::DateTime;
