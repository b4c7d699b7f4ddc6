mod alphabetical_product;
mod category;
mod customer;
mod customer_demographic;
mod employee;
mod invoice;
mod order;
mod order_detail;
mod outcome;
mod product;
mod products_by_category;
mod region;
mod sales_by_year;
mod shipper;
mod supplier;
mod territory;

pub use alphabetical_product::AlphabeticalListOfProduct;
pub use category::Category;
pub use customer::Customer;
pub use customer_demographic::CustomerDemographic;
pub use employee::Employee;
pub use invoice::Invoice;
pub use order::Order;
pub use order_detail::{OrderDetail, OrderDetailKey, OrderDetailKeyError};
pub use outcome::{Outcome, Payload};
pub use product::Product;
pub use products_by_category::ProductsByCategory;
pub use region::Region;
pub use sales_by_year::SalesByYear;
pub use shipper::Shipper;
pub use supplier::Supplier;
pub use territory::Territory;

use std::fmt::{Debug, Display};

/// A mutable catalog entity backed by one table.
///
/// The key type is what `get`/`delete` accept. For integer-identity tables the
/// key carried by an entity passed to `insert` is ignored and replaced with the
/// generated one.
pub trait Entity: Payload + Send + Sized {
    /// The primary key, possibly composite.
    type Key: Clone + Debug + Display + Send + Sync;

    /// Human-readable entity name used in messages.
    const NAME: &'static str;

    /// The primary key of this row.
    fn key(&self) -> Self::Key;

    /// Render a key for a not-found message, e.g. `ID 5`.
    fn describe_key(key: &Self::Key) -> String {
        format!("ID {key}")
    }
}

/// A read-only reporting row backed by a database view.
pub trait View: Payload + Send + Sized {
    /// The column(s) a single row can be looked up by.
    type Key: Clone + Debug + Display + Send + Sync;

    /// Human-readable view name used in messages.
    const NAME: &'static str;
}

// Timestamps are exchanged as `YYYY-MM-DD HH:MM:SS`, dates as `YYYY-MM-DD`.
time::serde::format_description!(
    timestamp,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]:[second]"
);
time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");
