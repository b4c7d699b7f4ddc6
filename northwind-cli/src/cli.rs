//! Command-line interface definition and parsing.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the Northwind gateway.
#[derive(Parser, Debug)]
#[command(name = "northwind", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database connection string; overrides the configuration file.
    #[arg(short, long, env = "NORTHWIND_DATABASE")]
    pub database: Option<String>,

    /// The operation to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// One gateway operation.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch every row
    List {
        /// Entity or view to read
        table: Table,
    },
    /// Fetch one row by key
    Get {
        /// Entity or view to read
        table: Table,
        /// Row key; `<orderId>:<productId>` for order details and invoices
        key: String,
    },
    /// Insert a row
    Insert {
        /// Entity to write
        table: Table,
        /// The row as camelCase JSON
        json: String,
    },
    /// Update a row by its key
    Update {
        /// Entity to write
        table: Table,
        /// The row as camelCase JSON, key included
        json: String,
    },
    /// Delete a row by key
    Delete {
        /// Entity to delete from
        table: Table,
        /// Row key; `<orderId>:<productId>` for order details
        key: String,
    },
}

/// The entities and views a command can address.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// Product categories
    Category,
    /// Customers, keyed by code
    Customer,
    /// Customer type codes
    CustomerDemographic,
    /// Employees
    Employee,
    /// Orders
    Order,
    /// Order lines, keyed by `<orderId>:<productId>`
    OrderDetail,
    /// Products
    Product,
    /// Sales regions
    Region,
    /// Shipping companies
    Shipper,
    /// Product suppliers
    Supplier,
    /// Sales territories, keyed by code
    Territory,
    /// Invoice lines (read-only)
    Invoice,
    /// Active products with category names (read-only)
    AlphabeticalListOfProducts,
    /// Active products grouped by category (read-only)
    ProductsByCategory,
    /// Shipped order subtotals (read-only)
    SalesByYear,
}
