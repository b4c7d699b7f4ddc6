use super::{Payload, View};
use serde::{Deserialize, Serialize};

/// A row of `Alphabetical list of products`: every current product with its
/// category name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlphabeticalListOfProduct {
    /// Product id
    pub product_id: i64,
    /// Product name
    pub product_name: String,
    /// Supplier, if any
    pub supplier_id: Option<i64>,
    /// Category, if any
    pub category_id: Option<i64>,
    /// Packaging, e.g. `10 boxes x 20 bags`
    pub quantity_per_unit: Option<String>,
    /// Price per unit
    pub unit_price: Option<f64>,
    /// Units on hand
    pub units_in_stock: Option<i64>,
    /// Units ordered from the supplier
    pub units_on_order: Option<i64>,
    /// Stock level that triggers a reorder
    pub reorder_level: Option<i64>,
    /// `"1"` if no longer sold, otherwise `"0"`
    pub discontinued: String,
    /// Name of the category
    pub category_name: Option<String>,
}

impl Payload for AlphabeticalListOfProduct {}

impl View for AlphabeticalListOfProduct {
    type Key = i64;
    const NAME: &'static str = "Alphabetical list of products";
}
