use super::{Category, Entity, Payload, Supplier};
use serde::{Deserialize, Serialize};

/// A product.
///
/// `discontinued` keeps the column's text form (`"0"` or `"1"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Generated identity
    #[serde(default)]
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
    #[serde(default = "not_discontinued")]
    pub discontinued: String,

    /// Parent category; populated by reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Supplier; populated by reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
}

fn not_discontinued() -> String {
    "0".to_owned()
}

impl Payload for Product {}

impl Entity for Product {
    type Key = i64;
    const NAME: &'static str = "Product";

    fn key(&self) -> i64 {
        self.product_id
    }
}
