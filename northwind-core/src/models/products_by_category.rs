use super::{Payload, View};
use serde::{Deserialize, Serialize};

/// A row of `Products by Category`, looked up by product name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsByCategory {
    /// Name of the category
    pub category_name: Option<String>,
    /// Product name
    pub product_name: Option<String>,
    /// Packaging, e.g. `10 boxes x 20 bags`
    pub quantity_per_unit: Option<String>,
    /// Units on hand
    pub units_in_stock: Option<i64>,
    /// `"1"` if no longer sold, otherwise `"0"`
    pub discontinued: Option<String>,
}

impl Payload for ProductsByCategory {}

impl View for ProductsByCategory {
    type Key = String;
    const NAME: &'static str = "Products by Category";
}
