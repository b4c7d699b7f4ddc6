use super::{Entity, Payload, Product};
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Generated identity
    #[serde(default)]
    pub category_id: i64,
    /// Display name
    pub category_name: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Raw image bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<Vec<u8>>,
    /// Products in this category; populated by a keyed read
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
}

impl Payload for Category {}

impl Entity for Category {
    type Key = i64;
    const NAME: &'static str = "Category";

    fn key(&self) -> i64 {
        self.category_id
    }
}
