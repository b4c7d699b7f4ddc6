use super::{Entity, Payload, Product};
use serde::{Deserialize, Serialize};

/// A supplier of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Generated identity
    #[serde(default)]
    pub supplier_id: i64,
    /// Company name
    pub company_name: String,
    /// Primary contact
    pub contact_name: Option<String>,
    /// The contact's job title
    pub contact_title: Option<String>,
    /// Street address
    pub address: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or province
    pub region: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
    /// Country
    pub country: Option<String>,
    /// Phone number, including country code
    pub phone: Option<String>,
    /// Fax number
    pub fax: Option<String>,
    /// Web site
    pub home_page: Option<String>,
    /// Products sourced from this supplier; populated by a keyed read
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
}

impl Payload for Supplier {}

impl Entity for Supplier {
    type Key = i64;
    const NAME: &'static str = "Supplier";

    fn key(&self) -> i64 {
        self.supplier_id
    }
}
