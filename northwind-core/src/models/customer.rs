use super::{Entity, Order, Payload};
use serde::{Deserialize, Serialize};

/// A customer, keyed by a caller-chosen code such as `ALFKI`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Five-letter code chosen by the caller
    pub customer_id: String,
    /// Company name
    pub company_name: Option<String>,
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
    /// Orders placed by this customer, newest first; populated by a keyed read
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<Order>,
}

impl Payload for Customer {}

impl Entity for Customer {
    type Key = String;
    const NAME: &'static str = "Customer";

    fn key(&self) -> String {
        self.customer_id.clone()
    }
}
