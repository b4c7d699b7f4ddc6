use super::{Entity, Order, Payload};
use serde::{Deserialize, Serialize};

/// A shipping company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipper {
    /// Generated identity
    #[serde(default)]
    pub shipper_id: i64,
    /// Company name
    pub company_name: String,
    /// Phone number, including country code
    pub phone: Option<String>,
    /// Orders shipped via this company; populated by a keyed read
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<Order>,
}

impl Payload for Shipper {}

impl Entity for Shipper {
    type Key = i64;
    const NAME: &'static str = "Shipper";

    fn key(&self) -> i64 {
        self.shipper_id
    }
}
