use super::{Customer, Employee, Entity, OrderDetail, Payload, Shipper, timestamp};
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// A customer order.
///
/// `ship_via` is the id of the [`Shipper`] carrying the order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Generated identity
    #[serde(default)]
    pub order_id: i64,
    /// Customer who placed it
    pub customer_id: Option<String>,
    /// Employee who took it
    pub employee_id: Option<i64>,
    /// When the order was placed
    #[serde(default, with = "timestamp::option")]
    pub order_date: Option<PrimitiveDateTime>,
    /// When the customer needs it
    #[serde(default, with = "timestamp::option")]
    pub required_date: Option<PrimitiveDateTime>,
    /// When it left the warehouse
    #[serde(default, with = "timestamp::option")]
    pub shipped_date: Option<PrimitiveDateTime>,
    /// Shipper carrying it
    pub ship_via: Option<i64>,
    /// Shipping charge
    pub freight: Option<f64>,
    /// Recipient name
    pub ship_name: Option<String>,
    /// Delivery street address
    pub ship_address: Option<String>,
    /// Delivery city
    pub ship_city: Option<String>,
    /// Delivery state or province
    pub ship_region: Option<String>,
    /// Delivery postal code
    pub ship_postal_code: Option<String>,
    /// Delivery country
    pub ship_country: Option<String>,

    /// The placing customer; a summary in lists, the full row on a keyed read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// The employee who took it; populated by reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
    /// The shipper; populated by reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper: Option<Shipper>,
    /// Line items; populated by a keyed read
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_details: Vec<OrderDetail>,
}

impl Payload for Order {}

impl Entity for Order {
    type Key = i64;
    const NAME: &'static str = "Order";

    fn key(&self) -> i64 {
        self.order_id
    }
}
