use super::{OrderDetailKey, Payload, View, timestamp};
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// One line of the `Invoices` view: an order detail joined with its order,
/// customer, salesperson, shipper and product.
///
/// Lines are looked up by their `(OrderID, ProductID)` pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
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
    /// Customer code
    pub customer_id: Option<String>,
    /// Customer company name
    pub customer_name: Option<String>,
    /// Billing street address
    pub address: Option<String>,
    /// Billing city
    pub city: Option<String>,
    /// Billing state or province
    pub region: Option<String>,
    /// Billing postal code
    pub postal_code: Option<String>,
    /// Billing country
    pub country: Option<String>,
    /// Full name of the employee who took the order
    pub salesperson: Option<String>,
    /// Order
    pub order_id: i64,
    /// When the order was placed
    #[serde(default, with = "timestamp::option")]
    pub order_date: Option<PrimitiveDateTime>,
    /// When the customer needs it
    #[serde(default, with = "timestamp::option")]
    pub required_date: Option<PrimitiveDateTime>,
    /// When it left the warehouse
    #[serde(default, with = "timestamp::option")]
    pub shipped_date: Option<PrimitiveDateTime>,
    /// Shipping company
    pub shipper_name: Option<String>,
    /// Product
    pub product_id: i64,
    /// Product name
    pub product_name: Option<String>,
    /// Price per unit on this line
    pub unit_price: Option<f64>,
    /// Units on this line
    pub quantity: Option<i64>,
    /// Fractional discount on this line
    pub discount: Option<f64>,
    /// Line total after discount
    pub extended_price: Option<f64>,
    /// Shipping charge for the whole order
    pub freight: Option<f64>,
}

impl Payload for Invoice {}

impl View for Invoice {
    type Key = OrderDetailKey;
    const NAME: &'static str = "Invoices";
}
