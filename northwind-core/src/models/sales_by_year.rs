use super::{Payload, View, timestamp};
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// A row of `Summary of Sales by Year`: the subtotal of one shipped order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesByYear {
    /// When the order shipped
    #[serde(default, with = "timestamp::option")]
    pub shipped_date: Option<PrimitiveDateTime>,
    /// Order
    pub order_id: i64,
    /// Sum of the order lines after discount
    pub subtotal: Option<f64>,
}

impl Payload for SalesByYear {}

impl View for SalesByYear {
    type Key = i64;
    const NAME: &'static str = "Summary of Sales by Year";
}
