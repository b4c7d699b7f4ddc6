use super::{Entity, Order, Payload, Product};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A line item of an order, stored in `[Order Details]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    /// Order this line belongs to
    pub order_id: i64,
    /// Product on this line
    pub product_id: i64,
    /// Price per unit at the time of the order
    pub unit_price: f64,
    /// Units ordered
    pub quantity: i64,
    /// Fractional discount, between 0 and 1
    pub discount: f64,

    /// The ordered product; populated by reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    /// A summary of the parent order; left empty on lines read through their order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

/// The composite `(OrderID, ProductID)` key of an [`OrderDetail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailKey {
    /// Order this line belongs to
    pub order_id: i64,
    /// Product on this line
    pub product_id: i64,
}

impl OrderDetailKey {
    /// Both parts are required.
    pub fn new(order_id: i64, product_id: i64) -> Self {
        Self {
            order_id,
            product_id,
        }
    }
}

/// Both parts of an `<orderId>:<productId>` key must be integers.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid order detail key {0:?}, expected <orderId>:<productId>")]
pub struct OrderDetailKeyError(String);

impl fmt::Display for OrderDetailKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.order_id, self.product_id)
    }
}

impl FromStr for OrderDetailKey {
    type Err = OrderDetailKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OrderDetailKeyError(s.to_owned());
        let (order_id, product_id) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            order_id: order_id.trim().parse().map_err(|_| invalid())?,
            product_id: product_id.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl Payload for OrderDetail {}

impl Entity for OrderDetail {
    type Key = OrderDetailKey;
    const NAME: &'static str = "OrderDetail";

    fn key(&self) -> OrderDetailKey {
        OrderDetailKey::new(self.order_id, self.product_id)
    }

    fn describe_key(key: &OrderDetailKey) -> String {
        format!("OrderID {} and ProductID {}", key.order_id, key.product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!(
            "10248:11".parse::<OrderDetailKey>(),
            Ok(OrderDetailKey::new(10248, 11))
        );
        assert!("10248".parse::<OrderDetailKey>().is_err());
        assert!("10248:eleven".parse::<OrderDetailKey>().is_err());
    }

    #[test]
    fn test_describe_key() {
        assert_eq!(
            OrderDetail::describe_key(&OrderDetailKey::new(1, 2)),
            "OrderID 1 and ProductID 2"
        );
    }
}
