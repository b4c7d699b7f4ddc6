use super::{Entity, Payload};
use serde::{Deserialize, Serialize};

/// A customer classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDemographic {
    /// Caller-chosen type code
    pub customer_type_id: String,
    /// What the type covers
    pub customer_desc: Option<String>,
}

impl Payload for CustomerDemographic {}

impl Entity for CustomerDemographic {
    type Key = String;
    const NAME: &'static str = "CustomerDemographic";

    fn key(&self) -> String {
        self.customer_type_id.clone()
    }
}
