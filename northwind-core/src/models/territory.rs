use super::{Entity, Payload, Region};
use serde::{Deserialize, Serialize};

/// A sales territory within a [`Region`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Territory {
    /// Caller-chosen code, usually a postal code
    pub territory_id: String,
    /// Display name
    pub territory_description: String,
    /// Region this territory belongs to
    pub region_id: i64,
    /// Parent region; populated by reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

impl Payload for Territory {}

impl Entity for Territory {
    type Key = String;
    const NAME: &'static str = "Territory";

    fn key(&self) -> String {
        self.territory_id.clone()
    }
}
