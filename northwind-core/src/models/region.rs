use super::{Entity, Payload, Territory};
use serde::{Deserialize, Serialize};

/// A sales region. Its id is supplied by the caller, not generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Caller-supplied id
    pub region_id: i64,
    /// Display name
    pub region_description: String,
    /// Territories in this region; populated by a keyed read
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub territories: Vec<Territory>,
}

impl Payload for Region {}

impl Entity for Region {
    type Key = i64;
    const NAME: &'static str = "Region";

    fn key(&self) -> i64 {
        self.region_id
    }
}
