use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
#[serde(transparent)]
pub struct OsmNodeId(pub i64);

impl OsmNodeId {
    /// typed element reference used by OSM editors, e.g. `node/123`
    pub fn element_ref(&self) -> String {
        format!("node/{}", self.0)
    }
}

impl Display for OsmNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
