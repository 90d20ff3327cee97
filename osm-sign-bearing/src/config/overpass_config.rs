use crate::model::{feature::SignKind, osm::overpass::OverpassQuery};
use serde::{Deserialize, Serialize};

/// where the `query` subcommand searches for signs. area ids follow the
/// Overpass convention of 3600000000 plus the relation id.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct OverpassConfig {
    pub area_ids: Vec<i64>,
    pub timeout_seconds: u32,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            area_ids: vec![3600051477, 3600016239, 3600051701],
            timeout_seconds: 250,
        }
    }
}

impl OverpassConfig {
    pub fn query(&self, kind: SignKind) -> OverpassQuery {
        OverpassQuery::signs_without_direction(kind, &self.area_ids, self.timeout_seconds)
    }
}
