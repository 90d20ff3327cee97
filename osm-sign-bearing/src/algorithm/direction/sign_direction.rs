use crate::model::osm::graph::{OsmNodeId, OsmWayId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// facing direction of a sign relative to the node order of its way. the
/// lowercase form is the value proposed for the OSM `direction` tag, see
/// <https://wiki.openstreetmap.org/wiki/Key:direction>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignDirection {
    Forward,
    Backward,
}

impl Display for SignDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignDirection::Forward => write!(f, "forward"),
            SignDirection::Backward => write!(f, "backward"),
        }
    }
}

/// the estimated direction of one sign node on one way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionResult {
    pub way_id: OsmWayId,
    pub node_id: OsmNodeId,
    pub direction: SignDirection,
}
