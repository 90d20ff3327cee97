use crate::model::{
    feature::SignKind,
    osm::graph::{OsmNodeId, OsmWayId},
};
use serde::{Deserialize, Serialize};

/// a sign node found through a single way that passed structural screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignCandidate {
    pub node_id: OsmNodeId,
    pub way_id: OsmWayId,
    pub kind: SignKind,
}
