use crate::model::osm::graph::OsmNodeId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingResult {
    pub node_id: OsmNodeId,
    /// compass-style angle in degrees, in the range [0, 360)
    pub bearing_degrees: f64,
}
