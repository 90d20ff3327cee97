use super::SignKind;
use crate::{
    algorithm::direction::SignDirection,
    model::osm::graph::{OsmNodeId, OsmWayId},
};
use serde::{Deserialize, Serialize};

/// the inferred facing of one sign node, as handed to the review-task
/// emitters. field order matches the columns of `sign-bearings.csv.gz`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignBearing {
    pub node_id: OsmNodeId,
    pub kind: SignKind,
    pub way_id: OsmWayId,
    /// compass-style angle in degrees, in the range [0, 360)
    pub bearing_degrees: f64,
    pub direction: SignDirection,
    pub lat: f64,
    pub lon: f64,
}

impl SignBearing {
    /// the bearing truncated toward zero, as used for marker icon names
    pub fn int_angle(&self) -> i64 {
        self.bearing_degrees.trunc() as i64
    }
}
