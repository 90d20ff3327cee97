use super::{OsmNodeId, OsmWayId};
use crate::model::osm::overpass::OverpassWay;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct OsmWayData {
    pub osmid: OsmWayId,
    /// ordered node sequence of this way. may revisit a node id for closed ways.
    pub nodes: Vec<OsmNodeId>,
    pub tags: HashMap<String, String>,
}

impl OsmWayData {
    /// qualifier segment used by tags that override the `oneway` key for a
    /// subset of traffic, such as `oneway:bicycle`.
    pub const ONEWAY_QUALIFIER: &'static str = "oneway:";

    pub fn new(osmid: OsmWayId, nodes: Vec<OsmNodeId>) -> OsmWayData {
        OsmWayData {
            osmid,
            nodes,
            tags: HashMap::new(),
        }
    }

    /// builder-style helper to attach a tag to this way
    pub fn with_tag(mut self, key: &str, value: &str) -> OsmWayData {
        self.tags.insert(String::from(key), String::from(value));
        self
    }

    pub fn get_tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|v| v.as_str())
    }

    pub fn highway(&self) -> Option<&str> {
        self.get_tag("highway")
    }

    /// a way is one way when tagged `oneway=yes` or `oneway=-1`. the
    /// `-1` value denotes travel against the node order, see
    /// <https://wiki.openstreetmap.org/wiki/Key:oneway>.
    pub fn is_one_way(&self) -> bool {
        matches!(self.get_tag("oneway"), Some("yes") | Some("-1"))
    }

    /// true if any tag key contains the `oneway:` qualifier with value `no`,
    /// such as `oneway:bicycle=no`. these ways still carry traffic (and signs)
    /// in both directions.
    pub fn has_counter_flow_exception(&self) -> bool {
        self.tags
            .iter()
            .any(|(k, v)| k.contains(Self::ONEWAY_QUALIFIER) && v == "no")
    }

    /// index of the first occurrence of a node in this way's node sequence
    pub fn position_of(&self, node_id: &OsmNodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n == node_id)
    }

    /// true if the node is the first or last node of this way
    pub fn is_endpoint(&self, node_id: &OsmNodeId) -> bool {
        self.nodes.first() == Some(node_id) || self.nodes.last() == Some(node_id)
    }

    /// the distinct node ids of this way, in order of first occurrence
    pub fn unique_nodes(&self) -> impl Iterator<Item = &OsmNodeId> + '_ {
        self.nodes.iter().unique()
    }
}

impl From<OverpassWay> for OsmWayData {
    fn from(way: OverpassWay) -> Self {
        let tags = way
            .tags
            .into_iter()
            .map(|(k, v)| (k, String::from(v.trim())))
            .collect();
        OsmWayData {
            osmid: OsmWayId(way.id),
            nodes: way.nodes.into_iter().map(OsmNodeId).collect_vec(),
            tags,
        }
    }
}
