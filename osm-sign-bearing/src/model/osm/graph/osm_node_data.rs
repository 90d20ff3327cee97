use crate::model::{
    feature::SignKind,
    osm::{overpass::OverpassNode, OsmError},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::OsmNodeId;

/// represents a raw OSM node as read from a map-data extract. nodes are
/// immutable once loaded into an [`super::OsmGraph`].
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct OsmNodeData {
    pub osmid: OsmNodeId,
    /// latitude in degrees
    pub lat: f64,
    /// longitude in degrees
    pub lon: f64,
    pub tags: HashMap<String, String>,
}

impl OsmNodeData {
    pub fn new(osmid: OsmNodeId, lat: f64, lon: f64) -> OsmNodeData {
        OsmNodeData {
            osmid,
            lat,
            lon,
            tags: HashMap::new(),
        }
    }

    /// builder-style helper to attach a tag to this node
    pub fn with_tag(mut self, key: &str, value: &str) -> OsmNodeData {
        self.tags.insert(String::from(key), String::from(value));
        self
    }

    pub fn get_tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|v| v.as_str())
    }

    /// true if this node carries the `highway` tag value for the given sign kind
    pub fn is_sign_of_kind(&self, kind: &SignKind) -> bool {
        self.get_tag("highway") == Some(kind.highway_tag())
    }
}

impl TryFrom<OverpassNode> for OsmNodeData {
    type Error = OsmError;

    fn try_from(node: OverpassNode) -> Result<Self, Self::Error> {
        let (lat, lon) = match (node.lat, node.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => (lat, lon),
            (Some(_), Some(_)) => {
                return Err(OsmError::MalformedData(format!(
                    "node {} has non-finite coordinates",
                    node.id
                )))
            }
            _ => {
                return Err(OsmError::MalformedData(format!(
                    "node {} is missing coordinates",
                    node.id
                )))
            }
        };
        let tags = node
            .tags
            .into_iter()
            .map(|(k, v)| (k, String::from(v.trim())))
            .collect();
        Ok(OsmNodeData {
            osmid: OsmNodeId(node.id),
            lat,
            lon,
            tags,
        })
    }
}
