use super::{
    osm_node_data::OsmNodeData, osm_way_data::OsmWayData, OsmNodeId, OsmNodes, OsmWayId,
    OsmWays, WayMembership,
};
use crate::model::osm::{import_ops, overpass::OverpassResponse, OsmError};
use itertools::Itertools;
use std::collections::HashMap;

/// read-only snapshot of a map-data extract. stores nodes and ways by their
/// OSMID along with the number of distinct ways referencing each node.
///
/// the graph is built once per batch and never modified afterward, so it can be
/// shared across worker threads by reference.
#[derive(Default, Debug, Clone)]
pub struct OsmGraph {
    /// the collection of OSM nodes associated via their OSMID
    nodes: OsmNodes,
    /// the collection of OSM ways associated via their OSMID
    ways: OsmWays,
    /// for each node, the count of distinct ways whose node list contains it
    way_membership: WayMembership,
}

impl OsmGraph {
    /// creates a new graph from the provided nodes and ways.
    ///
    /// fails with [`OsmError::MalformedData`] if any way has an empty node
    /// list or references a node not present in `nodes`.
    pub fn new(nodes: OsmNodes, ways: OsmWays) -> Result<OsmGraph, OsmError> {
        for way in ways.values().sorted_by_key(|w| w.osmid) {
            if way.nodes.is_empty() {
                return Err(OsmError::MalformedData(format!(
                    "way {} references zero nodes",
                    way.osmid
                )));
            }
            if let Some(missing) = way.nodes.iter().find(|n| !nodes.contains_key(n)) {
                return Err(OsmError::MalformedData(format!(
                    "way {} references node {} which is not present in the extract",
                    way.osmid, missing
                )));
            }
        }
        let way_membership = count_way_membership(&ways);
        log::debug!(
            "built graph with {} nodes, {} ways, {} nodes referenced by ways",
            nodes.len(),
            ways.len(),
            way_membership.len()
        );
        Ok(OsmGraph {
            nodes,
            ways,
            way_membership,
        })
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_ways(&self) -> usize {
        self.ways.len()
    }

    pub fn node(&self, node_id: &OsmNodeId) -> Option<&OsmNodeData> {
        self.nodes.get(node_id)
    }

    pub fn way(&self, way_id: &OsmWayId) -> Option<&OsmWayData> {
        self.ways.get(way_id)
    }

    /// helper with error handling for getting the node data for a given node id
    pub fn get_node_data(&self, node_id: &OsmNodeId) -> Result<&OsmNodeData, OsmError> {
        self.nodes
            .get(node_id)
            .ok_or(OsmError::GraphMissingNodeId(*node_id))
    }

    /// helper with error handling for getting the way data for a given way id
    pub fn get_way_data(&self, way_id: &OsmWayId) -> Result<&OsmWayData, OsmError> {
        self.ways
            .get(way_id)
            .ok_or(OsmError::GraphMissingWayId(*way_id))
    }

    /// number of distinct ways that contain this node. nodes not referenced by
    /// any way (or not in the graph) have a count of zero.
    pub fn way_membership_count(&self, node_id: &OsmNodeId) -> usize {
        self.way_membership.get(node_id).copied().unwrap_or_default()
    }

    /// iterator over all ways, sorted by id so that repeated runs visit ways
    /// in the same order.
    pub fn way_iterator<'a>(
        &'a self,
        sorted: bool,
    ) -> Box<dyn Iterator<Item = &'a OsmWayData> + 'a + Send + Sync> {
        if sorted {
            Box::new(self.ways.values().sorted_by_key(|w| w.osmid))
        } else {
            Box::new(self.ways.values())
        }
    }
}

impl TryFrom<OverpassResponse> for OsmGraph {
    type Error = OsmError;

    fn try_from(response: OverpassResponse) -> Result<Self, Self::Error> {
        let (nodes, ways) = import_ops::read_elements(response.elements)?;
        OsmGraph::new(nodes, ways)
    }
}

/// single pass over all ways. a way that revisits a node contributes one
/// membership for that node.
fn count_way_membership(ways: &OsmWays) -> WayMembership {
    let mut counts: HashMap<OsmNodeId, usize> = HashMap::new();
    for way in ways.values() {
        for node_id in way.unique_nodes() {
            *counts.entry(*node_id).or_default() += 1;
        }
    }
    counts
}
