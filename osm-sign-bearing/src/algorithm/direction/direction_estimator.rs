use super::{DirectionResult, WayEvidence};
use crate::model::osm::{
    graph::{osm_way_ops, OsmGraph, OsmNodeId, OsmWayData},
    OsmError,
};
use uom::si::f64::Length;

/// estimates which way a sign faces relative to the node order of its way.
///
/// the sign node must be part of the way. candidates produced by
/// [`crate::algorithm::candidates::candidates`] always are, so a missing node
/// is reported as an [`OsmError::InternalError`].
pub fn estimate(
    graph: &OsmGraph,
    way: &OsmWayData,
    node_id: &OsmNodeId,
    short_way_threshold: Length,
) -> Result<DirectionResult, OsmError> {
    let evidence = collect_evidence(graph, way, node_id)?;
    let direction = evidence.decide(short_way_threshold);
    Ok(DirectionResult {
        way_id: way.osmid,
        node_id: *node_id,
        direction,
    })
}

/// measures the way around the first occurrence of the sign node.
pub fn collect_evidence(
    graph: &OsmGraph,
    way: &OsmWayData,
    node_id: &OsmNodeId,
) -> Result<WayEvidence, OsmError> {
    let nodes = &way.nodes;
    let (before, after) = osm_way_ops::split_at_node(node_id, nodes).ok_or_else(|| {
        OsmError::InternalError(format!(
            "sign node {} is not part of way {} it was selected from",
            node_id, way.osmid
        ))
    })?;
    let index = before.len();

    let evidence = WayEvidence {
        way_length: osm_way_ops::path_length(nodes, graph)?,
        before_connections: additional_memberships(before, graph),
        after_connections: additional_memberships(after, graph),
        distance_to_start: index,
        distance_to_end: after.len(),
        length_to_start: osm_way_ops::path_length(&nodes[..=index], graph)?,
        length_to_end: osm_way_ops::path_length(&nodes[index..], graph)?,
    };
    log::debug!("way {} sign node {}: {:?}", way.osmid, node_id, evidence);
    Ok(evidence)
}

/// approximates the number of roads branching off a run of nodes: every way
/// beyond the first that a node belongs to counts once.
fn additional_memberships(node_ids: &[OsmNodeId], graph: &OsmGraph) -> usize {
    node_ids
        .iter()
        .map(|n| graph.way_membership_count(n).saturating_sub(1))
        .sum()
}
