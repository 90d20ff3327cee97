use super::SignCandidate;
use crate::model::{
    feature::SignKind,
    osm::graph::{OsmGraph, OsmWayData},
};

/// finds the sign nodes of one kind along a way, in node order.
///
/// sign nodes are dropped when they are structurally ambiguous:
/// - the first or last node of the way (likely belongs to the junction)
/// - a member of more than one way (cannot be attributed to this way)
///
/// a node that appears more than once in the way is yielded once. the
/// returned iterator is lazy and can be cloned to restart the scan.
pub fn candidates<'a>(
    graph: &'a OsmGraph,
    way: &'a OsmWayData,
    kind: SignKind,
) -> impl Iterator<Item = SignCandidate> + Clone + 'a {
    way.nodes
        .iter()
        .enumerate()
        .filter(move |(idx, node_id)| way.position_of(node_id) == Some(*idx))
        .map(|(_, node_id)| node_id)
        .filter(move |node_id| {
            graph
                .node(node_id)
                .is_some_and(|node| node.is_sign_of_kind(&kind))
        })
        .filter(move |node_id| {
            if way.is_endpoint(node_id) {
                log::debug!(
                    "{} node {} skipped: endpoint of way {}",
                    kind,
                    node_id,
                    way.osmid
                );
                return false;
            }
            let n_ways = graph.way_membership_count(node_id);
            if n_ways > 1 {
                log::debug!(
                    "{} node {} skipped: shared by {} ways",
                    kind,
                    node_id,
                    n_ways
                );
                return false;
            }
            true
        })
        .map(move |node_id| SignCandidate {
            node_id: *node_id,
            way_id: way.osmid,
            kind,
        })
}
