use super::BearingResult;
use crate::{
    algorithm::direction::SignDirection,
    model::osm::{
        graph::{OsmGraph, OsmNodeData, OsmNodeId, OsmWayData},
        OsmError,
    },
};

/// computes the angle a sign faces from its position along the way and the
/// estimated direction.
///
/// the angle is taken from the node preceding the sign to the sign itself.
/// if the sign is the first node of the way, the following node is used
/// instead. a [`SignDirection::Backward`] sign is turned around by 180 degrees.
pub fn bearing(
    graph: &OsmGraph,
    way: &OsmWayData,
    node_id: &OsmNodeId,
    direction: SignDirection,
) -> Result<BearingResult, OsmError> {
    let index = way.position_of(node_id).ok_or_else(|| {
        OsmError::InternalError(format!(
            "sign node {} is not part of way {}",
            node_id, way.osmid
        ))
    })?;
    let neighbor_index = if index > 0 { index - 1 } else { index + 1 };
    let neighbor_id = way.nodes.get(neighbor_index).ok_or_else(|| {
        OsmError::InternalError(format!(
            "way {} has no neighbor for sign node {}",
            way.osmid, node_id
        ))
    })?;
    let neighbor = graph.get_node_data(neighbor_id)?;
    let sign = graph.get_node_data(node_id)?;

    let angle = match direction {
        SignDirection::Forward => raw_angle(neighbor, sign),
        SignDirection::Backward => flip(raw_angle(neighbor, sign)),
    };
    Ok(BearingResult {
        node_id: *node_id,
        bearing_degrees: normalize(angle),
    })
}

/// angle in degrees of the vector from one node to another, measured as
/// `atan2(Δlon, Δlat)` on the raw coordinates. in the range (-180, 180].
pub fn raw_angle(from: &OsmNodeData, to: &OsmNodeData) -> f64 {
    (to.lon - from.lon).atan2(to.lat - from.lat).to_degrees()
}

/// turns an angle around by 180 degrees. the result lies in [0, 360).
pub fn flip(angle: f64) -> f64 {
    normalize(angle + 180.0)
}

/// maps any finite angle into [0, 360).
pub fn normalize(angle: f64) -> f64 {
    let result = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if result >= 360.0 {
        0.0
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::osm::graph::OsmWayId;
    use std::collections::HashMap;

    fn graph(coords: &[(i64, f64, f64)]) -> OsmGraph {
        let nodes = coords
            .iter()
            .map(|(id, lat, lon)| (OsmNodeId(*id), OsmNodeData::new(OsmNodeId(*id), *lat, *lon)))
            .collect::<HashMap<_, _>>();
        let way = OsmWayData::new(
            OsmWayId(10),
            coords.iter().map(|(id, _, _)| OsmNodeId(*id)).collect(),
        );
        OsmGraph::new(nodes, HashMap::from([(way.osmid, way)])).expect("valid graph")
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_north_bound_way() {
        let g = graph(&[(1, 0.0, 0.0), (2, 0.001, 0.0), (3, 0.002, 0.0)]);
        let way = g.way(&OsmWayId(10)).expect("way exists");
        let fwd = bearing(&g, way, &OsmNodeId(2), SignDirection::Forward).expect("bearing");
        let bwd = bearing(&g, way, &OsmNodeId(2), SignDirection::Backward).expect("bearing");
        assert!(approx_eq(fwd.bearing_degrees, 0.0));
        assert!(approx_eq(bwd.bearing_degrees, 180.0));
        assert_eq!(fwd.node_id, OsmNodeId(2));
    }

    #[test]
    fn test_west_bound_way_is_normalized() {
        // raw angle is -90
        let g = graph(&[(1, 0.0, 0.002), (2, 0.0, 0.001), (3, 0.0, 0.0)]);
        let way = g.way(&OsmWayId(10)).expect("way exists");
        let fwd = bearing(&g, way, &OsmNodeId(2), SignDirection::Forward).expect("bearing");
        let bwd = bearing(&g, way, &OsmNodeId(2), SignDirection::Backward).expect("bearing");
        assert!(approx_eq(fwd.bearing_degrees, 270.0));
        assert!(approx_eq(bwd.bearing_degrees, 90.0));
    }

    #[test]
    fn test_first_node_uses_following_neighbor() {
        // angle is measured from node 2 back to node 1, i.e. south
        let g = graph(&[(1, 0.0, 0.0), (2, 0.001, 0.0)]);
        let way = g.way(&OsmWayId(10)).expect("way exists");
        let result = bearing(&g, way, &OsmNodeId(1), SignDirection::Forward).expect("bearing");
        assert!(approx_eq(result.bearing_degrees, 180.0));
    }

    #[test]
    fn test_single_node_way_is_internal_error() {
        let g = graph(&[(1, 0.0, 0.0)]);
        let way = g.way(&OsmWayId(10)).expect("way exists");
        match bearing(&g, way, &OsmNodeId(1), SignDirection::Forward) {
            Err(OsmError::InternalError(_)) => {}
            other => panic!("expected InternalError, found {other:?}"),
        }
    }

    #[test]
    fn test_flip_twice_returns_original() {
        for angle in [0.0, 0.5, 45.0, 90.0, 179.9, 180.0, 270.25, 359.75] {
            let result = flip(flip(angle));
            assert!(approx_eq(result, angle), "{angle} became {result}");
        }
    }

    #[test]
    fn test_normalize_range() {
        for angle in [-720.0, -359.9, -180.0, -1e-14, 0.0, 180.0, 359.999, 360.0, 725.0] {
            let result = normalize(angle);
            assert!((0.0..360.0).contains(&result), "{angle} became {result}");
        }
        assert!(approx_eq(normalize(-90.0), 270.0));
    }
}
