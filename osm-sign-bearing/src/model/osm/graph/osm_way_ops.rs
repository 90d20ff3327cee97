use crate::model::osm::{
    graph::{OsmGraph, OsmNodeId},
    OsmError,
};
use geo::{line_measures::LengthMeasurable, Coord, HaversineMeasure, Length, LineString};

/// mean earth radius used for all great-circle distances
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// haversine metric on a sphere of [`EARTH_RADIUS_METERS`]
pub const EARTH: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS_METERS);

/// sum of haversine distances between consecutive coordinates (x=longitude,
/// y=latitude). empty and single-point linestrings have zero length.
pub fn haversine_length(linestring: &LineString<f64>) -> uom::si::f64::Length {
    let meters = EARTH.length(linestring);
    uom::si::f64::Length::new::<uom::si::length::meter>(meters)
}

/// length of the path traced by a run of node ids. the nodes must exist
/// in the graph.
pub fn path_length(
    node_ids: &[OsmNodeId],
    graph: &OsmGraph,
) -> Result<uom::si::f64::Length, OsmError> {
    let coords = node_ids
        .iter()
        .map(|id| {
            let node = graph.get_node_data(id)?;
            Ok(Coord::from((node.lon, node.lat)))
        })
        .collect::<Result<Vec<_>, OsmError>>()?;
    Ok(haversine_length(&LineString(coords)))
}

/// splits a node sequence at the first occurrence of `node_id` into the
/// nodes strictly before it and the nodes strictly after it.
pub fn split_at_node<'a>(
    node_id: &OsmNodeId,
    nodes: &'a [OsmNodeId],
) -> Option<(&'a [OsmNodeId], &'a [OsmNodeId])> {
    let index = nodes.iter().position(|n| n == node_id)?;
    Some((&nodes[..index], &nodes[index + 1..]))
}
