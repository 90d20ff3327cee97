use crate::model::osm::graph::OsmWayData;

/// decides whether a way can carry an inferred sign direction.
///
/// - ways without a `highway` tag are not roads and are rejected
/// - one way roads (`oneway=yes`, `oneway=-1`) are rejected, unless they carry a
///   counter-flow exception such as `oneway:bicycle=no`
///
/// # Returns
///
/// true if signs on this way should be considered
pub fn is_eligible(way: &OsmWayData) -> bool {
    // ["highway"]
    if way.highway().is_none() {
        log::debug!("way {} rejected: no 'highway' tag", way.osmid);
        return false;
    }
    // ["oneway"~"yes|-1"], unless ["oneway:*"="no"]
    if way.is_one_way() && !way.has_counter_flow_exception() {
        log::debug!(
            "way {} rejected: one way without counter-flow exception",
            way.osmid
        );
        return false;
    }
    true
}
