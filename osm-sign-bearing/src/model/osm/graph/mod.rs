pub mod osm_graph;
pub mod osm_node_data;
mod osm_node_id;
pub mod osm_way_data;
mod osm_way_id;
pub mod osm_way_ops;

pub use osm_graph::OsmGraph;
pub use osm_node_data::OsmNodeData;
pub use osm_node_id::OsmNodeId;
pub use osm_way_data::OsmWayData;
pub use osm_way_id::OsmWayId;
use std::collections::HashMap;

// type aliases for the OSMID-keyed lookups held by the graph
pub type OsmNodes = HashMap<OsmNodeId, OsmNodeData>;
pub type OsmWays = HashMap<OsmWayId, OsmWayData>;
pub type WayMembership = HashMap<OsmNodeId, usize>;
