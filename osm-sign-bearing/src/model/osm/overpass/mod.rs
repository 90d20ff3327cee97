mod overpass_element;
mod overpass_query;

pub use overpass_element::{OverpassElement, OverpassNode, OverpassResponse, OverpassWay};
pub use overpass_query::OverpassQuery;
