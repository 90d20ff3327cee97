use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// body of an Overpass API response in JSON format (`[out:json]`). only the
/// `elements` array is read, metadata such as `osm3s` and `generator` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// a single record from the `elements` array, discriminated by its `type` field.
/// relations and any other element types are retained as [`OverpassElement::Other`]
/// so they can be counted and skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum OverpassElement {
    Node(OverpassNode),
    Way(OverpassWay),
    #[serde(other)]
    Other,
}

/// an OSM node as returned by `out body;`. coordinates are optional here so that
/// missing values can be reported as malformed data instead of a decoding failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassNode {
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// an OSM way as returned by `out body;`, listing its node ids in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassWay {
    pub id: i64,
    #[serde(default)]
    pub nodes: Vec<i64>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::{OverpassElement, OverpassResponse};

    #[test]
    fn test_decode_elements() {
        let json = r#"{
            "version": 0.6,
            "generator": "Overpass API",
            "elements": [
                {"type": "node", "id": 1, "lat": 52.5, "lon": 13.4, "tags": {"highway": "stop"}},
                {"type": "node", "id": 2, "lat": 52.6, "lon": 13.5},
                {"type": "way", "id": 10, "nodes": [1, 2], "tags": {"highway": "residential"}},
                {"type": "relation", "id": 100, "members": []}
            ]
        }"#;
        let response: OverpassResponse = serde_json::from_str(json).expect("valid json");
        assert_eq!(response.elements.len(), 4);
        match &response.elements[0] {
            OverpassElement::Node(n) => {
                assert_eq!(n.id, 1);
                assert_eq!(n.tags.get("highway").map(String::as_str), Some("stop"));
            }
            other => panic!("expected node, found {other:?}"),
        }
        match &response.elements[1] {
            OverpassElement::Node(n) => assert!(n.tags.is_empty()),
            other => panic!("expected node, found {other:?}"),
        }
        match &response.elements[2] {
            OverpassElement::Way(w) => assert_eq!(w.nodes, vec![1, 2]),
            other => panic!("expected way, found {other:?}"),
        }
        assert!(matches!(response.elements[3], OverpassElement::Other));
    }

    #[test]
    fn test_decode_node_without_coordinates() {
        let json = r#"{"elements": [{"type": "node", "id": 5}]}"#;
        let response: OverpassResponse = serde_json::from_str(json).expect("valid json");
        match &response.elements[0] {
            OverpassElement::Node(n) => assert!(n.lat.is_none() && n.lon.is_none()),
            other => panic!("expected node, found {other:?}"),
        }
    }
}
