use super::{
    graph::{OsmNodeData, OsmNodes, OsmWayData, OsmWays},
    overpass::{OverpassElement, OverpassResponse},
    OsmError,
};
use kdam::tqdm;
use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

/// reads an Overpass JSON extract from disk and stores the Ways and Nodes in
/// lookup objects. see [`read_elements`] for the validation rules.
pub fn read_overpass_json(filepath: &str) -> Result<(OsmNodes, OsmWays), OsmError> {
    let fp = Path::new(filepath);
    let file = File::open(fp).map_err(|e| OsmError::ReadError(String::from(filepath), e))?;
    let response: OverpassResponse = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| {
            OsmError::MalformedData(format!("unable to decode Overpass JSON in {filepath}: {e}"))
        })?;
    read_elements(response.elements)
}

/// sorts raw extract elements into node and way lookups.
///
/// - nodes without coordinates fail the import with [`OsmError::MalformedData`]
/// - elements that are neither nodes nor ways (relations, areas) are skipped
/// - when an OSMID occurs more than once, the later record replaces the earlier one
pub fn read_elements(elements: Vec<OverpassElement>) -> Result<(OsmNodes, OsmWays), OsmError> {
    let mut nodes_map: OsmNodes = HashMap::default();
    let mut ways_map: OsmWays = HashMap::default();
    let mut skipped: usize = 0;

    let total = elements.len();
    let iter = tqdm!(
        elements.into_iter(),
        desc = "read extract elements",
        total = total
    );
    for element in iter {
        match element {
            OverpassElement::Node(node) => {
                let n = OsmNodeData::try_from(node)?;
                if nodes_map.contains_key(&n.osmid) {
                    log::warn!(
                        "node with OSMID {} occurs more than once in this extract",
                        n.osmid
                    );
                }
                nodes_map.insert(n.osmid, n);
            }
            OverpassElement::Way(way) => {
                let w = OsmWayData::from(way);
                if ways_map.contains_key(&w.osmid) {
                    log::warn!(
                        "way with OSMID {} occurs more than once in this extract",
                        w.osmid
                    );
                }
                ways_map.insert(w.osmid, w);
            }
            OverpassElement::Other => skipped += 1,
        }
    }
    eprintln!();

    if skipped > 0 {
        log::debug!("skipped {skipped} extract elements that are neither nodes nor ways");
    }
    if nodes_map.is_empty() || ways_map.is_empty() {
        log::warn!(
            "extract contains {} nodes and {} ways, no signs can be processed",
            nodes_map.len(),
            ways_map.len()
        );
    }
    Ok((nodes_map, ways_map))
}
