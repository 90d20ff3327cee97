use super::OsmError;
use crate::model::osm::{
    graph::OsmGraph,
    import_ops,
    overpass::{OverpassElement, OverpassResponse},
};
use serde::{Deserialize, Serialize};

/// where a batch run reads its map-data extract from. the extract must already
/// be present locally; downloading it from the Overpass API happens out of band.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum OsmSource {
    /// a file holding an Overpass API response in `[out:json]` format
    OverpassJson { extract_filepath: String },
    /// an already decoded set of Overpass elements
    Elements { elements: Vec<OverpassElement> },
}

impl OsmSource {
    /// loads the extract and builds the read-only [`OsmGraph`] for this batch.
    pub fn import(&self) -> Result<OsmGraph, OsmError> {
        log::info!("  (((1))) reading extract");
        let (nodes, ways) = match self {
            OsmSource::OverpassJson { extract_filepath } => {
                import_ops::read_overpass_json(extract_filepath)?
            }
            OsmSource::Elements { elements } => import_ops::read_elements(elements.clone())?,
        };

        log::info!("  (((2))) building graph");
        let graph = OsmGraph::new(nodes, ways)?;
        log::info!(
            "loaded extract graph with {} nodes, {} ways",
            graph.n_nodes(),
            graph.n_ways()
        );
        Ok(graph)
    }
}

impl From<OverpassResponse> for OsmSource {
    fn from(response: OverpassResponse) -> Self {
        OsmSource::Elements {
            elements: response.elements,
        }
    }
}
