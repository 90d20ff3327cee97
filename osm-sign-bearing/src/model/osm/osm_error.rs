use thiserror::Error;

use super::graph::{OsmNodeId, OsmWayId};

#[derive(Error, Debug)]
pub enum OsmError {
    #[error("structure of OSM extract is invalid: {0}")]
    MalformedData(String),
    #[error("attempting to get node '{0}' not in graph")]
    GraphMissingNodeId(OsmNodeId),
    #[error("attempting to get way '{0}' not in graph")]
    GraphMissingWayId(OsmWayId),
    #[error("failure reading {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure writing to file {0}: {1}")]
    WriteError(String, std::io::Error),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure encoding record for file {0}: {1}")]
    JsonWriteError(String, serde_json::Error),
    #[error("{0}")]
    InternalError(String),
}
