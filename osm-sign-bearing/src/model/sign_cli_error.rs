use super::osm::OsmError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure inferring sign bearings: {source}")]
    OsmError {
        #[from]
        source: OsmError,
    },
}
