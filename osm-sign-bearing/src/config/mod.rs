mod overpass_config;
mod sign_bearing_config;

pub use overpass_config::OverpassConfig;
pub use sign_bearing_config::{SignBearingConfiguration, ENV_PREFIX};
