pub mod feature;
pub mod osm;
mod sign_cli_error;
pub mod task;

pub use sign_cli_error::SignCliError;
