use crate::model::osm::OsmError;
use std::{fs::File, path::Path};

pub mod filenames {
    pub const CHALLENGE: &str = "challenge.geojson";
    pub const SIGN_BEARINGS: &str = "sign-bearings.csv.gz";
}

/// creates the output file `filename` in `directory`. when the file already
/// exists and `overwrite` is not set, it is left untouched and `None` is returned.
pub fn create_file(
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<Option<File>, OsmError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        log::warn!(
            "{} already exists and overwrite is not enabled, skipping",
            filepath.to_string_lossy()
        );
        return Ok(None);
    }
    let file = File::create(&filepath)
        .map_err(|e| OsmError::WriteError(filepath.to_string_lossy().to_string(), e))?;
    Ok(Some(file))
}

/// creates `directory` and its parents if they do not exist yet
pub fn ensure_directory(directory: &Path) -> Result<(), OsmError> {
    if directory.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(directory).map_err(|e| {
        OsmError::WriteError(directory.as_os_str().to_string_lossy().to_string(), e)
    })
}
