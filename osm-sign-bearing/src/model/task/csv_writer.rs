use super::{output_ops, TaskEmitter};
use crate::model::{feature::SignBearing, osm::OsmError};
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use std::{fs::File, path::Path};

/// writes one row per sign bearing to a gzip-compressed CSV file. the
/// columns follow the field order of [`SignBearing`].
pub struct SignBearingCsvWriter {
    writer: Option<csv::Writer<GzEncoder<File>>>,
    filepath: String,
    n_rows: usize,
}

impl SignBearingCsvWriter {
    /// opens `sign-bearings.csv.gz` in `directory`. returns `None` if the file
    /// exists and `overwrite` is false.
    pub fn create(directory: &Path, overwrite: bool) -> Result<Option<Self>, OsmError> {
        let filename = output_ops::filenames::SIGN_BEARINGS;
        let writer = create_writer(directory, filename, true, QuoteStyle::Necessary, overwrite)?
            .map(|writer| SignBearingCsvWriter {
                writer: Some(writer),
                filepath: directory.join(filename).to_string_lossy().to_string(),
                n_rows: 0,
            });
        Ok(writer)
    }
}

impl TaskEmitter for SignBearingCsvWriter {
    fn emit(&mut self, sign: &SignBearing) -> Result<(), OsmError> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            OsmError::InternalError(format!(
                "attempting to write to {} after it was finished",
                self.filepath
            ))
        })?;
        writer
            .serialize(sign)
            .map_err(|e| OsmError::CsvWriteError(self.filepath.clone(), e))?;
        self.n_rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), OsmError> {
        if let Some(writer) = self.writer.take() {
            let encoder = writer
                .into_inner()
                .map_err(|e| OsmError::WriteError(self.filepath.clone(), e.into_error()))?;
            encoder
                .finish()
                .map_err(|e| OsmError::WriteError(self.filepath.clone(), e))?;
            log::info!("wrote {} sign bearings to {}", self.n_rows, self.filepath);
        }
        Ok(())
    }
}

fn create_writer(
    directory: &Path,
    filename: &str,
    has_headers: bool,
    quote_style: QuoteStyle,
    overwrite: bool,
) -> Result<Option<csv::Writer<GzEncoder<File>>>, OsmError> {
    let writer = output_ops::create_file(directory, filename, overwrite)?.map(|file| {
        let buffer = GzEncoder::new(file, Compression::default());
        csv::WriterBuilder::new()
            .has_headers(has_headers)
            .quote_style(quote_style)
            .from_writer(buffer)
    });
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::SignBearingCsvWriter;
    use crate::{
        algorithm::direction::SignDirection,
        model::{
            feature::{SignBearing, SignKind},
            osm::graph::{OsmNodeId, OsmWayId},
            task::{output_ops::filenames, TaskEmitter},
        },
    };
    use flate2::read::GzDecoder;
    use std::{fs::File, path::Path};

    fn signs() -> Vec<SignBearing> {
        vec![
            SignBearing {
                node_id: OsmNodeId(2),
                kind: SignKind::GiveWay,
                way_id: OsmWayId(100),
                bearing_degrees: 180.0,
                direction: SignDirection::Backward,
                lat: 52.501,
                lon: 13.4,
            },
            SignBearing {
                node_id: OsmNodeId(7),
                kind: SignKind::Stop,
                way_id: OsmWayId(101),
                bearing_degrees: 0.0,
                direction: SignDirection::Forward,
                lat: 52.5011,
                lon: 13.401,
            },
        ]
    }

    fn read_rows(directory: &Path) -> Vec<csv::StringRecord> {
        let file = File::open(directory.join(filenames::SIGN_BEARINGS)).expect("file exists");
        let mut reader = csv::Reader::from_reader(GzDecoder::new(file));
        let headers = reader.headers().expect("has headers").clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["node_id", "kind", "way_id", "bearing_degrees", "direction", "lat", "lon"]
        );
        reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .expect("valid rows")
    }

    #[test]
    fn test_write_rows() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut writer = SignBearingCsvWriter::create(dir.path(), false)
            .expect("created")
            .expect("new file is writable");
        writer.emit_all(&signs()).expect("written");

        let rows = read_rows(dir.path());
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "2");
        assert_eq!(&rows[0][1], "give_way");
        assert_eq!(&rows[0][4], "backward");
        assert_eq!(&rows[1][2], "101");
        assert_eq!(&rows[1][1], "stop");
    }

    #[test]
    fn test_existing_output_is_kept() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut writer = SignBearingCsvWriter::create(dir.path(), false)
            .expect("created")
            .expect("new file is writable");
        writer.emit_all(&signs()).expect("written");

        assert!(SignBearingCsvWriter::create(dir.path(), false)
            .expect("no failure")
            .is_none());
        assert_eq!(read_rows(dir.path()).len(), 2);
    }

    #[test]
    fn test_emit_after_finish_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut writer = SignBearingCsvWriter::create(dir.path(), true)
            .expect("created")
            .expect("writable");
        writer.finish().expect("finished");
        assert!(writer.emit(&signs()[0]).is_err());
    }
}
