use super::{output_ops, CooperativeWork, PreviewConfig, TaskEmitter};
use crate::model::{feature::SignBearing, osm::OsmError};
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// ASCII record separator, starts each task of a line-by-line challenge file
pub const RECORD_SEPARATOR: u8 = 0x1E;

/// writes a MapRoulette challenge in the line-by-line GeoJSON format: one
/// `FeatureCollection` per task, each prefixed by [`RECORD_SEPARATOR`] and
/// terminated by a newline. every task proposes the inferred `direction` tag
/// for one sign node as a cooperative tag fix.
pub struct MapRouletteChallengeWriter<W: Write> {
    writer: W,
    name: String,
    preview: PreviewConfig,
    n_tasks: usize,
}

impl MapRouletteChallengeWriter<BufWriter<File>> {
    /// opens `challenge.geojson` in `directory`. returns `None` if the file
    /// exists and `overwrite` is false.
    pub fn create(
        directory: &Path,
        preview: PreviewConfig,
        overwrite: bool,
    ) -> Result<Option<Self>, OsmError> {
        let filename = output_ops::filenames::CHALLENGE;
        let writer = output_ops::create_file(directory, filename, overwrite)?.map(|file| {
            let name = directory.join(filename).to_string_lossy().to_string();
            MapRouletteChallengeWriter::new(BufWriter::new(file), name, preview)
        });
        Ok(writer)
    }
}

impl<W: Write> MapRouletteChallengeWriter<W> {
    pub fn new(writer: W, name: String, preview: PreviewConfig) -> Self {
        Self {
            writer,
            name,
            preview,
            n_tasks: 0,
        }
    }

    pub fn n_tasks(&self) -> usize {
        self.n_tasks
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// builds the task for one sign: a point feature at the sign carrying the
    /// reviewer instructions, plus the proposed tag fix.
    pub fn task(&self, sign: &SignBearing) -> Result<FeatureCollection, OsmError> {
        let element_ref = sign.node_id.element_ref();

        let mut properties = JsonObject::new();
        properties.insert(String::from("@id"), JsonValue::from(element_ref.clone()));
        properties.insert(
            String::from("task_instruction"),
            JsonValue::from(task_instruction(sign, &self.preview.url(sign))),
        );
        let point = geo::Point::new(sign.lon, sign.lat);
        let feature = Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&geo::Geometry::Point(point))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        };

        let fix = CooperativeWork::tag_fix(
            element_ref,
            BTreeMap::from([(String::from("direction"), sign.direction.to_string())]),
            vec![],
        );
        let fix_json = serde_json::to_value(fix)
            .map_err(|e| OsmError::JsonWriteError(self.name.clone(), e))?;
        let mut foreign_members = JsonObject::new();
        foreign_members.insert(String::from("cooperativeWork"), fix_json);

        Ok(FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: Some(foreign_members),
        })
    }
}

impl<W: Write> TaskEmitter for MapRouletteChallengeWriter<W> {
    fn emit(&mut self, sign: &SignBearing) -> Result<(), OsmError> {
        let task = self.task(sign)?;
        self.writer
            .write_all(&[RECORD_SEPARATOR])
            .map_err(|e| OsmError::WriteError(self.name.clone(), e))?;
        serde_json::to_writer(&mut self.writer, &task)
            .map_err(|e| OsmError::JsonWriteError(self.name.clone(), e))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| OsmError::WriteError(self.name.clone(), e))?;
        self.n_tasks += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), OsmError> {
        self.writer
            .flush()
            .map_err(|e| OsmError::WriteError(self.name.clone(), e))?;
        log::info!("wrote {} challenge tasks to {}", self.n_tasks, self.name);
        Ok(())
    }
}

/// markdown instructions shown to the reviewer
fn task_instruction(sign: &SignBearing, image_url: &str) -> String {
    format!(
        "(Expand this field to see the visualization!)\n\
        ![]({image_url})\n\
        Is the direction correct?\n\n\
        This {} has no information about which way it faces relative to the direction of the way it is placed on.\n\
        A simple algorithm estimated a likely value.\n\
        The proposed value is: `direction={}`.\n\
        It is visualized in the image shown.\n\
        Please check whether the direction is correct (and feel free to check whether the location of the sign makes sense too!)\n\
        - If it is, click \"YES\".\n\
        - Otherwise\n   \
          - click \"NO\",\n   \
          - or adjust the direction and then click \"YES\"\n\
        - or click \"SKIP\" if you are unsure and someone else should check it.\n",
        sign.kind.description(),
        sign.direction
    )
}
