use crate::model::{feature::SignBearing, osm::OsmError};

/// consumes inferred sign bearings and turns them into an artifact a human
/// reviewer can work through.
///
/// signs are emitted in batch output order. `finish` is called once after the
/// last sign and must leave the artifact complete on disk (or in its writer).
pub trait TaskEmitter {
    fn emit(&mut self, sign: &SignBearing) -> Result<(), OsmError>;

    fn finish(&mut self) -> Result<(), OsmError>;

    /// emits each sign in order and then finishes the artifact
    fn emit_all(&mut self, signs: &[SignBearing]) -> Result<(), OsmError> {
        for sign in signs.iter() {
            self.emit(sign)?;
        }
        self.finish()
    }
}
