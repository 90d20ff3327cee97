mod challenge_writer;
mod cooperative_work;
mod csv_writer;
pub mod output_ops;
mod preview_config;
mod task_emitter;

pub use challenge_writer::{MapRouletteChallengeWriter, RECORD_SEPARATOR};
pub use cooperative_work::{CooperativeWork, ElementChange, ElementOperation, TagOperation};
pub use csv_writer::SignBearingCsvWriter;
pub use preview_config::PreviewConfig;
pub use task_emitter::TaskEmitter;
