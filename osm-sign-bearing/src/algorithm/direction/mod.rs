mod direction_estimator;
mod sign_direction;
mod way_evidence;

pub use direction_estimator::{collect_evidence, estimate};
pub use sign_direction::{DirectionResult, SignDirection};
pub use way_evidence::{by_intersections, by_position, WayEvidence};
