mod bearing_ops;
mod bearing_result;

pub use bearing_ops::{bearing, flip, normalize, raw_angle};
pub use bearing_result::BearingResult;
