mod sign_bearing_ops;

pub use sign_bearing_ops::{process_signs, process_way, write_tasks};
