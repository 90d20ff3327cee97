pub mod bearing;
pub mod candidates;
pub mod direction;
pub mod way_filter;
