pub mod sign_bearing;
