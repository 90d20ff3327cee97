mod sign_bearing;
mod sign_kind;

pub use sign_bearing::SignBearing;
pub use sign_kind::SignKind;
