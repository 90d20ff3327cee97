mod candidate_ops;
mod sign_candidate;

pub use candidate_ops::candidates;
pub use sign_candidate::SignCandidate;
