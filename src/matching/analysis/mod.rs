pub mod name_score;
pub mod normalizer;
pub mod reference_score;
pub mod similarity;

pub use name_score::{score_name, NameScore};
pub use reference_score::{score_reference, ReferenceScore, REFERENCE_PARTIAL_CUTOFF};
