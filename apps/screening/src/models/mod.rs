pub mod document;
pub mod job;
pub mod profile;
pub mod score;

pub use document::{DocumentFormat, RawDocument};
pub use job::JobRequirements;
pub use profile::CandidateProfile;
pub use score::{MatchCategory, ScoreBreakdown};
