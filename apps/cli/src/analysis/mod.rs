pub mod education;
pub mod state_score;

pub use education::EducationDistribution;
pub use state_score::{StateAttractivenessScorer, StateScores};
