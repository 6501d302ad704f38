pub mod table;
pub mod vector;

pub use table::{Annotation, ScoreTable};
pub use vector::LabeledScoreVector;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
