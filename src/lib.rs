//! Normalization of GSEA-style real and permutation scores.
//!
//! Positive and negative permutation populations are rescaled separately so that
//! scores of items with very different raw scales become comparable before
//! significance estimation.

pub mod config;
pub mod logging;
pub mod model;
pub mod norms;
pub mod pipeline;

pub use config::{ConfigError, NormParams};
pub use model::{Annotation, LabeledScoreVector, ModelError, ScoreTable};
pub use norms::{Norm, NormError, NormMode, NormResult, PartitionStats, create};
pub use pipeline::normalize::{NormalizationOutcome, PipelineError, normalize, normalize_with};
