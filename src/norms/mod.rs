//! Normalization modes for real and permutation scores.
//!
//! The set of modes is closed: [`NormMode::ALL`] is the registry and every dispatch
//! is an exhaustive match. Names are only resolved at the string boundary
//! ([`NormMode::from_name`], [`create`], serde).

pub mod meandiv;
pub mod stats;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use meandiv::PartitionStats;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown norm mode: {0}")]
    UnknownStrategy(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NormMode {
    /// Identity.
    None,
    /// Mean division with positive and non-positive permutation scores handled separately.
    #[default]
    MeanDivPosNegSeparate,
}

impl NormMode {
    pub const ALL: [NormMode; 2] = [NormMode::None, NormMode::MeanDivPosNegSeparate];

    pub const fn name(self) -> &'static str {
        match self {
            NormMode::None => "None",
            NormMode::MeanDivPosNegSeparate => "meandiv",
        }
    }

    /// Registered names in registry order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.name()).collect()
    }

    pub fn from_name(name: &str) -> Result<Self, NormError> {
        if name.trim().is_empty() {
            return Err(NormError::InvalidArgument(
                "norm mode name cannot be empty".to_string(),
            ));
        }
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| NormError::UnknownStrategy(name.to_string()))
    }

    pub fn apply(self, real: f64, rnd: &[f64]) -> Norm {
        match self {
            NormMode::None => Norm {
                mode: self,
                result: NormResult {
                    real,
                    rnd: rnd.to_vec(),
                },
                stats: None,
            },
            NormMode::MeanDivPosNegSeparate => {
                let (result, stats) = meandiv::normalize(real, rnd);
                Norm {
                    mode: self,
                    result,
                    stats: Some(stats),
                }
            }
        }
    }
}

impl fmt::Display for NormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormMode {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for NormMode {
    type Error = NormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<NormMode> for String {
    fn from(value: NormMode) -> Self {
        value.name().to_string()
    }
}

/// Normalized real score and permutation row of one item.
#[derive(Debug, Clone, PartialEq)]
pub struct NormResult {
    pub real: f64,
    pub rnd: Vec<f64>,
}

/// Outcome of applying one mode to one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Norm {
    pub mode: NormMode,
    pub result: NormResult,
    pub stats: Option<PartitionStats>,
}

impl Norm {
    pub fn real_norm(&self) -> f64 {
        self.result.real
    }

    pub fn random_norm(&self) -> &[f64] {
        &self.result.rnd
    }

    pub fn into_result(self) -> NormResult {
        self.result
    }
}

/// Resolve `name` and normalize one item with it.
pub fn create(name: &str, real: f64, rnd: &[f64]) -> Result<Norm, NormError> {
    NormMode::from_name(name).map(|mode| mode.apply(real, rnd))
}

#[cfg(test)]
#[path = "../../tests/src_inline/norms/mod.rs"]
mod tests;
