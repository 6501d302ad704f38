use crate::norms::NormResult;
use crate::norms::stats::{mean, sample_sd};

/// Sign test shared by the partition and the divisor dispatch. Zero and NaN are
/// not positive, so they are routed to the negative side.
#[inline]
pub fn is_positive(x: f64) -> bool {
    x > 0.0
}

/// Per-item diagnostics of the pos/neg mean division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionStats {
    pub n_pos: usize,
    pub n_neg: usize,
    pub mean_pos: f64,
    pub sd_pos: f64,
    pub mean_neg: f64,
    pub sd_neg: f64,
}

impl PartitionStats {
    /// Divisor applied to `x`: the positive mean for positive values, otherwise the
    /// magnitude of the negative mean.
    #[inline]
    pub fn divisor_for(&self, x: f64) -> f64 {
        if is_positive(x) {
            self.mean_pos
        } else {
            self.mean_neg.abs()
        }
    }

    /// True when a partition is empty or averages to zero, so that values routed
    /// to it normalize to NaN or Infinity.
    pub fn is_degenerate(&self) -> bool {
        let pos = self.mean_pos;
        let neg = self.mean_neg;
        !(pos.is_finite() && neg.is_finite() && pos != 0.0 && neg != 0.0)
    }
}

/// Divide positive permutation scores by the mean of the positive ones and the
/// non-positive scores by |mean| of the non-positive ones; the real score follows
/// its own sign. Degenerate partitions yield NaN/Infinity, never an error.
pub fn normalize(real: f64, rnd: &[f64]) -> (NormResult, PartitionStats) {
    let (only_pos, only_neg): (Vec<f64>, Vec<f64>) =
        rnd.iter().copied().partition(|&x| is_positive(x));

    let mut stats = PartitionStats {
        n_pos: 0,
        n_neg: 0,
        mean_pos: mean(&only_pos),
        sd_pos: sample_sd(&only_pos),
        mean_neg: mean(&only_neg),
        sd_neg: sample_sd(&only_neg),
    };

    let mut rnd_norm = Vec::with_capacity(rnd.len());
    for &orig in rnd {
        if is_positive(orig) {
            stats.n_pos += 1;
        } else {
            stats.n_neg += 1;
        }
        rnd_norm.push(orig / stats.divisor_for(orig));
    }

    let real_norm = real / stats.divisor_for(real);

    if stats.is_degenerate() {
        tracing::trace!(
            n_pos = stats.n_pos,
            n_neg = stats.n_neg,
            mean_pos = stats.mean_pos,
            mean_neg = stats.mean_neg,
            "degenerate permutation partition"
        );
    }

    (
        NormResult {
            real: real_norm,
            rnd: rnd_norm,
        },
        stats,
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/norms/meandiv.rs"]
mod tests;
