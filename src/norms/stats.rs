//! Plain summary statistics over score slices. Empty input is not an error: the
//! result is NaN and flows through to the caller.

pub fn sum(values: &[f64]) -> f64 {
    let mut sum = 0f64;
    for &v in values {
        sum += v;
    }
    sum
}

/// Arithmetic mean; `0/0 = NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator). NaN when fewer than two values.
pub fn sample_sd(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let mut ss = 0f64;
    for &v in values {
        let d = v - m;
        ss += d * d;
    }
    (ss / (values.len() - 1) as f64).sqrt()
}

#[cfg(test)]
#[path = "../../tests/src_inline/norms/stats.rs"]
mod tests;
