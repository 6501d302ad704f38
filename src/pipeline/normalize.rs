use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::NormParams;
use crate::model::{LabeledScoreVector, ModelError, ScoreTable};
use crate::norms::{NormError, NormMode, NormResult};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Norm(#[from] NormError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("missing row: {0} not found in score table")]
    MissingRow(String),
}

/// Normalized real scores and permutation table. Row `i` of `table` belongs to
/// label `i` of `real`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationOutcome {
    pub real: LabeledScoreVector,
    pub table: ScoreTable,
}

impl NormalizationOutcome {
    pub fn n_rows(&self) -> usize {
        self.real.len()
    }

    /// Items whose normalized real score is NaN or infinite. Downstream p-value and
    /// FDR estimation is expected to skip them.
    pub fn non_finite_labels(&self) -> Vec<&str> {
        self.real
            .iter()
            .filter(|(_, v)| !v.is_finite())
            .map(|(label, _)| label)
            .collect()
    }
}

/// Normalize every item of `real` with the mode registered under `mode_name`.
pub fn normalize(
    mode_name: &str,
    real: &LabeledScoreVector,
    table: &ScoreTable,
) -> Result<NormalizationOutcome, PipelineError> {
    let mode = NormMode::from_name(mode_name)?;
    normalize_with(real, table, &NormParams::with_mode(mode))
}

/// Rows are picked from `table` by label in the order of `real`; extra table rows
/// are ignored. Columns and annotation of `table` are carried over unchanged.
pub fn normalize_with(
    real: &LabeledScoreVector,
    table: &ScoreTable,
    params: &NormParams,
) -> Result<NormalizationOutcome, PipelineError> {
    debug!(
        mode = %params.mode,
        n_items = real.len(),
        n_table_rows = table.n_rows(),
        n_cols = table.n_cols(),
        parallel = params.parallel,
        "normalizing {} against {}",
        real.name(),
        table.name()
    );

    let rows = real
        .labels()
        .iter()
        .map(|label| {
            table
                .row(label)
                .ok_or_else(|| PipelineError::MissingRow(label.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mode = params.mode;
    let results: Vec<NormResult> = if params.parallel {
        real.values()
            .par_iter()
            .zip(rows.par_iter())
            .map(|(&score, row)| mode.apply(score, row).into_result())
            .collect()
    } else {
        real.values()
            .iter()
            .zip(&rows)
            .map(|(&score, row)| mode.apply(score, row).into_result())
            .collect()
    };

    let mut real_norm = Vec::with_capacity(results.len());
    let mut rows_norm = Vec::with_capacity(results.len());
    for result in results {
        real_norm.push(result.real);
        rows_norm.push(result.rnd);
    }

    let labels = real.labels().to_vec();
    let out_real = LabeledScoreVector::new(
        format!("{}{}", real.name(), params.suffix),
        labels.clone(),
        real_norm,
    )?;
    let out_table = ScoreTable::new(
        params.table_name.clone(),
        labels,
        table.column_names().to_vec(),
        rows_norm,
        table.annotation().clone(),
    )?;

    let outcome = NormalizationOutcome {
        real: out_real,
        table: out_table,
    };
    let non_finite = outcome.non_finite_labels().len();
    if non_finite > 0 {
        info!(
            mode = %mode,
            "{non_finite} of {} items have a non-finite normalized score",
            outcome.n_rows()
        );
    }
    Ok(outcome)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/normalize.rs"]
mod tests;
