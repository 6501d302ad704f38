use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::ModelError;

/// Free-form table metadata. Never interpreted, only carried from input to output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotation(pub BTreeMap<String, String>);

impl Annotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Label-keyed matrix of permutation scores, one row per tested item and one column
/// per permutation. May hold more rows than a given normalization pass needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    name: String,
    row_labels: Vec<String>,
    column_names: Vec<String>,
    rows: Vec<Vec<f64>>,
    annotation: Annotation,
    index: HashMap<String, usize>,
}

impl ScoreTable {
    pub fn new(
        name: impl Into<String>,
        row_labels: Vec<String>,
        column_names: Vec<String>,
        rows: Vec<Vec<f64>>,
        annotation: Annotation,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if row_labels.len() != rows.len() {
            return Err(ModelError::InvalidArgument(format!(
                "table {name}: {} row labels but {} rows",
                row_labels.len(),
                rows.len()
            )));
        }
        let n_cols = column_names.len();
        let mut index = HashMap::with_capacity(row_labels.len());
        for (i, (label, row)) in row_labels.iter().zip(&rows).enumerate() {
            if row.len() != n_cols {
                return Err(ModelError::InvalidArgument(format!(
                    "table {name}: row {label} has {} values, expected {n_cols}",
                    row.len()
                )));
            }
            if index.insert(label.clone(), i).is_some() {
                return Err(ModelError::InvalidArgument(format!(
                    "table {name}: duplicate row label {label}"
                )));
            }
        }
        Ok(Self {
            name,
            row_labels,
            column_names,
            rows,
            annotation,
            index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.column_names.len()
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn row(&self, label: &str) -> Option<&[f64]> {
        self.index.get(label).map(|&i| self.rows[i].as_slice())
    }

    pub fn row_at(&self, idx: usize) -> Option<&[f64]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    pub fn row_label(&self, idx: usize) -> Option<&str> {
        self.row_labels.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
