use std::collections::HashMap;

use crate::model::ModelError;

/// Ordered `(label, score)` pairs. Row order of every downstream output follows this order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledScoreVector {
    name: String,
    labels: Vec<String>,
    values: Vec<f64>,
    index: HashMap<String, usize>,
}

impl LabeledScoreVector {
    pub fn new(
        name: impl Into<String>,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if labels.len() != values.len() {
            return Err(ModelError::InvalidArgument(format!(
                "vector {name}: {} labels but {} values",
                labels.len(),
                values.len()
            )));
        }
        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(ModelError::InvalidArgument(format!(
                    "vector {name}: duplicate label {label}"
                )));
            }
        }
        Ok(Self {
            name,
            labels,
            values,
            index,
        })
    }

    pub fn from_pairs<I, S>(name: impl Into<String>, pairs: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let (labels, values): (Vec<String>, Vec<f64>) =
            pairs.into_iter().map(|(l, v)| (l.into(), v)).unzip();
        Self::new(name, labels, values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.labels.get(idx).map(String::as_str)
    }

    pub fn score(&self, label: &str) -> Option<f64> {
        self.index.get(label).map(|&i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/vector.rs"]
mod tests;
