//! Single-channel signal containers.
//!
//! `Signal` pairs a sample index with values; `Frame` holds one index and any
//! number of named columns. Both enforce equal index/value lengths at
//! construction so downstream code never has to re-check.

use crate::error::{FilterError, Result};

/// Conventional name of the column holding the recorded samples.
pub const VALUE_COLUMN: &str = "Value";

/// A single-channel time series: one value per index entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    index: Vec<f64>,
    values: Vec<f64>,
}

impl Signal {
    /// Create a signal from parallel index and value vectors.
    pub fn new(index: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(FilterError::LengthMismatch {
                index: index.len(),
                values: values.len(),
            });
        }
        Ok(Self { index, values })
    }

    /// Create a signal with a default 0..n sample-number index.
    pub fn from_values(values: Vec<f64>) -> Self {
        let index = (0..values.len()).map(|i| i as f64).collect();
        Self { index, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn index(&self) -> &[f64] {
        &self.index
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate (index, value) pairs, e.g. for plotting.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }
}

/// An index plus named columns, each column as long as the index.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    index: Vec<f64>,
    columns: Vec<(String, Vec<f64>)>,
}

impl Frame {
    /// Create an empty frame over the given index.
    pub fn new(index: Vec<f64>) -> Self {
        Self {
            index,
            columns: Vec::new(),
        }
    }

    /// Create a single-column frame with a default 0..n index.
    pub fn from_column(name: impl Into<String>, values: Vec<f64>) -> Self {
        let index = (0..values.len()).map(|i| i as f64).collect();
        Self {
            index,
            columns: vec![(name.into(), values)],
        }
    }

    /// Add a column, replacing any existing column of the same name.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        if values.len() != self.index.len() {
            return Err(FilterError::LengthMismatch {
                index: self.index.len(),
                values: values.len(),
            });
        }
        let name = name.into();
        if let Some(existing) = self.columns.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = values;
        } else {
            self.columns.push((name, values));
        }
        Ok(self)
    }

    /// Number of rows (length of the index).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &[f64] {
        &self.index
    }

    /// Borrow a column's values by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Extract a column as a `Signal` carrying a copy of the frame's index.
    pub fn series(&self, name: &str) -> Result<Signal> {
        let values = self
            .column(name)
            .ok_or_else(|| FilterError::MissingField(name.to_string()))?;
        Signal::new(self.index.clone(), values.to_vec())
    }
}
