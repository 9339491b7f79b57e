use serde::{Deserialize, Serialize};

use crate::transforms::missing_name;

/// Imputation strategy recorded by the fitting side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImputeStrategy {
    #[default]
    Mean,
    Median,
    Constant,
}

/// Fitted state of a value-imputation step.
///
/// Imputation never renames its columns. When the exporter fitted it with an
/// active indicator flag, `indicator` holds the indices of the input columns
/// for which an indicator column was appended; name resolution synthesizes
/// one `<column>_missing` name per index, after the imputed columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Imputation {
    #[serde(default)]
    pub strategy: ImputeStrategy,
    /// Fill value used by the constant strategy. Not name-relevant.
    #[serde(default)]
    pub fill_value: Option<f64>,
    #[serde(default)]
    pub indicator: Option<Vec<usize>>,
}

impl Imputation {
    /// An imputation without indicator columns.
    pub fn simple(strategy: ImputeStrategy) -> Self {
        Self {
            strategy,
            fill_value: None,
            indicator: None,
        }
    }

    /// An imputation that appended indicator columns for the given input
    /// column indices.
    pub fn with_indicator(strategy: ImputeStrategy, features: Vec<usize>) -> Self {
        Self {
            strategy,
            fill_value: None,
            indicator: Some(features),
        }
    }
}

/// Fitted state of a dedicated missing-value indicator.
///
/// Its sole output is one indicator column per configured input-column
/// index; any other output a step would have produced is discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingIndicator {
    pub features: Vec<usize>,
}

impl MissingIndicator {
    pub fn new(features: Vec<usize>) -> Self {
        Self { features }
    }

    /// Indicator names for the given input names, one per configured index.
    pub fn feature_names(&self, features_in: &[String]) -> Vec<String> {
        self.features
            .iter()
            .map(|&i| missing_name(&features_in[i]))
            .collect()
    }
}
