//! Fitted transformation kinds and their naming capabilities.
//!
//! Each variant of [`Transform`] records the fitted, name-relevant state of
//! one transformation kind and answers three questions during name
//! resolution:
//!
//! - does it rename or expand columns ([`Transform::feature_names_out`]);
//! - does it append missingness-indicator columns
//!   ([`Transform::indicator_features`]);
//! - is it a dedicated missing-value indicator
//!   ([`Transform::as_missing_indicator`]).
//!
//! # Modules
//!
//! - [`encoding`]: category expansion with fitted category lists
//! - [`imputing`]: value imputation and missing-value indicators

pub mod encoding;
pub mod imputing;

pub use encoding::OneHotEncoding;
pub use imputing::{Imputation, ImputeStrategy, MissingIndicator};

use serde::{Deserialize, Serialize};

/// Suffix of synthesized missingness-indicator column names.
pub const MISSING_SUFFIX: &str = "_missing";

/// Builds the indicator column name for an input column.
pub fn missing_name(base: &str) -> String {
    format!("{}{}", base, MISSING_SUFFIX)
}

/// A fitted transformation within a step chain.
///
/// Variants carry only the fitted state needed to derive output column
/// names; numeric model state (means, scales, fill statistics) stays on the
/// fitting side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transform {
    /// Category expansion: one output column per fitted (column, category)
    /// pair.
    OneHot(OneHotEncoding),
    /// Value imputation; may append one indicator column per flagged input
    /// column.
    Impute(Imputation),
    /// Dedicated missing-value indicator: its sole output is one indicator
    /// column per configured input column.
    MissingIndicator(MissingIndicator),
    /// Fitted numeric scaling. Keeps names and column count.
    Scale,
}

impl Transform {
    /// The optional naming function mapping input names to output names.
    ///
    /// `None` means identity: the step neither renames columns nor changes
    /// their count.
    pub fn feature_names_out(&self, features_in: &[String]) -> Option<Vec<String>> {
        match self {
            Transform::OneHot(encoding) => Some(encoding.feature_names_out(features_in)),
            Transform::Impute(_) | Transform::MissingIndicator(_) | Transform::Scale => None,
        }
    }

    /// Indices of input columns for which an indicator column was appended,
    /// when the transformation carries an active indicator flag.
    pub fn indicator_features(&self) -> Option<&[usize]> {
        match self {
            Transform::Impute(imputation) => imputation.indicator.as_deref(),
            _ => None,
        }
    }

    /// The variant tag for a dedicated missing-value indicator.
    pub fn as_missing_indicator(&self) -> Option<&MissingIndicator> {
        match self {
            Transform::MissingIndicator(indicator) => Some(indicator),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scale_has_no_capabilities() {
        let transform = Transform::Scale;
        assert!(transform.feature_names_out(&names(&["a"])).is_none());
        assert!(transform.indicator_features().is_none());
        assert!(transform.as_missing_indicator().is_none());
    }

    #[test]
    fn test_impute_without_indicator_is_identity() {
        let transform = Transform::Impute(Imputation {
            strategy: ImputeStrategy::Mean,
            fill_value: None,
            indicator: None,
        });
        assert!(transform.feature_names_out(&names(&["a"])).is_none());
        assert!(transform.indicator_features().is_none());
    }

    #[test]
    fn test_impute_exposes_indicator_indices() {
        let transform = Transform::Impute(Imputation {
            strategy: ImputeStrategy::Median,
            fill_value: None,
            indicator: Some(vec![0, 2]),
        });
        assert_eq!(transform.indicator_features(), Some(&[0usize, 2][..]));
    }

    #[test]
    fn test_missing_indicator_tag() {
        let transform = Transform::MissingIndicator(MissingIndicator {
            features: vec![1],
        });
        assert!(transform.as_missing_indicator().is_some());
        assert!(transform.feature_names_out(&names(&["x", "y"])).is_none());
    }

    #[test]
    fn test_transform_json_roundtrip() {
        let transform = Transform::Impute(Imputation {
            strategy: ImputeStrategy::Constant,
            fill_value: Some(0.0),
            indicator: Some(vec![1]),
        });

        let json = serde_json::to_string(&transform).unwrap();
        assert!(json.contains("\"kind\":\"impute\""));

        let back: Transform = serde_json::from_str(&json).unwrap();
        assert_eq!(back.indicator_features(), Some(&[1usize][..]));
    }
}
