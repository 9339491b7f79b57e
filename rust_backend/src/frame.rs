//! DataFrame helpers for name resolution.
//!
//! The original input table only contributes its column-label sequence, and
//! the resolved names exist to label a transformed table; both ends are
//! polars DataFrames here.

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::core::domain::ColumnRouter;
use crate::naming::{output_names, ResolveResult};

/// Column labels of a DataFrame, in order
pub fn column_labels(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Resolve output names using a frame's labels as the original columns.
///
/// Pass the frame the pipeline was originally fitted on, not the transformed
/// one.
pub fn resolve_for_frame(router: &ColumnRouter, original: &DataFrame) -> ResolveResult<Vec<String>> {
    let labels = column_labels(original);
    output_names(router, Some(&labels))
}

/// Rename a transformed frame's columns to the resolved output names.
///
/// The transformed frame's width must equal the resolved name count; polars
/// reports the mismatch otherwise.
pub fn label_transformed(
    transformed: &mut DataFrame,
    router: &ColumnRouter,
    original_columns: Option<&[String]>,
) -> Result<()> {
    let names =
        output_names(router, original_columns).context("Failed to resolve output column names")?;

    transformed
        .set_column_names(&names)
        .context("Resolved name count does not match the transformed frame width")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{ColumnSelector, PipelineStep, TransformGroup, REMAINDER_GROUP};
    use crate::transforms::{Imputation, ImputeStrategy, Transform};

    fn cols(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    fn sample_router() -> ColumnRouter {
        ColumnRouter::fitted(vec![
            TransformGroup::chain(
                "num",
                cols(&["age", "fare"]),
                vec![PipelineStep::new(
                    "imputer",
                    Transform::Impute(Imputation::with_indicator(ImputeStrategy::Mean, vec![0])),
                )],
            ),
            TransformGroup::passthrough(REMAINDER_GROUP, ColumnSelector::Indices(vec![2])),
        ])
    }

    #[test]
    fn test_column_labels_in_order() {
        let df = DataFrame::new(vec![
            Series::new("age", &[22.0, 38.0]),
            Series::new("fare", &[7.25, 71.28]),
            Series::new("pclass", &[3, 1]),
        ])
        .unwrap();

        assert_eq!(column_labels(&df), vec!["age", "fare", "pclass"]);
    }

    #[test]
    fn test_resolve_for_frame() {
        let original = DataFrame::new(vec![
            Series::new("age", &[22.0, 38.0]),
            Series::new("fare", &[7.25, 71.28]),
            Series::new("pclass", &[3, 1]),
        ])
        .unwrap();

        let names = resolve_for_frame(&sample_router(), &original).unwrap();
        assert_eq!(names, vec!["age", "fare", "age_missing", "pclass"]);
    }

    #[test]
    fn test_label_transformed() {
        // Four output columns: age, fare, age_missing, pclass
        let mut transformed = DataFrame::new(vec![
            Series::new("column_0", &[22.0, 38.0]),
            Series::new("column_1", &[7.25, 71.28]),
            Series::new("column_2", &[0.0, 1.0]),
            Series::new("column_3", &[3.0, 1.0]),
        ])
        .unwrap();

        let original = cols(&["age", "fare", "pclass"]);
        label_transformed(&mut transformed, &sample_router(), Some(&original)).unwrap();

        assert_eq!(
            column_labels(&transformed),
            vec!["age", "fare", "age_missing", "pclass"]
        );
    }

    #[test]
    fn test_label_transformed_width_mismatch() {
        let mut transformed =
            DataFrame::new(vec![Series::new("column_0", &[1.0, 2.0])]).unwrap();

        let original = cols(&["age", "fare", "pclass"]);
        let result = label_transformed(&mut transformed, &sample_router(), Some(&original));

        assert!(result.is_err());
    }
}
