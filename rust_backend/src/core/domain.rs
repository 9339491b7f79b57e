//! Domain models for fitted column-routing preprocessing structures.
//!
//! This module provides the data structures that describe a fitted two-level
//! preprocessing pipeline: an ordered list of named groups, each routing a
//! subset of input columns through a chain of named transformation steps or
//! forwarding them unchanged.

use serde::{Deserialize, Serialize};

use crate::naming::{ResolveError, ResolveResult};
use crate::transforms::Transform;

/// Reserved group name that marks the passthrough group.
///
/// A group under this name is excluded from chain walking; when it routes
/// [`GroupRoute::Passthrough`], its selected columns are appended last during
/// name resolution.
pub const REMAINDER_GROUP: &str = "remainder";

/// A fitted column-routing structure.
///
/// `ColumnRouter` is the metadata description of a fitted preprocessing
/// pipeline: an ordered list of [`TransformGroup`]s plus a flag recording
/// whether the pipeline it describes was actually fitted. Fitting happens on
/// the exporting side; this crate only reads the resulting description.
///
/// Group order is preserved and determines the order of resolved output
/// columns.
///
/// # Examples
///
/// ```
/// use tabprep_rust::core::domain::{ColumnRouter, PipelineStep, TransformGroup};
/// use tabprep_rust::transforms::Transform;
///
/// let group = TransformGroup::chain(
///     "num",
///     vec!["age".to_string(), "fare".to_string()],
///     vec![PipelineStep::new("scale", Transform::Scale)],
/// );
/// let router = ColumnRouter::fitted(vec![group]);
/// assert!(router.is_fitted());
/// assert_eq!(router.groups().len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRouter {
    groups: Vec<TransformGroup>,
    #[serde(default)]
    fitted: bool,
}

impl ColumnRouter {
    /// Creates an unfitted router description.
    ///
    /// Resolution refuses unfitted routers; call [`ColumnRouter::mark_fitted`]
    /// once the described pipeline has been fitted.
    pub fn new(groups: Vec<TransformGroup>) -> Self {
        Self {
            groups,
            fitted: false,
        }
    }

    /// Creates a router description for an already-fitted pipeline.
    pub fn fitted(groups: Vec<TransformGroup>) -> Self {
        Self {
            groups,
            fitted: true,
        }
    }

    /// Records that the described pipeline has been fitted.
    pub fn mark_fitted(&mut self) {
        self.fitted = true;
    }

    /// Returns `true` if the described pipeline was fitted.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Fails with [`ResolveError::NotFitted`] unless the described pipeline
    /// was fitted.
    pub fn check_fitted(&self) -> ResolveResult<()> {
        if self.fitted {
            Ok(())
        } else {
            Err(ResolveError::NotFitted)
        }
    }

    /// The groups in fitted order.
    pub fn groups(&self) -> &[TransformGroup] {
        &self.groups
    }

    /// Looks up a group by name.
    pub fn group(&self, name: &str) -> Option<&TransformGroup> {
        self.groups.iter().find(|g| g.name == name)
    }
}

/// A named unit routing a subset of input columns.
///
/// Groups either apply an ordered chain of steps to named input columns or
/// forward selected original columns unchanged (see [`GroupRoute`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformGroup {
    pub name: String,
    #[serde(flatten)]
    pub route: GroupRoute,
}

impl TransformGroup {
    /// Creates a group that applies a step chain to the given input columns.
    pub fn chain(
        name: impl Into<String>,
        columns: Vec<String>,
        steps: Vec<PipelineStep>,
    ) -> Self {
        Self {
            name: name.into(),
            route: GroupRoute::Chain { columns, steps },
        }
    }

    /// Creates a passthrough group forwarding the selected original columns.
    pub fn passthrough(name: impl Into<String>, select: ColumnSelector) -> Self {
        Self {
            name: name.into(),
            route: GroupRoute::Passthrough { select },
        }
    }

    /// Returns `true` if this is the reserved passthrough-marker group.
    pub fn is_remainder(&self) -> bool {
        self.name == REMAINDER_GROUP
    }
}

/// Routing strategy of a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum GroupRoute {
    /// Apply an ordered chain of steps to the named input columns.
    ///
    /// Within a chain, the output names of step *i* become the input names of
    /// step *i + 1*.
    Chain {
        columns: Vec<String>,
        steps: Vec<PipelineStep>,
    },
    /// Forward the selected original columns unchanged.
    ///
    /// Only recognized under the reserved [`REMAINDER_GROUP`] name; resolving
    /// it requires the original input table's column labels.
    Passthrough { select: ColumnSelector },
}

/// One named transformation step within a group's chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStep {
    pub name: String,
    pub transform: Transform,
}

impl PipelineStep {
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
        }
    }
}

/// Column selector of a passthrough group, resolved against the original
/// input table's column labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSelector {
    /// Positional indices into the original column labels.
    Indices(Vec<usize>),
    /// Boolean mask over the original column labels.
    Mask(Vec<bool>),
}

impl ColumnSelector {
    /// Resolves the selector to literal column names.
    ///
    /// Indices index the label slice directly; a mask keeps the labels whose
    /// flag is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabprep_rust::core::domain::ColumnSelector;
    ///
    /// let labels: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    /// let select = ColumnSelector::Indices(vec![2, 3]);
    /// assert_eq!(select.resolve(&labels), vec!["c", "d"]);
    /// ```
    pub fn resolve(&self, labels: &[String]) -> Vec<String> {
        match self {
            ColumnSelector::Indices(indices) => {
                indices.iter().map(|&i| labels[i].clone()).collect()
            }
            ColumnSelector::Mask(mask) => mask
                .iter()
                .zip(labels)
                .filter(|(keep, _)| **keep)
                .map(|(_, label)| label.clone())
                .collect(),
        }
    }
}
