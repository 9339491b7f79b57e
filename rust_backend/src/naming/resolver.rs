//! Reconstructs the output column names of a fitted column-routing
//! structure.
//!
//! Groups are walked in fitted order; within a group, the output names of
//! each step feed the next step. Passthrough columns resolved against the
//! original input labels come last.

use log::debug;

use crate::core::domain::{ColumnRouter, GroupRoute, REMAINDER_GROUP};
use crate::naming::error::{ResolveError, ResolveResult};
use crate::transforms::missing_name;

/// Configuration for name resolution
#[derive(Debug, Clone, Default)]
pub struct ResolveConfig {
    /// Echo per-group and per-step input/output name lists at debug level.
    /// Purely observational; has no effect on the result.
    pub verbose: bool,
}

/// Resolves output column names from fitted routing structures.
pub struct NameResolver {
    config: ResolveConfig,
}

impl NameResolver {
    /// Create a resolver with default configuration
    pub fn new() -> Self {
        Self {
            config: ResolveConfig::default(),
        }
    }

    /// Create a resolver with custom configuration
    pub fn with_config(config: ResolveConfig) -> Self {
        Self { config }
    }

    /// Resolve the ordered output column names of a fitted router.
    ///
    /// `original_columns` is the column-label sequence of the table the
    /// pipeline was fitted on. It is only required when the router carries a
    /// passthrough group; omitting it in that case fails with
    /// [`ResolveError::MissingOriginalColumns`].
    ///
    /// # Arguments
    /// * `router` - Fitted routing structure to introspect
    /// * `original_columns` - Column labels of the originally fitted table
    ///
    /// # Returns
    /// The output column names, in group order with passthrough columns last.
    ///
    /// # Error Conditions
    ///
    /// - [`ResolveError::NotFitted`] when the router was never fitted
    /// - [`ResolveError::MissingOriginalColumns`] when passthrough resolution
    ///   is required but no original labels were supplied
    pub fn resolve(
        &self,
        router: &ColumnRouter,
        original_columns: Option<&[String]>,
    ) -> ResolveResult<Vec<String>> {
        router.check_fitted()?;

        let mut names: Vec<String> = Vec::new();

        for group in router.groups().iter().filter(|g| !g.is_remainder()) {
            let (columns, steps) = match &group.route {
                GroupRoute::Chain { columns, steps } => (columns, steps),
                // Passthrough is only recognized under the reserved name.
                GroupRoute::Passthrough { .. } => continue,
            };

            let mut features_in = columns.clone();
            if self.config.verbose {
                debug!("features in '{}': {:?}", group.name, features_in);
            }

            for step in steps {
                if self.config.verbose {
                    debug!("  features in '{}': {:?}", step.name, features_in);
                }

                let mut features_out = match step.transform.feature_names_out(&features_in) {
                    Some(out) => out,
                    // No naming function: features in = features out.
                    None => features_in.clone(),
                };

                if let Some(flagged) = step.transform.indicator_features() {
                    features_out.extend(flagged.iter().map(|&i| missing_name(&features_in[i])));
                }

                // A dedicated indicator replaces the step output wholesale;
                // the indicator-flag append above must stay before this check.
                if let Some(indicator) = step.transform.as_missing_indicator() {
                    features_out = indicator.feature_names(&features_in);
                }

                // features out feed the next step in the chain
                features_in = features_out;
                if self.config.verbose {
                    debug!("  features out '{}': {:?}", step.name, features_in);
                }
            }

            names.extend(features_in);
        }

        // Passthrough-ed columns come last, resolved against the original
        // table's labels.
        if let Some(group) = router.group(REMAINDER_GROUP) {
            if let GroupRoute::Passthrough { select } = &group.route {
                let original =
                    original_columns.ok_or(ResolveError::MissingOriginalColumns)?;
                names.extend(select.resolve(original));
            }
        }

        Ok(names)
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to resolve output names with default configuration.
///
/// # Examples
///
/// ```
/// use tabprep_rust::core::domain::{ColumnRouter, PipelineStep, TransformGroup};
/// use tabprep_rust::naming::output_names;
/// use tabprep_rust::transforms::Transform;
///
/// let router = ColumnRouter::fitted(vec![TransformGroup::chain(
///     "num",
///     vec!["age".to_string()],
///     vec![PipelineStep::new("scale", Transform::Scale)],
/// )]);
///
/// let names = output_names(&router, None).unwrap();
/// assert_eq!(names, vec!["age"]);
/// ```
pub fn output_names(
    router: &ColumnRouter,
    original_columns: Option<&[String]>,
) -> ResolveResult<Vec<String>> {
    NameResolver::new().resolve(router, original_columns)
}
