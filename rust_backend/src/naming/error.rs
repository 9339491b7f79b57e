//! Error types for name resolution.

/// Result type for name resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Error type for name resolution
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("column router is not fitted; fit the pipeline before resolving output names")]
    NotFitted,

    #[error("passthrough routing requires the original input column labels")]
    MissingOriginalColumns,
}
