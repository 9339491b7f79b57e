//! Output-column-name resolution for fitted column-routing structures.
//!
//! # Modules
//!
//! - [`resolver`]: walk a fitted [`crate::core::domain::ColumnRouter`] and
//!   reconstruct its ordered output column names
//! - [`error`]: resolution error types

pub mod error;
pub mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use resolver::{output_names, NameResolver, ResolveConfig};
