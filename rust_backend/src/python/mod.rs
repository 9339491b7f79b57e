//! Python bindings for the tabprep Rust backend.
//!
//! This module exposes name resolution to Python via PyO3. Fitted routing
//! structures cross the boundary as JSON descriptions (the export format of
//! the fitting side), and resolved names come back as a list of strings.
//!
//! All functions are available in the `tabprep_rust` Python module after
//! installation.

use pyo3::prelude::*;

use crate::naming::{NameResolver, ResolveConfig};
use crate::parsing::json_parser::parse_router_json_str;

/// Resolve the output column names of a fitted router description
#[pyfunction]
#[pyo3(signature = (router_json, original_columns=None, verbose=false))]
pub fn py_output_names(
    router_json: String,
    original_columns: Option<Vec<String>>,
    verbose: bool,
) -> PyResult<Vec<String>> {
    let router = parse_router_json_str(&router_json).map_err(|e| {
        pyo3::exceptions::PyValueError::new_err(format!(
            "Failed to parse router description: {:#}",
            e
        ))
    })?;

    NameResolver::with_config(ResolveConfig { verbose })
        .resolve(&router, original_columns.as_deref())
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}

/// Resolve names for a description stored on disk
#[pyfunction]
#[pyo3(signature = (path, original_columns=None, verbose=false))]
pub fn py_output_names_from_file(
    path: String,
    original_columns: Option<Vec<String>>,
    verbose: bool,
) -> PyResult<Vec<String>> {
    let router = crate::parsing::json_parser::parse_router_json(std::path::Path::new(&path))
        .map_err(|e| {
            pyo3::exceptions::PyValueError::new_err(format!(
                "Failed to load router description: {:#}",
                e
            ))
        })?;

    NameResolver::with_config(ResolveConfig { verbose })
        .resolve(&router, original_columns.as_deref())
        .map_err(|e| pyo3::exceptions::PyRuntimeError::new_err(e.to_string()))
}
