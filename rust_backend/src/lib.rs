//! tabprep Rust backend - output-column-name resolution for fitted tabular
//! preprocessing pipelines.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod core;
pub mod frame;
pub mod naming;
pub mod parsing;
pub mod transforms;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
#[pymodule]
fn tabprep_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::py_output_names, m)?)?;
    m.add_function(wrap_pyfunction!(python::py_output_names_from_file, m)?)?;

    Ok(())
}
