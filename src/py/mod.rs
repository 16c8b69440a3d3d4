use pyo3::prelude::*;

mod transform;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform::forward_project, m)?)?;
    m.add_function(wrap_pyfunction!(transform::inverse_project, m)?)?;
    m.add_function(wrap_pyfunction!(transform::zone_origin, m)?)?;
    m.add_function(wrap_pyfunction!(transform::forward_project_array, m)?)?;
    m.add_function(wrap_pyfunction!(transform::inverse_project_array, m)?)?;
    Ok(())
}
