mod wave;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// Wave Events - function sampling and amplitude changes for Python
#[pymodule]
pub fn wave_events(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    wave::register(m)?;
    Ok(())
}
