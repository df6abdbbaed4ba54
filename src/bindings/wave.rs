use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::config::{SamplingConfig, DEFAULT_LOWER, DEFAULT_SAMPLES, DEFAULT_UPPER};
use crate::error::WaveError;
use crate::ops;
use crate::series::EventSeries;
use crate::wave::WaveFunction;

fn to_py_err(err: WaveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// (menu key, display name) pairs in menu order.
#[pyfunction]
fn functions() -> Vec<(String, String)> {
    WaveFunction::ALL
        .iter()
        .map(|f| (f.key().to_string(), f.name().to_owned()))
        .collect()
}

/// Samples the menu function `key` (falling back to the sine wave).
#[pyfunction]
#[pyo3(signature = (key, samples = DEFAULT_SAMPLES, lower = DEFAULT_LOWER, upper = DEFAULT_UPPER, seed = None))]
fn generate_wave<'py>(
    py: Python<'py>,
    key: &str,
    samples: usize,
    lower: f64,
    upper: f64,
    seed: Option<u64>,
) -> PyResult<&'py PyArray1<f64>> {
    let mut config = SamplingConfig::new(samples, lower, upper);
    config.seed = seed;
    let series = EventSeries::generate(WaveFunction::resolve(key), &config).map_err(to_py_err)?;
    Ok(series.wave().to_owned().into_pyarray(py))
}

/// First difference of `wave` with the first value prepended.
#[pyfunction]
fn amplitude_changes<'py>(py: Python<'py>, wave: PyReadonlyArray1<f64>) -> &'py PyArray1<f64> {
    ops::diffs(&wave.as_array()).into_pyarray(py)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(functions, m)?)?;
    m.add_function(wrap_pyfunction!(generate_wave, m)?)?;
    m.add_function(wrap_pyfunction!(amplitude_changes, m)?)?;
    Ok(())
}
