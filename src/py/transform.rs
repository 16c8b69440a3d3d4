//! PyO3 bindings for the plane rectangular transforms.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::ProjError;
use crate::geo::GeoPoint;
use crate::proj::{self, PlaneRectangular, Projection, ZoneOrigin};

fn to_py_err(e: ProjError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Project latitude/longitude (degrees) to plane rectangular (x north, y east) metres.
#[pyfunction]
#[pyo3(signature = (lat, lon, origin_lat, origin_lon))]
pub fn forward_project(lat: f64, lon: f64, origin_lat: f64, origin_lon: f64) -> PyResult<(f64, f64)> {
    proj::forward_project(lat, lon, origin_lat, origin_lon)
        .map(Into::into)
        .map_err(to_py_err)
}

/// Project plane rectangular (x north, y east) metres back to (lat, lon) degrees.
#[pyfunction]
#[pyo3(signature = (x, y, origin_lat, origin_lon))]
pub fn inverse_project(x: f64, y: f64, origin_lat: f64, origin_lon: f64) -> PyResult<(f64, f64)> {
    proj::inverse_project(x, y, origin_lat, origin_lon)
        .map(Into::into)
        .map_err(to_py_err)
}

/// Origin (lat, lon) in degrees of zone `zone_id` (1..=19).
#[pyfunction]
pub fn zone_origin(zone_id: i32) -> PyResult<(f64, f64)> {
    let o = proj::zone_origin(zone_id).map_err(to_py_err)?;
    Ok((o.latitude, o.longitude))
}

#[allow(clippy::type_complexity)]
fn transform_arrays<'py>(
    py: Python<'py>,
    a: PyReadonlyArray1<'py, f64>,
    b: PyReadonlyArray1<'py, f64>,
    origin: ZoneOrigin,
    inverse: bool,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let a_view = a.as_array();
    let b_view = b.as_array();

    let n = a_view.len();
    let b_len = b_view.len();
    if n != b_len {
        return Err(PyValueError::new_err(format!(
            "input arrays must have same length, got {} and {}",
            n, b_len
        )));
    }

    let mut coords: Vec<GeoPoint> = a_view
        .iter()
        .zip(b_view.iter())
        .map(|(&ai, &bi)| GeoPoint::new(ai, bi))
        .collect();

    let coords = py.allow_threads(move || -> Result<Vec<GeoPoint>, ProjError> {
        let tm = PlaneRectangular::new(origin)?;
        if inverse {
            tm.inverse_batch(&mut coords)?;
        } else {
            tm.forward_batch(&mut coords)?;
        }
        Ok(coords)
    })
    .map_err(to_py_err)?;

    let (xs, ys): (Vec<f64>, Vec<f64>) = coords.into_iter().map(|p| (p.x, p.y)).unzip();

    Ok((
        PyArray1::from_owned_array(py, ndarray::Array1::from(xs)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(ys)),
    ))
}

/// Forward-project arrays of latitudes and longitudes.
///
/// Args:
///     lat: 1D array of latitudes (degrees).
///     lon: 1D array of longitudes (degrees).
///     origin_lat: Origin latitude of the plane rectangular system (degrees).
///     origin_lon: Origin longitude of the plane rectangular system (degrees).
///
/// Returns:
///     Tuple of (x, y) arrays in metres, x northward and y eastward.
#[pyfunction]
#[pyo3(signature = (lat, lon, origin_lat, origin_lon))]
#[allow(clippy::type_complexity)]
pub fn forward_project_array<'py>(
    py: Python<'py>,
    lat: PyReadonlyArray1<'py, f64>,
    lon: PyReadonlyArray1<'py, f64>,
    origin_lat: f64,
    origin_lon: f64,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    transform_arrays(py, lat, lon, ZoneOrigin::new(origin_lat, origin_lon), false)
}

/// Inverse-project arrays of plane rectangular coordinates.
///
/// Args:
///     x: 1D array of northings (metres).
///     y: 1D array of eastings (metres).
///     origin_lat: Origin latitude of the plane rectangular system (degrees).
///     origin_lon: Origin longitude of the plane rectangular system (degrees).
///
/// Returns:
///     Tuple of (lat, lon) arrays in degrees.
#[pyfunction]
#[pyo3(signature = (x, y, origin_lat, origin_lon))]
#[allow(clippy::type_complexity)]
pub fn inverse_project_array<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
    origin_lat: f64,
    origin_lon: f64,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    transform_arrays(py, x, y, ZoneOrigin::new(origin_lat, origin_lon), true)
}
