//! Conversion between geodetic latitude/longitude and the Japanese plane
//! rectangular coordinate system (Gauss-Krüger, GRS80, zones I–XIX).
//!
//! ```
//! use rectgeo::{forward_project, inverse_project, zone_origin};
//!
//! let origin = zone_origin(9)?;
//! // x: metres north of the origin, y: metres east
//! let p = forward_project(35.68, 139.77, origin.latitude, origin.longitude)?;
//! // x: latitude, y: longitude
//! let g = inverse_project(p.x, p.y, origin.latitude, origin.longitude)?;
//! assert!((g.x - 35.68).abs() < 1e-9);
//! # Ok::<(), rectgeo::ProjError>(())
//! ```

pub mod error;
pub mod geo;
pub mod proj;
#[cfg(feature = "python")]
mod py;

pub use error::ProjError;
pub use geo::GeoPoint;
pub use proj::{
    forward_project, inverse_project, zone_origin, PlaneRectangular, Projection, ZoneOrigin,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rectgeo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
