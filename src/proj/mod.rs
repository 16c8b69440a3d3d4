pub mod coefficients;
pub mod common;
pub mod ellipsoid;
pub mod plane_rectangular;
pub mod zone;

use crate::error::ProjError;
use crate::geo::GeoPoint;

pub use plane_rectangular::{forward_project, inverse_project, PlaneRectangular};
pub use zone::{zone_origin, ZoneOrigin};

/// Trait for map projections supporting forward and inverse transforms.
pub trait Projection: Send + Sync {
    /// Forward: (lat_deg, lon_deg) -> planar (x north, y east) in metres
    fn forward(&self, lat: f64, lon: f64) -> Result<GeoPoint, ProjError>;

    /// Inverse: planar (x north, y east) -> (lat_deg, lon_deg)
    fn inverse(&self, x: f64, y: f64) -> Result<GeoPoint, ProjError>;

    /// Batch forward transform, in place. Stops at the first failing point.
    fn forward_batch(&self, coords: &mut [GeoPoint]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.forward(c.x, c.y)?;
        }
        Ok(())
    }

    /// Batch inverse transform.
    fn inverse_batch(&self, coords: &mut [GeoPoint]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.x, c.y)?;
        }
        Ok(())
    }
}
