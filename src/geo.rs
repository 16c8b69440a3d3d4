/// An ordered pair of coordinates.
///
/// The meaning of the two components depends on where the point came from:
///
/// * from an inverse projection, `x` is latitude and `y` is longitude, both in
///   decimal degrees;
/// * from a forward projection, `x` is the northing and `y` the easting from the
///   zone origin, both in metres.
///
/// Note that the planar axes follow the survey convention (X north, Y east), not
/// the usual screen convention. Consumers placing points in a scene have to swap
/// the axes themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
}

impl GeoPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(p: GeoPoint) -> Self {
        (p.x, p.y)
    }
}
