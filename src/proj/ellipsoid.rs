/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Inverse flattening F = 1/f
    pub inv_f: f64,
    /// Third flattening: 1 / (2F - 1)
    pub n: f64,
}

impl Ellipsoid {
    pub const fn new(a: f64, inv_f: f64) -> Self {
        Self {
            a,
            inv_f,
            n: 1.0 / (2.0 * inv_f - 1.0),
        }
    }

    /// First eccentricity, written in terms of n: 2√n / (1 + n).
    pub fn eccentricity(&self) -> f64 {
        2.0 * self.n.sqrt() / (1.0 + self.n)
    }
}

/// GRS80, the ellipsoid of the ITRF-based Japanese geodetic datum.
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 298.257_222_101);

/// Scale factor on the central meridian of every plane rectangular zone.
pub const M0: f64 = 0.9999;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grs80_constants() {
        assert_relative_eq!(GRS80.a, 6_378_137.0);
        assert_relative_eq!(GRS80.n, 0.001_679_220_394_628_74, epsilon = 1e-15);
    }

    #[test]
    fn test_eccentricity_matches_flattening() {
        let f = 1.0 / GRS80.inv_f;
        let e = (2.0 * f - f * f).sqrt();
        assert_relative_eq!(GRS80.eccentricity(), e, epsilon = 1e-15);
        assert_relative_eq!(GRS80.eccentricity(), 0.081_819_191_042_815, epsilon = 1e-12);
    }
}
