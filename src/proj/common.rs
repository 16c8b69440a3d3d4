//! Common helpers for projection math (meridian arc, conformal latitude, input checks).

use crate::error::ProjError;

/// Meridian arc length from the equator to latitude `phi` (radians), scaled by
/// `scale = m0·a / (1 + n)`.
///
/// S(φ) = scale · (A₀·φ + Σⱼ Aⱼ·sin(2jφ)), j = 1..5
pub fn meridian_arc(a: &[f64; 6], scale: f64, phi: f64) -> f64 {
    let series: f64 = a
        .iter()
        .enumerate()
        .skip(1)
        .map(|(j, &aj)| aj * (2.0 * j as f64 * phi).sin())
        .sum();
    scale * (a[0] * phi + series)
}

/// Conformal auxiliary `t = sinh(atanh(sin φ) - e·atanh(e·sin φ))`, i.e. the
/// tangent of the conformal latitude, for first eccentricity `e`.
pub fn conformal_tangent(phi: f64, e: f64) -> f64 {
    let sin_phi = phi.sin();
    (sin_phi.atanh() - e * (e * sin_phi).atanh()).sinh()
}

/// Reject NaN and infinities with a domain error naming the offending input.
pub fn ensure_finite(name: &str, value: f64) -> Result<f64, ProjError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProjError::Domain(format!("{name} must be finite, got {value}")))
    }
}

/// Latitudes must lie strictly between the poles.
pub fn ensure_latitude(name: &str, lat_deg: f64) -> Result<f64, ProjError> {
    ensure_finite(name, lat_deg)?;
    if lat_deg.abs() >= 90.0 {
        return Err(ProjError::Domain(format!(
            "{name} must lie strictly between -90 and 90 degrees, got {lat_deg}"
        )));
    }
    Ok(lat_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::coefficients::meridian_coefficients;
    use crate::proj::ellipsoid::GRS80;
    use approx::assert_relative_eq;

    fn arc(phi: f64) -> f64 {
        let a = meridian_coefficients(GRS80.n);
        meridian_arc(&a, GRS80.a / (1.0 + GRS80.n), phi)
    }

    #[test]
    fn test_meridian_arc_equator() {
        assert_relative_eq!(arc(0.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_meridian_arc_quadrant() {
        // Equator to pole on GRS80: 10 001 965.729 m
        assert_relative_eq!(arc(std::f64::consts::FRAC_PI_2), 10_001_965.729, epsilon = 1e-3);
    }

    #[test]
    fn test_meridian_arc_odd() {
        let phi = 36.0_f64.to_radians();
        assert_relative_eq!(arc(-phi), -arc(phi), epsilon = 1e-9);
    }

    #[test]
    fn test_conformal_tangent_sphere() {
        // On a sphere conformal and geodetic latitude coincide
        let phi = 0.6_f64;
        assert_relative_eq!(conformal_tangent(phi, 0.0), phi.tan(), epsilon = 1e-12);
    }

    #[test]
    fn test_conformal_latitude_below_geodetic() {
        let phi = 36.0_f64.to_radians();
        let chi = conformal_tangent(phi, GRS80.eccentricity()).atan();
        assert!(chi < phi);
        // Difference peaks around 0.19° at mid latitudes
        assert!((phi - chi).to_degrees() < 0.2);
    }

    #[test]
    fn test_latitude_checks() {
        assert!(ensure_latitude("lat", 89.999).is_ok());
        assert!(matches!(ensure_latitude("lat", 90.0), Err(ProjError::Domain(_))));
        assert!(matches!(ensure_latitude("lat", -90.0), Err(ProjError::Domain(_))));
        assert!(matches!(ensure_latitude("lat", f64::NAN), Err(ProjError::Domain(_))));
        assert!(matches!(ensure_finite("x", f64::INFINITY), Err(ProjError::Domain(_))));
    }
}
