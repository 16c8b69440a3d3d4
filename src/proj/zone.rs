//! Origins of the Japanese plane rectangular coordinate system, zones I–XIX.

use crate::error::ProjError;
use crate::geo::GeoPoint;

/// Origin of a plane rectangular zone, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneOrigin {
    pub latitude: f64,
    pub longitude: f64,
}

impl ZoneOrigin {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<ZoneOrigin> for GeoPoint {
    /// `x` = latitude, `y` = longitude.
    fn from(o: ZoneOrigin) -> Self {
        GeoPoint::new(o.latitude, o.longitude)
    }
}

const fn dm(degrees: f64, minutes: f64) -> f64 {
    degrees + minutes / 60.0
}

/// Origins indexed by zone number - 1.
pub const ZONE_ORIGINS: [ZoneOrigin; 19] = [
    ZoneOrigin::new(33.0, dm(129.0, 30.0)), // I
    ZoneOrigin::new(33.0, dm(131.0, 0.0)),  // II
    ZoneOrigin::new(36.0, dm(132.0, 10.0)), // III
    ZoneOrigin::new(33.0, dm(133.0, 30.0)), // IV
    ZoneOrigin::new(36.0, dm(134.0, 20.0)), // V
    ZoneOrigin::new(36.0, dm(136.0, 0.0)),  // VI
    ZoneOrigin::new(36.0, dm(137.0, 10.0)), // VII
    ZoneOrigin::new(36.0, dm(138.0, 30.0)), // VIII
    ZoneOrigin::new(36.0, dm(139.0, 50.0)), // IX
    ZoneOrigin::new(40.0, dm(140.0, 50.0)), // X
    ZoneOrigin::new(44.0, dm(140.0, 15.0)), // XI
    ZoneOrigin::new(44.0, dm(142.0, 15.0)), // XII
    ZoneOrigin::new(44.0, dm(144.0, 15.0)), // XIII
    ZoneOrigin::new(26.0, dm(142.0, 0.0)),  // XIV
    ZoneOrigin::new(26.0, dm(127.0, 30.0)), // XV
    ZoneOrigin::new(26.0, dm(124.0, 0.0)),  // XVI
    ZoneOrigin::new(26.0, dm(131.0, 0.0)),  // XVII
    ZoneOrigin::new(20.0, dm(136.0, 0.0)),  // XVIII
    ZoneOrigin::new(26.0, dm(154.0, 0.0)),  // XIX
];

/// Look up the origin of zone `zone_id` (1..=19).
pub fn zone_origin(zone_id: i32) -> Result<ZoneOrigin, ProjError> {
    usize::try_from(zone_id)
        .ok()
        .and_then(|id| id.checked_sub(1))
        .and_then(|idx| ZONE_ORIGINS.get(idx))
        .copied()
        .ok_or_else(|| {
            tracing::debug!(zone_id, "unknown plane rectangular zone");
            ProjError::UnknownZone(zone_id)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_zones_resolve() {
        for id in 1..=19 {
            let o = zone_origin(id).unwrap();
            assert!(o.latitude >= 20.0 && o.latitude <= 44.0, "zone {id}: {o:?}");
            assert!(o.longitude >= 124.0 && o.longitude <= 154.0, "zone {id}: {o:?}");
        }
    }

    #[test]
    fn test_known_origins() {
        let ix = zone_origin(9).unwrap();
        assert_relative_eq!(ix.latitude, 36.0);
        assert_relative_eq!(ix.longitude, 139.833_333_333_333, epsilon = 1e-9);

        let i = zone_origin(1).unwrap();
        assert_relative_eq!(i.latitude, 33.0);
        assert_relative_eq!(i.longitude, 129.5);

        let vii = zone_origin(7).unwrap();
        assert_relative_eq!(vii.longitude, 137.166_666_666_667, epsilon = 1e-9);

        let xviii = zone_origin(18).unwrap();
        assert_relative_eq!(xviii.latitude, 20.0);
        assert_relative_eq!(xviii.longitude, 136.0);
    }

    #[test]
    fn test_unknown_zone() {
        assert_eq!(zone_origin(999), Err(ProjError::UnknownZone(999)));
        assert_eq!(zone_origin(0), Err(ProjError::UnknownZone(0)));
        assert_eq!(zone_origin(20), Err(ProjError::UnknownZone(20)));
        assert_eq!(zone_origin(-3), Err(ProjError::UnknownZone(-3)));
    }

    #[test]
    fn test_origin_as_geopoint() {
        let p: GeoPoint = zone_origin(9).unwrap().into();
        assert_relative_eq!(p.x, 36.0);
        assert_relative_eq!(p.y, 139.833_333_333_333, epsilon = 1e-9);
    }
}
