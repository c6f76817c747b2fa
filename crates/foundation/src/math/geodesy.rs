use super::Vec3;

/// Radius of the rendered globe in scene units.
pub const DEFAULT_GLOBE_RADIUS: f64 = 2.0;

/// Geographic coordinate in degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180], but
/// neither is normalized or enforced: out-of-range values still project to a
/// valid (if meaningless) point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinate {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl Coordinate {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    pub fn to_cartesian(self, radius: f64) -> Vec3 {
        to_cartesian(self.lat_deg, self.lon_deg, radius)
    }
}

/// Project a latitude/longitude pair onto a sphere of `radius`.
///
/// The frame is y-up: the north pole maps to `(0, r, 0)` and the
/// intersection of the equator and the prime meridian to `(r, 0, 0)`.
pub fn to_cartesian(lat_deg: f64, lon_deg: f64, radius: f64) -> Vec3 {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    let cos_lat = lat.cos();

    Vec3::new(
        radius * cos_lat * lon.cos(),
        radius * lat.sin(),
        radius * cos_lat * lon.sin(),
    )
}
