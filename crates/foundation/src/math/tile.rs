/// Tile coordinate in the slippy-map ZXY scheme.
///
/// `x` and `y` are signed so that coordinates outside the Web Mercator range
/// (or outside [-180, 180] longitude) stay representable instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub z: u8,
    pub x: i64,
    pub y: i64,
}

impl TileCoord {
    pub fn new(z: u8, x: i64, y: i64) -> Self {
        Self { z, x, y }
    }

    /// Number of tiles along one axis at zoom `z` (2^z).
    pub fn tiles_per_axis(z: u8) -> f64 {
        2f64.powi(i32::from(z))
    }
}

/// Slippy-map tile containing `(lat_deg, lon_deg)` at `zoom`.
///
/// Precondition: `lat_deg` must not be ±90. `tan` is undefined at the poles
/// and the resulting `y` is meaningless there; no error is raised.
pub fn tile_index(lat_deg: f64, lon_deg: f64, zoom: u8) -> TileCoord {
    let n = TileCoord::tiles_per_axis(zoom);
    let lat = lat_deg.to_radians();

    let x = ((lon_deg + 180.0) / 360.0 * n).floor();
    // asinh(tan(lat)) written as ln(tan + sec).
    let mercator_y = (lat.tan() + 1.0 / lat.cos()).ln();
    let y = ((1.0 - mercator_y / std::f64::consts::PI) / 2.0 * n).floor();

    TileCoord::new(zoom, x as i64, y as i64)
}
