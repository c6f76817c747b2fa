use foundation::math::Coordinate;

use super::Color;

pub const DEFAULT_MARKER_COLOR: Color = Color::RED;
pub const DEFAULT_ROUTE_COLOR: Color = Color::GREEN;

/// A user-placed point on the globe.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
    pub at: Coordinate,
    pub color: Color,
}

impl Marker {
    pub fn new(at: Coordinate, color: Color) -> Self {
        Self { at, color }
    }

    pub fn with_default_color(at: Coordinate) -> Self {
        Self::new(at, DEFAULT_MARKER_COLOR)
    }
}

/// Committed path through a sequence of markers.
///
/// Order is significant. A route owns its markers: they are copies taken at
/// commit time, not references into the marker collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub markers: Vec<Marker>,
    pub color: Color,
}

impl Route {
    pub fn new(markers: Vec<Marker>, color: Color) -> Self {
        Self { markers, color }
    }

    pub fn with_default_color(markers: Vec<Marker>) -> Self {
        Self::new(markers, DEFAULT_ROUTE_COLOR)
    }
}
