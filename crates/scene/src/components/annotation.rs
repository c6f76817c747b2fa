use foundation::math::Coordinate;

pub const DEFAULT_BUILDING_HEIGHT: f64 = 0.3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tree {
    pub at: Coordinate,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Grass {
    pub at: Coordinate,
}

/// Building footprint; `height` is in scene units and doubles as the cube edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Building {
    pub at: Coordinate,
    pub height: f64,
}

impl Tree {
    pub fn new(at: Coordinate) -> Self {
        Self { at }
    }
}

impl Grass {
    pub fn new(at: Coordinate) -> Self {
        Self { at }
    }
}

impl Building {
    pub fn new(at: Coordinate, height: f64) -> Self {
        Self { at, height }
    }
}
