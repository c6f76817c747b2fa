//! Static globe geometry: latitude-banded surface and lat/lon grid.

use foundation::math::{DEFAULT_GLOBE_RADIUS, Vec3, to_cartesian};
use scene::Color;

use crate::renderer::{ColoredVertex, RenderCommand};

pub const LAND_COLOR: Color = Color::rgb(0.2, 0.7, 0.2);
pub const OCEAN_COLOR: Color = Color::rgb(0.1, 0.3, 0.8);
pub const GRID_COLOR: Color = Color::rgb(0.5, 0.5, 0.5);

/// Latitudes inside this band are painted as land.
pub const LAND_LAT_RANGE: (f64, f64) = (-60.0, 75.0);

pub const GRID_RADIUS: f64 = 2.03;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobeStyle {
    pub radius: f64,
    pub stacks: u32,
    pub slices: u32,
    pub grid_radius: f64,
    /// Spacing between grid lines, degrees.
    pub grid_step_deg: u32,
    /// Sampling step along each grid line, degrees.
    pub grid_sample_deg: u32,
}

impl Default for GlobeStyle {
    fn default() -> Self {
        Self {
            radius: DEFAULT_GLOBE_RADIUS,
            stacks: 40,
            slices: 40,
            grid_radius: GRID_RADIUS,
            grid_step_deg: 30,
            grid_sample_deg: 2,
        }
    }
}

pub fn band_color(lat_deg: f64) -> Color {
    let (south, north) = LAND_LAT_RANGE;
    if (south..=north).contains(&lat_deg) {
        LAND_COLOR
    } else {
        OCEAN_COLOR
    }
}

/// One quad strip per latitude band, south to north.
pub fn surface_strips(style: &GlobeStyle) -> Vec<RenderCommand> {
    let stacks = style.stacks.max(1);
    let slices = style.slices.max(1);
    (0..stacks)
        .map(|i| {
            let lat0 = -90.0 + 180.0 * f64::from(i) / f64::from(stacks);
            let lat1 = -90.0 + 180.0 * f64::from(i + 1) / f64::from(stacks);
            let mut vertices = Vec::with_capacity(2 * (slices as usize + 1));
            for j in 0..=slices {
                let lon = -180.0 + 360.0 * f64::from(j) / f64::from(slices);
                vertices.push(ColoredVertex {
                    position: to_cartesian(lat0, lon, style.radius),
                    color: band_color(lat0),
                });
                vertices.push(ColoredVertex {
                    position: to_cartesian(lat1, lon, style.radius),
                    color: band_color(lat1),
                });
            }
            RenderCommand::QuadStrip { vertices }
        })
        .collect()
}

/// Parallels first, then meridians.
pub fn grid_lines(style: &GlobeStyle) -> Vec<RenderCommand> {
    let step = style.grid_step_deg.max(1) as usize;
    let sample = style.grid_sample_deg.max(1) as usize;
    let line = |points: Vec<Vec3>| RenderCommand::LineStrip {
        points,
        color: GRID_COLOR,
    };

    let parallels = (-90i32..=90).step_by(step).map(|lat| {
        let points = (-180i32..=180)
            .step_by(sample)
            .map(|lon| to_cartesian(f64::from(lat), f64::from(lon), style.grid_radius))
            .collect();
        line(points)
    });
    let meridians = (-180i32..=180).step_by(step).map(|lon| {
        let points = (-90i32..=90)
            .step_by(sample)
            .map(|lat| to_cartesian(f64::from(lat), f64::from(lon), style.grid_radius))
            .collect();
        line(points)
    });
    parallels.chain(meridians).collect()
}

#[cfg(test)]
mod tests {
    use super::{GlobeStyle, LAND_COLOR, OCEAN_COLOR, band_color, grid_lines, surface_strips};
    use crate::renderer::RenderCommand;

    #[test]
    fn band_colors_follow_land_range() {
        assert_eq!(band_color(-90.0), OCEAN_COLOR);
        assert_eq!(band_color(-60.0), LAND_COLOR);
        assert_eq!(band_color(0.0), LAND_COLOR);
        assert_eq!(band_color(75.0), LAND_COLOR);
        assert_eq!(band_color(76.5), OCEAN_COLOR);
    }

    #[test]
    fn surface_has_one_strip_per_stack() {
        let style = GlobeStyle::default();
        let strips = surface_strips(&style);
        assert_eq!(strips.len(), 40);
        match &strips[0] {
            RenderCommand::QuadStrip { vertices } => {
                assert_eq!(vertices.len(), 82);
                let r = vertices[0].position.length();
                assert!((r - style.radius).abs() < 1e-12);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn grid_has_parallels_and_meridians() {
        let lines = grid_lines(&GlobeStyle::default());
        // 7 parallels (-90..=90 by 30) and 13 meridians (-180..=180 by 30).
        assert_eq!(lines.len(), 20);
        match &lines[0] {
            RenderCommand::LineStrip { points, .. } => assert_eq!(points.len(), 181),
            other => panic!("unexpected command: {other:?}"),
        }
        match &lines[7] {
            RenderCommand::LineStrip { points, .. } => assert_eq!(points.len(), 91),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
