use foundation::math::{DEFAULT_GLOBE_RADIUS, Vec3};
use scene::{Camera, Color, Scene};

use crate::globe::{GlobeStyle, grid_lines, surface_strips};

pub const MARKER_RADIUS: f64 = 2.02;
pub const MARKER_SIZE: f64 = 0.03;
pub const ROUTE_RADIUS: f64 = 2.01;
pub const CURRENT_ROUTE_COLOR: Color = Color::YELLOW;

pub const TREE_HEIGHT: f64 = 0.2;
pub const TREE_BASE_RADIUS: f64 = 0.05;
pub const TREE_COLOR: Color = Color::rgb(0.0, 0.5, 0.0);
pub const GRASS_HALF_EXTENT: f64 = 0.02;
pub const GRASS_COLOR: Color = Color::rgb(0.2, 0.8, 0.2);
pub const BUILDING_COLOR: Color = Color::rgb(0.6, 0.6, 0.6);

pub const OVERLAY_PROMPT: &str = "Enter lat,lon: ";
pub const OVERLAY_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
/// Overlay anchor in window pixels from the top-left corner.
pub const OVERLAY_POSITION_PX: [f64; 2] = [10.0, 10.0];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColoredVertex {
    pub position: Vec3,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    QuadStrip {
        vertices: Vec<ColoredVertex>,
    },
    LineStrip {
        points: Vec<Vec3>,
        color: Color,
    },
    Sphere {
        center: Vec3,
        radius: f64,
        color: Color,
    },
    /// Cone standing on the surface, apex pointing away from it.
    Cone {
        base: Vec3,
        base_radius: f64,
        height: f64,
        color: Color,
    },
    Quad {
        center: Vec3,
        half_extent: f64,
        color: Color,
    },
    Cube {
        center: Vec3,
        size: f64,
        color: Color,
    },
    Text {
        position_px: [f64; 2],
        text: String,
        color: Color,
    },
}

/// Model-view transform: translate along the view axis, then rotate about
/// X (pitch) and Y (yaw).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    pub translate_z: f64,
    pub pitch_deg: f64,
    pub yaw_deg: f64,
}

impl From<&Camera> for ViewTransform {
    fn from(camera: &Camera) -> Self {
        Self {
            translate_z: camera.zoom,
            pitch_deg: camera.pitch_deg,
            yaw_deg: camera.yaw_deg,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub view: ViewTransform,
    pub commands: Vec<RenderCommand>,
}

impl RenderFrame {
    pub fn count_where(&self, pred: impl Fn(&RenderCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(*c)).count()
    }
}

/// Turns scene state into backend-agnostic draw commands.
///
/// Globe geometry never changes and is built once.
#[derive(Debug, Clone)]
pub struct Renderer {
    globe: Vec<RenderCommand>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(GlobeStyle::default())
    }
}

impl Renderer {
    pub fn new(style: GlobeStyle) -> Self {
        let mut globe = surface_strips(&style);
        globe.extend(grid_lines(&style));
        Self { globe }
    }

    /// Draw order: globe, grid, markers, routes, current route, trees,
    /// grass, buildings, overlay.
    pub fn collect(&self, scene: &Scene, camera: &Camera, entry: Option<&str>) -> RenderFrame {
        let mut commands = self.globe.clone();

        for m in scene.markers() {
            commands.push(RenderCommand::Sphere {
                center: m.at.to_cartesian(MARKER_RADIUS),
                radius: MARKER_SIZE,
                color: m.color,
            });
        }

        for r in scene.routes() {
            commands.push(RenderCommand::LineStrip {
                points: r.markers.iter().map(|m| m.at.to_cartesian(ROUTE_RADIUS)).collect(),
                color: r.color,
            });
        }

        let current = scene.current_route();
        if current.len() > 1 {
            commands.push(RenderCommand::LineStrip {
                points: current.iter().map(|m| m.at.to_cartesian(ROUTE_RADIUS)).collect(),
                color: CURRENT_ROUTE_COLOR,
            });
        }

        for t in scene.trees() {
            commands.push(RenderCommand::Cone {
                base: t.at.to_cartesian(DEFAULT_GLOBE_RADIUS),
                base_radius: TREE_BASE_RADIUS,
                height: TREE_HEIGHT,
                color: TREE_COLOR,
            });
        }

        for g in scene.grass() {
            commands.push(RenderCommand::Quad {
                center: g.at.to_cartesian(DEFAULT_GLOBE_RADIUS),
                half_extent: GRASS_HALF_EXTENT,
                color: GRASS_COLOR,
            });
        }

        for b in scene.buildings() {
            commands.push(RenderCommand::Cube {
                center: b.at.to_cartesian(DEFAULT_GLOBE_RADIUS),
                size: b.height,
                color: BUILDING_COLOR,
            });
        }

        if let Some(text) = entry {
            commands.push(RenderCommand::Text {
                position_px: OVERLAY_POSITION_PX,
                text: format!("{OVERLAY_PROMPT}{text}"),
                color: OVERLAY_COLOR,
            });
        }

        RenderFrame {
            view: ViewTransform::from(camera),
            commands,
        }
    }
}
