/// Initial camera distance along the view axis (negative is away from the viewer).
pub const DEFAULT_ZOOM: f64 = -6.0;

/// Orbit camera around the globe.
///
/// Angles are in degrees and accumulate without wraparound. `zoom` is the
/// translation along the view axis applied before rotation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Rotation about the X axis, driven by vertical drag.
    pub pitch_deg: f64,
    /// Rotation about the Y axis, driven by horizontal drag.
    pub yaw_deg: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pitch_deg: 0.0,
            yaw_deg: 0.0,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Camera {
    pub fn rotate(&mut self, yaw_delta_deg: f64, pitch_delta_deg: f64, limits: &CameraLimits) {
        self.yaw_deg += yaw_delta_deg;
        self.pitch_deg = limits.clamp_pitch(self.pitch_deg + pitch_delta_deg);
    }

    pub fn zoom_by(&mut self, step: f64, limits: &CameraLimits) {
        self.zoom = limits.clamp_zoom(self.zoom + step);
    }
}

/// Opt-in clamping policy for camera state.
///
/// The default is fully unbounded, matching the free accumulation of the
/// interactive viewer. Ranges are inclusive `(min, max)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CameraLimits {
    pub pitch_deg: Option<(f64, f64)>,
    pub zoom: Option<(f64, f64)>,
}

impl CameraLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn clamp_pitch(&self, pitch_deg: f64) -> f64 {
        clamp_opt(pitch_deg, self.pitch_deg)
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        clamp_opt(zoom, self.zoom)
    }
}

fn clamp_opt(v: f64, range: Option<(f64, f64)>) -> f64 {
    match range {
        Some((min, max)) => v.max(min).min(max),
        None => v,
    }
}
