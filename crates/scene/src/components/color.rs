/// Linear RGB display color, each channel typically in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color(pub [f32; 3]);

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }
}
