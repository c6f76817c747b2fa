pub mod globe;
pub mod renderer;

pub use globe::*;
pub use renderer::*;
