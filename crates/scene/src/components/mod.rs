pub mod annotation;
pub mod color;
pub mod marker;

pub use annotation::*;
pub use color::*;
pub use marker::*;
