pub mod geodesy;
pub mod tile;
pub mod vec;

pub use geodesy::*;
pub use tile::*;
pub use vec::*;
