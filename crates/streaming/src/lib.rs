pub mod tile_source;

pub use tile_source::*;
