pub mod scene_record;
pub mod scene_store;

pub use scene_record::*;
pub use scene_store::*;
