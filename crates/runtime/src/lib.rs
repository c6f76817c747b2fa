pub mod controller;
pub mod entry;
pub mod event_bus;
pub mod frame;
pub mod input;
pub mod session;

pub use controller::*;
pub use entry::*;
pub use event_bus::*;
pub use frame::*;
pub use input::*;
pub use session::*;
