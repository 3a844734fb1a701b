pub mod app;
pub mod config;
pub mod constants;
pub mod dial;
pub mod geometry;
pub mod store;
pub mod sync;
pub mod volume;

pub use app::*;
pub use config::*;
pub use dial::*;
pub use geometry::*;
pub use store::*;
pub use sync::*;
pub use volume::*;
