pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod math;
pub mod operations;

pub use config::LayoutConfig;
pub use error::{LayoutError, Result};
pub use geometry::{Joint, Mount, Panel};
pub use operations::{ArrayLayout, LayoutResult};
