pub mod panel;
pub mod point;

pub use panel::Panel;
pub use point::{Joint, Mount};
