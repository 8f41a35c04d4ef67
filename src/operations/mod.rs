pub mod joint;
mod layout;
pub mod mount;

pub use joint::JointCalculator;
pub use layout::{ArrayLayout, LayoutResult};
pub use mount::MountCalculator;
