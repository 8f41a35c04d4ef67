pub mod interval;
pub mod rounding;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Number of decimal places output coordinates are rounded to.
pub const PRECISION_DECIMALS: i32 = 2;
