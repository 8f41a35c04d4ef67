use std::hash::{Hash, Hasher};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::math::rounding::{coord_key, round_coord};
use crate::math::Point2;

/// Declares an immutable 2D value point whose equality and hashing use
/// coordinates rounded to the output precision.
///
/// The raw coordinates are kept for further arithmetic (cluster means);
/// every comparison, hash, accessor and serialization rounds first.
macro_rules! rounded_point {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            x: f64,
            y: f64,
        }

        impl $name {
            #[must_use]
            pub fn new(x: f64, y: f64) -> Self {
                Self { x, y }
            }

            /// X-coordinate rounded to the output precision.
            #[must_use]
            pub fn x(&self) -> f64 {
                round_coord(self.x)
            }

            /// Y-coordinate rounded to the output precision.
            #[must_use]
            pub fn y(&self) -> f64 {
                round_coord(self.y)
            }

            /// Unrounded coordinates.
            #[must_use]
            pub fn raw(&self) -> Point2 {
                Point2::new(self.x, self.y)
            }

            fn key(&self) -> (u64, u64) {
                (coord_key(self.x), coord_key(self.y))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.key() == other.key()
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.key().hash(state);
            }
        }

        impl From<Point2> for $name {
            fn from(p: Point2) -> Self {
                Self::new(p.x, p.y)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut s = serializer.serialize_struct(stringify!($name), 2)?;
                s.serialize_field("x", &self.x())?;
                s.serialize_field("y", &self.y())?;
                s.end()
            }
        }
    };
}

rounded_point!(
    /// A fastening location where a panel is fixed to a rafter.
    Mount
);

rounded_point!(
    /// A connector location where two or more panels meet.
    Joint
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn near_duplicates_are_equal() {
        let a = Mount::new(26.000_001, 35.55);
        let b = Mount::new(25.999_999, 35.550_002);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn distinct_at_precision_are_unequal() {
        assert_ne!(Joint::new(44.87, 35.55), Joint::new(44.88, 35.55));
    }

    #[test]
    fn accessors_round_but_raw_does_not() {
        let j = Joint::new(44.875, 35.551);
        assert_eq!(j.x(), 44.88);
        assert_eq!(j.y(), 35.55);
        assert!((j.raw().y - 35.551).abs() < 1e-12);
    }

    #[test]
    fn serializes_rounded_coordinates() {
        let json = serde_json::to_string(&Mount::new(10.004, 35.55)).unwrap();
        assert_eq!(json, r#"{"x":10.0,"y":35.55}"#);
    }
}
