use crate::config::PanelSize;
use crate::math::interval::Interval;
use crate::math::Point2;

/// An axis-aligned rectangular panel.
///
/// `(x, y)` is the top-left corner; y grows downward, so
/// `bottom_edge = y + height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Panel {
    /// Creates a panel at `(x, y)` with the run-wide `size`.
    #[must_use]
    pub fn new(x: f64, y: f64, size: PanelSize) -> Self {
        Self {
            x,
            y,
            width: size.width,
            height: size.height,
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// X-coordinate of the right edge.
    #[must_use]
    pub fn right_edge(&self) -> f64 {
        self.x + self.width
    }

    /// Y-coordinate of the bottom edge.
    #[must_use]
    pub fn bottom_edge(&self) -> f64 {
        self.y + self.height
    }

    /// Y-coordinate of the vertical center, where mounts are placed.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// The x-range `[x, right_edge)`.
    #[must_use]
    pub fn x_range(&self) -> Interval {
        Interval::new(self.x, self.right_edge())
    }

    /// The y-range `[y, bottom_edge)`.
    #[must_use]
    pub fn y_range(&self) -> Interval {
        Interval::new(self.y, self.bottom_edge())
    }

    /// Corners in the order top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let (r, b) = (self.right_edge(), self.bottom_edge());
        [
            Point2::new(self.x, self.y),
            Point2::new(r, self.y),
            Point2::new(self.x, b),
            Point2::new(r, b),
        ]
    }

    /// Returns `true` if the y-ranges share interior points.
    #[must_use]
    pub fn overlaps_vertically(&self, other: &Panel) -> bool {
        self.y_range().overlaps(&other.y_range())
    }

    /// Returns `true` if the x-ranges share interior points.
    #[must_use]
    pub fn overlaps_horizontally(&self, other: &Panel) -> bool {
        self.x_range().overlaps(&other.x_range())
    }

    /// Signed distance between the facing vertical edges.
    ///
    /// Negative values mean the x-ranges overlap.
    #[must_use]
    pub fn horizontal_gap(&self, other: &Panel) -> f64 {
        self.x_range().gap_to(&other.x_range())
    }

    /// Signed distance between the facing horizontal edges.
    #[must_use]
    pub fn vertical_gap(&self, other: &Panel) -> f64 {
        self.y_range().gap_to(&other.y_range())
    }

    /// Returns `true` if `other` sits beside this panel with a gap in
    /// `[0, max_gap)` and the two share some vertical extent.
    #[must_use]
    pub fn is_horizontally_adjacent(&self, other: &Panel, max_gap: f64) -> bool {
        if !self.overlaps_vertically(other) {
            return false;
        }
        let gap = self.horizontal_gap(other);
        (0.0..max_gap).contains(&gap)
    }

    /// Returns `true` if `other` sits above or below this panel with a gap
    /// in `[0, max_gap)` and the two share some horizontal extent.
    #[must_use]
    pub fn is_vertically_adjacent(&self, other: &Panel, max_gap: f64) -> bool {
        if !self.overlaps_horizontally(other) {
            return false;
        }
        let gap = self.vertical_gap(other);
        (0.0..max_gap).contains(&gap)
    }

    /// Returns `true` if any corner of this panel lies within `proximity`
    /// of `point` in both axes.
    #[must_use]
    pub fn has_corner_near(&self, point: &Point2, proximity: f64) -> bool {
        self.corners()
            .iter()
            .any(|c| (c.x - point.x).abs() < proximity && (c.y - point.y).abs() < proximity)
    }
}
